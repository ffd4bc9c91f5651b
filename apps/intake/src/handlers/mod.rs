pub mod countries;
pub mod lead;
