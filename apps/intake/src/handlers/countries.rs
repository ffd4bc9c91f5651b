use anyhow::Result;
use safar::domain::config::IntakeConfig;
use safar::domain::constants::keys;
use safar::domain::directory::DirectorySource;
use safar::kernel::i18n::{Catalog, Localizer};

/// Prints the directory the country selector would offer.
pub async fn list_countries(config: &IntakeConfig) -> Result<()> {
    let catalog = Catalog::for_tag(&config.locale);
    let form = safar::open(config)?;

    println!("{}", catalog.translate(keys::LOADING_COUNTRIES));
    let directory = form.directory().ready().await;

    for name in directory.entries() {
        println!("  {name}");
    }

    let count = directory.entries().len().to_string();
    println!("{}", catalog.translate_with(keys::SUMMARY, &[("count", &count)]));
    if directory.source() == DirectorySource::Fallback {
        println!("(built-in list: the country directory could not be loaded)");
    }

    Ok(())
}
