use bitflags::bitflags;

bitflags! {
    /// A set of registration form fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FormFields: u8 {
        const FIRST_NAME = 1 << 0;
        const LAST_NAME = 1 << 1;
        const PHONE = 1 << 2;
        const COUNTRY = 1 << 3;
        const MESSAGE = 1 << 4;

        const ALL = Self::FIRST_NAME.bits()
            | Self::LAST_NAME.bits()
            | Self::PHONE.bits()
            | Self::COUNTRY.bits()
            | Self::MESSAGE.bits();
    }
}

impl From<&str> for FormFields {
    /// Maps a payload field name (`firstName`, `phone`, ...) to its flag.
    fn from(name: &str) -> Self {
        match name {
            "firstName" => Self::FIRST_NAME,
            "lastName" => Self::LAST_NAME,
            "phone" | "phoneSuffix" => Self::PHONE,
            "country" => Self::COUNTRY,
            "message" => Self::MESSAGE,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}
