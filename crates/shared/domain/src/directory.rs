use crate::constants::FALLBACK_COUNTRIES;
use serde::{Deserialize, Serialize};

/// Where the directory entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectorySource {
    /// Not populated yet.
    #[default]
    Pending,
    /// Names fetched from the remote directory.
    Remote,
    /// The built-in list, after the fetch failed.
    Fallback,
}

/// Country names offered by the form's country selector.
///
/// Starts empty and loading; populated exactly once, after which it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDirectory {
    entries: Vec<String>,
    loading: bool,
    source: DirectorySource,
}

impl Default for CountryDirectory {
    fn default() -> Self {
        Self::pending()
    }
}

impl CountryDirectory {
    /// An empty directory that is still loading.
    #[must_use]
    pub const fn pending() -> Self {
        Self { entries: Vec::new(), loading: true, source: DirectorySource::Pending }
    }

    /// A settled directory holding the remote names as given.
    #[must_use]
    pub const fn remote(entries: Vec<String>) -> Self {
        Self { entries, loading: false, source: DirectorySource::Remote }
    }

    /// A settled directory holding [`FALLBACK_COUNTRIES`].
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            entries: FALLBACK_COUNTRIES.iter().map(|&name| name.to_owned()).collect(),
            loading: false,
            source: DirectorySource::Fallback,
        }
    }

    /// Settles a pending directory with `other`. Returns `false` if already settled.
    pub fn populate(&mut self, other: Self) -> bool {
        if !self.loading || other.loading {
            return false;
        }
        *self = other;
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn source(&self) -> DirectorySource {
        self.source
    }

    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }
}
