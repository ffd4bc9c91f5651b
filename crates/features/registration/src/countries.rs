//! # Country Directory Loader
//!
//! Fetches the country names offered by the form's selector once, when the form
//! becomes active. Any failure is absorbed: the directory settles on the
//! built-in fallback list and the problem is only logged.
//!
//! [`CountryLoader::spawn`] runs the fetch in the background and returns a
//! [`DirectoryHandle`]. Dropping the handle marks the form as torn down, after
//! which a late result is discarded instead of being published.

use crate::collation::sort_names;
use crate::error::{RegistrationError, RegistrationErrorExt};
use safar_domain::config::DirectoryConfig;
use safar_domain::directory::CountryDirectory;
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Anything that can produce the raw list of country names.
pub trait CountrySource: Send + Sync + 'static {
    /// Returns the non-empty names, in any order.
    fn fetch_names(&self) -> impl Future<Output = Result<Vec<String>, RegistrationError>> + Send;
}

/// The public REST Countries directory (or anything answering in its shape).
#[derive(Debug, Clone)]
pub struct RestCountries {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: Option<CountryName>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: Option<String>,
}

impl RestCountries {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Config`] for a blank endpoint and
    /// [`RegistrationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &DirectoryConfig) -> Result<Self, RegistrationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Building directory client")?;
        Self::with_client(client, &config.endpoint)
    }

    /// Uses an existing client.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Config`] for a blank endpoint.
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self, RegistrationError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(RegistrationError::Config {
                message: "directory endpoint is empty".into(),
                context: None,
            });
        }
        Ok(Self { client, endpoint: endpoint.to_owned() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CountrySource for RestCountries {
    async fn fetch_names(&self) -> Result<Vec<String>, RegistrationError> {
        debug!(endpoint = %self.endpoint, "Fetching country directory");

        let response =
            self.client.get(&self.endpoint).send().await.context("Requesting country directory")?;
        let status = response.status();
        if !status.is_success() {
            return Err(RegistrationError::status(status)).context("Requesting country directory");
        }

        let body = response.bytes().await.context("Reading country directory")?;
        let records: Vec<CountryRecord> =
            serde_json::from_slice(&body).context("Parsing country directory")?;

        Ok(records
            .into_iter()
            .filter_map(|record| record.name.and_then(|name| name.common))
            .filter(|name| !name.is_empty())
            .collect())
    }
}

/// Fetches once and settles a directory. Never fails.
pub async fn load_directory<S>(source: &S) -> CountryDirectory
where
    S: CountrySource + ?Sized,
{
    match source.fetch_names().await {
        Ok(mut names) => {
            sort_names(&mut names);
            info!(count = names.len(), "Country directory loaded");
            CountryDirectory::remote(names)
        },
        Err(err) => {
            warn!(error = %err, "Country directory unavailable, using the fallback list");
            CountryDirectory::fallback()
        },
    }
}

/// Starts directory loads tied to the lifetime of a form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryLoader;

impl CountryLoader {
    /// Loads the directory in a background task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<S: CountrySource>(source: S) -> DirectoryHandle {
        let (sender, receiver) = watch::channel(CountryDirectory::pending());
        let active = Arc::new(AtomicBool::new(true));
        let guard = Arc::clone(&active);

        tokio::spawn(async move {
            let directory = load_directory(&source).await;
            if !guard.load(Ordering::Acquire) {
                debug!("Form torn down before the directory settled, discarding result");
                return;
            }
            sender.send_if_modified(|current| current.populate(directory));
        });

        DirectoryHandle { receiver, active }
    }
}

/// The form's view of its country directory.
///
/// Dropping the handle (or calling [`DirectoryHandle::detach`]) tears the form
/// down: a fetch still in flight will not publish its result.
#[derive(Debug)]
pub struct DirectoryHandle {
    receiver: watch::Receiver<CountryDirectory>,
    active: Arc<AtomicBool>,
}

impl DirectoryHandle {
    /// The directory as it is right now (possibly still loading).
    #[must_use]
    pub fn current(&self) -> CountryDirectory {
        self.receiver.borrow().clone()
    }

    /// A receiver notified when the directory settles.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CountryDirectory> {
        self.receiver.clone()
    }

    /// Waits until the directory has settled.
    pub async fn ready(&self) -> CountryDirectory {
        let mut receiver = self.receiver.clone();
        if let Ok(directory) = receiver.wait_for(|directory| !directory.loading()).await {
            return directory.clone();
        }
        // The loader only goes away without publishing once the form is gone.
        receiver.borrow().clone()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Tears the form down explicitly.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for DirectoryHandle {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}
