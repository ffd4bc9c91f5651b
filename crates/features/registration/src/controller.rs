//! # Submission Controller
//!
//! Drives one submit attempt at a time through
//! `Idle -> Validating -> Submitting -> Succeeded | Failed`, publishing every
//! step as a [`SubmissionView`] on a `watch` channel.
//!
//! Feedback expires on its own: each banner schedules a clear after the
//! configured delay, and a newer submit cancels the pending clear.

use crate::form::SharedForm;
use crate::transport::Transport;
use crate::validation::validate;
use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use safar_domain::config::SubmissionConfig;
use safar_domain::constants::{FEEDBACK_TTL_SECS, PHONE_PREFIX, keys};
use safar_domain::outcome::{Feedback, SubmissionOutcome, SubmissionView};
use safar_domain::payload::Payload;
use safar_kernel::i18n::Localizer;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Per-controller settings taken from the `submission` config section.
#[derive(Debug, Clone)]
pub struct SubmissionSettings {
    pub phone_prefix: String,
    pub feedback_ttl: Duration,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            phone_prefix: PHONE_PREFIX.to_owned(),
            feedback_ttl: Duration::from_secs(FEEDBACK_TTL_SECS),
        }
    }
}

impl From<&SubmissionConfig> for SubmissionSettings {
    fn from(config: &SubmissionConfig) -> Self {
        Self { phone_prefix: config.phone_prefix.clone(), feedback_ttl: config.feedback_ttl() }
    }
}

/// Turns the current form into at most one lead in flight.
///
/// Cheap to clone; clones drive the same form and publish to the same view.
pub struct SubmissionController<T> {
    inner: Arc<ControllerInner<T>>,
}

struct ControllerInner<T> {
    transport: T,
    localizer: Arc<dyn Localizer>,
    form: SharedForm,
    settings: SubmissionSettings,
    view: Arc<watch::Sender<SubmissionView>>,
    /// Bumped by every submit trigger; a clear scheduled under an older epoch is stale.
    epoch: Arc<AtomicU64>,
    clear_timer: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Clone for SubmissionController<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> fmt::Debug for SubmissionController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("settings", &self.inner.settings)
            .field("view", &*self.inner.view.borrow())
            .finish_non_exhaustive()
    }
}

impl<T> Drop for ControllerInner<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.clear_timer.get_mut().take() {
            timer.abort();
        }
    }
}

impl<T: Transport> SubmissionController<T> {
    pub fn new(
        transport: T,
        localizer: Arc<dyn Localizer>,
        form: SharedForm,
        settings: SubmissionSettings,
    ) -> Self {
        let (view, _) = watch::channel(SubmissionView::default());
        Self {
            inner: Arc::new(ControllerInner {
                transport,
                localizer,
                form,
                settings,
                view: Arc::new(view),
                epoch: Arc::new(AtomicU64::new(0)),
                clear_timer: Mutex::new(None),
            }),
        }
    }

    /// The form this controller submits.
    #[must_use]
    pub fn form(&self) -> &SharedForm {
        &self.inner.form
    }

    /// The latest published view.
    #[must_use]
    pub fn view(&self) -> SubmissionView {
        self.inner.view.borrow().clone()
    }

    /// Receives every state and feedback change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SubmissionView> {
        self.inner.view.subscribe()
    }

    /// Whether the submit affordance is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.inner.view.borrow().can_submit()
    }

    /// Runs one submit trigger to completion and returns the resulting outcome.
    ///
    /// A trigger while a lead is already in flight is ignored and reports
    /// [`SubmissionOutcome::Submitting`]. Validation failures end in
    /// [`SubmissionOutcome::Idle`] with error feedback and never reach the network.
    ///
    /// Must be called from within a Tokio runtime (the feedback clear is a spawned task).
    pub async fn submit(&self) -> SubmissionOutcome {
        let Some(epoch) = self.begin() else {
            debug!("Submit ignored, a lead is already in flight");
            return SubmissionOutcome::Submitting;
        };

        let form = self.inner.form.snapshot();
        if let Err(rule) = validate(&form) {
            let text = self.inner.localizer.translate(rule.message_key());
            return self.finish(SubmissionOutcome::Idle, Feedback::error(text));
        }

        self.inner.view.send_modify(|view| view.outcome = SubmissionOutcome::Submitting);
        let mut in_flight =
            InFlight { view: &self.inner.view, epoch: &self.inner.epoch, started: epoch, armed: true };
        let payload = Payload::from_form(&form, &self.inner.settings.phone_prefix, timestamp());

        let sent = self.inner.transport.send(&payload).await;
        in_flight.disarm();

        match sent {
            Ok(()) => {
                info!(country = payload.country(), "Lead submitted");
                self.inner.form.clear();
                let text = self.inner.localizer.translate(keys::SUCCESS);
                self.finish(SubmissionOutcome::Succeeded, Feedback::success(text))
            },
            Err(err) => {
                error!(error = %err, "Lead submission failed");
                let text = self.inner.localizer.translate(keys::ERROR);
                self.finish(SubmissionOutcome::Failed { reason: text.clone() }, Feedback::error(text))
            },
        }
    }

    /// Enters `Validating` unless a lead is in flight, dropping any pending feedback.
    ///
    /// Returns the epoch of the new attempt.
    fn begin(&self) -> Option<u64> {
        let mut started = None;
        self.inner.view.send_if_modified(|view| {
            if view.outcome.is_submitting() {
                return false;
            }
            started = Some(self.inner.epoch.fetch_add(1, Ordering::AcqRel) + 1);
            *view = SubmissionView { outcome: SubmissionOutcome::Validating, feedback: None };
            true
        });

        if started.is_some()
            && let Some(timer) = self.inner.clear_timer.lock().take()
        {
            timer.abort();
        }
        started
    }

    fn finish(&self, outcome: SubmissionOutcome, feedback: Feedback) -> SubmissionOutcome {
        self.inner.view.send_replace(SubmissionView {
            outcome: outcome.clone(),
            feedback: Some(feedback),
        });
        self.schedule_clear();
        outcome
    }

    fn schedule_clear(&self) {
        let view = Arc::clone(&self.inner.view);
        let epoch = Arc::clone(&self.inner.epoch);
        let scheduled = epoch.load(Ordering::Acquire);
        let ttl = self.inner.settings.feedback_ttl;

        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            view.send_if_modified(|current| {
                // Checked under the channel lock so a concurrent submit always wins.
                if epoch.load(Ordering::Acquire) != scheduled || current.outcome.is_submitting() {
                    return false;
                }
                *current = SubmissionView::default();
                true
            });
        });

        if let Some(previous) = self.inner.clear_timer.lock().replace(timer) {
            previous.abort();
        }
    }
}

/// Returns the view to `Idle` when a submit is dropped before the transport answers.
struct InFlight<'a> {
    view: &'a watch::Sender<SubmissionView>,
    epoch: &'a AtomicU64,
    started: u64,
    armed: bool,
}

impl InFlight<'_> {
    const fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let reset = self.view.send_if_modified(|view| {
            if self.epoch.load(Ordering::Acquire) != self.started || !view.outcome.is_submitting() {
                return false;
            }
            *view = SubmissionView::default();
            true
        });
        if reset {
            warn!("Submission abandoned before the transport answered");
        }
    }
}

/// ISO-8601 UTC instant with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
