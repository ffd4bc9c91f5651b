mod fixtures;

use fixtures::valid_form;
use parking_lot::Mutex;
use safar_domain::outcome::{FeedbackKind, SubmissionOutcome, SubmissionView};
use safar_domain::payload::Payload;
use safar_kernel::i18n::{Catalog, Locale, Localizer};
use safar_registration::{
    RegistrationError, SharedForm, SubmissionController, SubmissionSettings, Transport,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Records every lead; optionally slow, optionally failing.
#[derive(Debug, Clone, Default)]
struct Recording {
    sent: Arc<Mutex<Vec<Payload>>>,
    delay: Duration,
    fail: bool,
}

impl Recording {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn slow(delay: Duration) -> Self {
        Self { delay, ..Self::default() }
    }

    fn sent(&self) -> Vec<Payload> {
        self.sent.lock().clone()
    }
}

impl Transport for Recording {
    async fn send(&self, payload: &Payload) -> Result<(), RegistrationError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.sent.lock().push(payload.clone());
        if self.fail { Err("connection reset".into()) } else { Ok(()) }
    }
}

fn catalog() -> Arc<dyn Localizer> {
    Arc::new(Catalog::new(Locale::En))
}

fn controller(transport: Recording, form: SharedForm) -> SubmissionController<Recording> {
    SubmissionController::new(transport, catalog(), form, SubmissionSettings::default())
}

#[tokio::test(start_paused = true)]
async fn validation_failures_never_reach_the_transport() {
    let transport = Recording::default();
    let form = SharedForm::from(valid_form());
    form.set_first_name("");
    let controller = controller(transport.clone(), form.clone());
    let mut updates = controller.subscribe();

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmissionOutcome::Idle);
    assert!(transport.sent().is_empty());
    let view = controller.view();
    let feedback = view.banner().expect("error banner");
    assert_eq!(feedback.kind, FeedbackKind::Error);
    assert_eq!(feedback.text, "Please enter your first name.");
    assert!(controller.can_submit());
    assert!(updates.has_changed().unwrap());
    assert!(!updates.borrow_and_update().outcome.is_submitting());
    assert_eq!(form.snapshot().last_name(), "Ortiz", "a rejected form keeps its values");
}

// Scenario D
#[tokio::test(start_paused = true)]
async fn transport_failures_keep_the_form() {
    let transport = Recording::failing();
    let form = SharedForm::from(valid_form());
    let controller = controller(transport.clone(), form.clone());

    let outcome = controller.submit().await;

    let generic = "Something went wrong. Please try again later.";
    assert_eq!(outcome, SubmissionOutcome::Failed { reason: generic.to_owned() });
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(form.snapshot(), valid_form());
    assert!(controller.can_submit());
    let view = controller.view();
    assert!(view.banner().is_some_and(|f| f.is_error() && f.text == generic));
}

// Scenario E
#[tokio::test(start_paused = true)]
async fn success_clears_the_form_and_feedback_expires() {
    let transport = Recording::default();
    let form = SharedForm::from(valid_form());
    let controller = controller(transport.clone(), form.clone());

    assert_eq!(controller.submit().await, SubmissionOutcome::Succeeded);
    assert!(form.snapshot().is_pristine());
    assert_eq!(transport.sent()[0].phone(), "+998912345678");
    let feedback = controller.view().feedback.expect("success banner");
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert_eq!(feedback.text, "Thank you! Your request has been sent.");

    sleep(Duration::from_millis(5_999)).await;
    assert_eq!(controller.view().outcome, SubmissionOutcome::Succeeded);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(controller.view(), SubmissionView::default());
}

#[tokio::test(start_paused = true)]
async fn a_new_submit_supersedes_pending_feedback() {
    let transport = Recording::slow(Duration::from_secs(4));
    let form = SharedForm::from(valid_form());
    form.set_phone_suffix("12345");
    let controller = controller(transport.clone(), form.clone());

    // t = 0: phone-format error, clear scheduled for t = 6.
    controller.submit().await;
    assert!(controller.view().banner().is_some_and(|f| f.is_error()));

    sleep(Duration::from_secs(3)).await;
    form.set_phone_suffix("912345678");
    let submitting = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    tokio::task::yield_now().await;

    // t = 3: the error is gone immediately and the lead is in flight.
    let view = controller.view();
    assert_eq!(view.outcome, SubmissionOutcome::Submitting);
    assert!(view.feedback.is_none());
    assert!(!controller.can_submit());

    // t = 6.5: the stale clear must not touch the in-flight submission.
    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(controller.view().outcome, SubmissionOutcome::Submitting);

    // t = 7: settled; its own banner lives until t = 13.
    assert_eq!(submitting.await.unwrap(), SubmissionOutcome::Succeeded);
    sleep(Duration::from_millis(5_900)).await;
    assert_eq!(controller.view().outcome, SubmissionOutcome::Succeeded);
    sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.view(), SubmissionView::default());
}

#[tokio::test(start_paused = true)]
async fn triggers_during_submission_are_ignored() {
    let transport = Recording::slow(Duration::from_secs(1));
    let controller = controller(transport.clone(), SharedForm::from(valid_form()));

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    tokio::task::yield_now().await;

    assert_eq!(controller.submit().await, SubmissionOutcome::Submitting);
    assert_eq!(first.await.unwrap(), SubmissionOutcome::Succeeded);
    assert_eq!(transport.sent().len(), 1, "exactly one lead in flight");
}

#[tokio::test(start_paused = true)]
async fn an_abandoned_submit_reenables_the_form() {
    let transport = Recording::slow(Duration::from_secs(3600));
    let controller = controller(transport.clone(), SharedForm::from(valid_form()));

    let abandoned = tokio::time::timeout(Duration::from_secs(1), controller.submit()).await;
    assert!(abandoned.is_err());
    assert_eq!(controller.view(), SubmissionView::default());
    assert!(controller.can_submit());

    assert_eq!(controller.submit().await, SubmissionOutcome::Succeeded);
    assert_eq!(transport.sent().len(), 1, "the retry reaches the transport");
}

#[tokio::test(start_paused = true)]
async fn states_are_published_in_order() {
    let transport = Recording::slow(Duration::from_millis(10));
    let controller = controller(transport, SharedForm::from(valid_form()));
    let mut updates = controller.subscribe();

    let observer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while updates.changed().await.is_ok() {
            let outcome = updates.borrow_and_update().outcome.clone();
            let done = outcome == SubmissionOutcome::Succeeded;
            seen.push(outcome);
            if done {
                break;
            }
        }
        seen
    });

    controller.submit().await;
    let seen = observer.await.unwrap();
    assert_eq!(seen.first(), Some(&SubmissionOutcome::Submitting));
    assert_eq!(seen.last(), Some(&SubmissionOutcome::Succeeded));
}

#[tokio::test(start_paused = true)]
async fn feedback_delay_is_configurable() {
    let settings = SubmissionSettings { feedback_ttl: Duration::from_secs(1), ..Default::default() };
    let controller = SubmissionController::new(
        Recording::failing(),
        catalog(),
        SharedForm::from(valid_form()),
        settings,
    );

    controller.submit().await;
    sleep(Duration::from_millis(1_001)).await;
    assert_eq!(controller.view(), SubmissionView::default());
}

#[tokio::test(start_paused = true)]
async fn feedback_is_localized() {
    let controller = SubmissionController::new(
        Recording::default(),
        Arc::new(Catalog::new(Locale::Ru)),
        SharedForm::new(),
        SubmissionSettings::default(),
    );

    controller.submit().await;
    let feedback = controller.view().feedback.expect("error banner");
    assert_eq!(feedback.text, "Пожалуйста, введите имя.");
}
