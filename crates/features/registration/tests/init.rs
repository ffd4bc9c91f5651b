mod fixtures;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use fixtures::{Recorder, client, closed_port, serve};
use safar_domain::config::IntakeConfig;
use safar_domain::directory::DirectorySource;
use safar_domain::outcome::SubmissionOutcome;
use safar_kernel::i18n::Catalog;
use safar_registration::{
    RegistrationError, RegistrationForm, ResponseMode, RestCountries, ScriptTransport,
    SubmissionSettings, init,
};
use std::sync::Arc;

const COUNTRIES: &str = r#"[{"name":{"common":"Uzbekistan"}},{"name":{"common":"Turkey"}}]"#;

#[tokio::test]
async fn init_opens_a_form_from_config() {
    let addr = closed_port().await;
    let mut config = IntakeConfig::default();
    config.directory.endpoint = format!("http://{addr}/v3.1/all?fields=name");
    config.submission.endpoint = format!("http://{addr}/exec");
    config.submission.verify_status = true;

    let form = init(&config, Arc::new(Catalog::for_tag("ru"))).expect("init should succeed");

    assert_eq!(form.directory().ready().await.source(), DirectorySource::Fallback);
    assert!(form.form().snapshot().is_pristine());
    assert!(form.controller().can_submit());
}

#[tokio::test]
async fn init_rejects_blank_endpoints() {
    let mut config = IntakeConfig::default();
    config.submission.endpoint = "   ".to_owned();

    let err = init(&config, Arc::new(Catalog::default())).unwrap_err();
    assert!(matches!(err, RegistrationError::Config { .. }));
}

#[tokio::test]
async fn a_lead_travels_from_form_to_endpoint() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/v3.1/all", get(|| async { COUNTRIES }))
        .route(
            "/exec",
            post(|State(recorder): State<Recorder>, headers: HeaderMap, body: Bytes| async move {
                recorder.record(&headers, &body);
            }),
        )
        .with_state(recorder.clone());
    let addr = serve(router).await;

    let source = RestCountries::with_client(client(), &format!("http://{addr}/v3.1/all")).unwrap();
    let endpoint = format!("http://{addr}/exec");
    let transport =
        ScriptTransport::with_client(client(), &endpoint, ResponseMode::Verified).unwrap();
    let form = RegistrationForm::open(
        source,
        transport,
        Arc::new(Catalog::default()),
        SubmissionSettings::default(),
    );

    assert!(!form.select_country("Turkey"), "nothing to choose from while loading");
    let directory = form.directory().ready().await;
    assert_eq!(directory.entries(), ["Turkey", "Uzbekistan"]);

    form.form().set_first_name("  Amy ");
    form.form().set_last_name("Ortiz");
    form.form().set_phone_suffix("91 234-56-78");
    form.form().set_message("Two weeks in Istanbul");
    assert!(!form.select_country("Atlantis"));
    assert!(form.select_country("Turkey"));

    assert_eq!(form.submit().await, SubmissionOutcome::Succeeded);
    assert!(form.form().snapshot().is_pristine());

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["firstName"], "Amy");
    assert_eq!(requests[0].body["phone"], "+998912345678");
    assert_eq!(requests[0].body["country"], "Turkey");
    assert_eq!(requests[0].body["message"], "Two weeks in Istanbul");
    assert!(requests[0].body["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
}
