#![allow(dead_code, unreachable_pub)]

use axum::Router;
use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use parking_lot::Mutex;
use safar_domain::directory::CountryDirectory;
use safar_domain::form::FormState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port for the rest of the test.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fixture server");
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    listener.local_addr().expect("probe address")
}

/// Client that ignores proxy settings of the host running the tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().expect("http client")
}

/// A request body captured by a fixture handler.
#[derive(Debug, Clone)]
pub struct Captured {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl Recorder {
    pub fn record(&self, headers: &HeaderMap, body: &Bytes) {
        let content_type =
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);
        let body = serde_json::from_slice(body).unwrap_or(serde_json::Value::Null);
        self.requests.lock().push(Captured { content_type, body });
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().clone()
    }
}

/// A form that passes every rule.
pub fn valid_form() -> FormState {
    let mut form = FormState::new();
    form.set_first_name("Amy");
    form.set_last_name("Ortiz");
    form.set_phone_suffix("912345678");
    form.select_country("Uzbekistan", &CountryDirectory::fallback());
    form.set_message("Hi");
    form
}
