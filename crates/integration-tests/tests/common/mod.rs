//! In-process mock of the ProbModelSEED HTTP endpoint

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SERVICE_PATH: &str = "/services/ProbModelSEED";

/// What the mock answers to one request
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
            delay: None,
        }
    }

    pub fn ok_json(body: Value) -> Self {
        Self::ok(body.to_string())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn envelope(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

type Responder = dyn Fn(&Value) -> Reply + Send + Sync;

struct Inner {
    responder: Box<Responder>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockService {
    pub url: String,
    inner: Arc<Inner>,
}

impl MockService {
    /// Start a mock that answers every request through `responder`, which
    /// receives the parsed request envelope.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Value) -> Reply + Send + Sync + 'static,
    {
        let inner = Arc::new(Inner {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(SERVICE_PATH, post(handle))
            .with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}{}", addr, SERVICE_PATH),
            inner,
        }
    }

    /// Start a mock that always answers with the same status and body
    pub async fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| Reply::status(status, body.clone())).await
    }

    /// Start a mock that answers `{"result": [<method name>]}`
    pub async fn echo_method() -> Self {
        Self::start(|envelope| {
            Reply::ok_json(serde_json::json!({ "result": [envelope["method"].clone()] }))
        })
        .await
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request received")
    }
}

async fn handle(
    State(inner): State<Arc<Inner>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let envelope: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let reply = (inner.responder)(&envelope);

    inner
        .requests
        .lock()
        .unwrap()
        .push(Recorded { authorization, body });

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (reply.status, reply.body)
}
