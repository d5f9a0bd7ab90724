//! RPC Invoker
//!
//! Sends one JSON-RPC 1.1 envelope per call and maps the HTTP response to a
//! value or an [`SdkError`].

use crate::error::{ErrorPayload, Result, SdkError};
use crate::types::{ReturnArity, RpcRequest, RpcResponse};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to an in-flight RPC call.
///
/// Resolves exactly once, to the decoded result or an error. Dropping the
/// handle detaches the request rather than cancelling it; use
/// [`RpcCall::abort`] for that.
#[must_use = "an RpcCall does nothing useful unless awaited or aborted"]
pub struct RpcCall<T> {
    state: CallState<T>,
}

enum CallState<T> {
    InFlight(JoinHandle<Result<T>>),
    /// Failed before a request was issued; taken on first poll
    Failed(Option<SdkError>),
}

impl<T: Send + 'static> RpcCall<T> {
    /// Spawn `fut` on the current tokio runtime.
    ///
    /// Outside a runtime the call resolves to [`SdkError::NoRuntime`]
    /// instead of panicking.
    pub(crate) fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        match Handle::try_current() {
            Ok(runtime) => Self {
                state: CallState::InFlight(runtime.spawn(fut)),
            },
            Err(e) => Self::failed(SdkError::NoRuntime(e.to_string())),
        }
    }
}

impl<T> RpcCall<T> {
    /// A call that failed before any request was issued
    pub(crate) fn failed(err: SdkError) -> Self {
        Self {
            state: CallState::Failed(Some(err)),
        }
    }

    /// Cancel the underlying HTTP request.
    ///
    /// Best effort: a response that already arrived is not reverted. An
    /// aborted call resolves to [`SdkError::Cancelled`].
    pub fn abort(&self) {
        if let CallState::InFlight(handle) = &self.state {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        match &self.state {
            CallState::InFlight(handle) => handle.is_finished(),
            CallState::Failed(_) => true,
        }
    }
}

impl<T> Future for RpcCall<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            CallState::InFlight(handle) => {
                let joined = ready!(Pin::new(handle).poll(cx));
                Poll::Ready(match joined {
                    Ok(result) => result,
                    Err(e) if e.is_cancelled() => Err(SdkError::Cancelled),
                    Err(e) => Err(SdkError::Other(format!("RPC task failed: {}", e))),
                })
            }
            CallState::Failed(err) => Poll::Ready(Err(err
                .take()
                .unwrap_or_else(|| SdkError::Other("RpcCall polled after completion".to_string())))),
        }
    }
}

/// Everything a single request needs, owned so it can move into a task
pub(crate) struct Invocation<T> {
    pub(crate) http: reqwest::Client,
    pub(crate) url: String,
    pub(crate) token: Option<String>,
    pub(crate) request: RpcRequest,
    pub(crate) arity: ReturnArity,
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Invocation<T> {
    pub(crate) async fn execute(self) -> Result<T> {
        let Invocation {
            http,
            url,
            token,
            request,
            arity,
            ..
        } = self;

        debug!(
            method = %request.method,
            id = %request.id,
            authorized = token.is_some(),
            "Sending RPC request"
        );

        let body = serde_json::to_string(&request)?;
        let mut builder = http.post(&url).body(body);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, token);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| SdkError::Connection {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        debug!(method = %request.method, id = %request.id, status = %status, "RPC response received");

        if !status.is_success() {
            // An unreadable error body is treated like a missing one
            let text = response.text().await.unwrap_or_default();
            return Err(SdkError::Transport {
                http_status: status.as_u16(),
                payload: ErrorPayload::from_body(&text),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| SdkError::Connection {
                url: url.clone(),
                source,
            })?;

        decode_success(&url, text, arity)
    }
}

/// Decode a 2xx body according to the method's declared arity.
pub(crate) fn decode_success<T: DeserializeOwned>(
    url: &str,
    body: String,
    arity: ReturnArity,
) -> Result<T> {
    let parsed = match RpcResponse::parse(&body) {
        Ok(parsed) => parsed,
        Err(reason) => return Err(SdkError::malformed(url, body, reason)),
    };

    let Some(value) = arity.extract(parsed.result) else {
        return Err(SdkError::malformed(
            url,
            body,
            "response carries no return value",
        ));
    };

    serde_json::from_value(value).map_err(|e| SdkError::malformed(url, body, e.to_string()))
}
