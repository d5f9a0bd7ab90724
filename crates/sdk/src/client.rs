//! ProbModelSEED Client Implementation

use crate::auth::{Credentials, TokenProvider};
use crate::config::ClientConfig;
use crate::error::{Result, SdkError};
use crate::invoker::{Invocation, RpcCall};
use crate::methods::find_method;
use crate::types::{AuthInfo, ReturnArity, RpcMethod, RpcRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// ProbModelSEED service client
///
/// One handle per consumer session. Every call issues one HTTP POST and
/// returns an [`RpcCall`] immediately. Calls made outside a tokio runtime
/// resolve to [`SdkError::NoRuntime`].
///
/// # Example
///
/// ```no_run
/// use probmodelseed_sdk::{AuthInfo, ProbModelSeedClient};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ProbModelSeedClient::builder("https://p3.theseed.org/services/ProbModelSEED")
///     .auth(AuthInfo::new("un=alice|tokenid=...", "alice"))
///     .build()?;
///
/// let models = client.list_models(json!({"path": "/alice/home/models"})).await?;
/// println!("{}", models);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ProbModelSeedClient {
    url: String,
    credentials: Credentials,
    http: reqwest::Client,
    deprecation_warning_sent: AtomicBool,
}

impl ProbModelSeedClient {
    /// Create an unauthenticated client for `url`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::builder(url).build()
    }

    pub fn builder(url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(url)
    }

    /// Create a client from a loaded [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder(config.url.clone());
        if config.token.is_some() || config.user_id.is_some() {
            builder = builder.auth(AuthInfo::new(
                config.token.clone().unwrap_or_default(),
                config.user_id.clone().unwrap_or_default(),
            ));
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Service endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// User id from the static credentials (empty when not configured)
    pub fn user_id(&self) -> &str {
        &self.credentials.auth.user_id
    }

    /// Whether a deprecated `*_async` method has been used on this handle
    pub fn deprecation_warning_sent(&self) -> bool {
        self.deprecation_warning_sent.load(Ordering::Relaxed)
    }

    /// Invoke a remote method.
    ///
    /// `method` is the service-qualified name (`ProbModelSEED.get_model`);
    /// `arity` decides whether `result[0]` or the whole `result` is decoded
    /// into `T`.
    pub fn invoke<T>(&self, method: &str, params: Vec<Value>, arity: ReturnArity) -> RpcCall<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        if method.is_empty() {
            return RpcCall::failed(SdkError::UnknownMethod(String::new()));
        }

        let invocation = Invocation {
            http: self.http.clone(),
            url: self.url.clone(),
            token: self.credentials.resolve(),
            request: RpcRequest::new(method, params),
            arity,
            _marker: PhantomData,
        };
        RpcCall::spawn(invocation.execute())
    }

    /// Invoke a method from the method table by its wire name
    /// (`list_models`, `ModelReconstruction`, ...).
    pub fn call(&self, name: &str, input: impl Serialize) -> RpcCall<Value> {
        match find_method(name) {
            Some(method) => self.call_method(method, input),
            None => RpcCall::failed(SdkError::UnknownMethod(name.to_string())),
        }
    }

    pub(crate) fn call_method(&self, method: &RpcMethod, input: impl Serialize) -> RpcCall<Value> {
        match serde_json::to_value(input) {
            Ok(input) => self.invoke(&method.qualified_name(), vec![input], method.arity),
            Err(e) => RpcCall::failed(e.into()),
        }
    }

    /// Log the `*_async` deprecation notice, once per handle
    pub(crate) fn deprecation_warning(&self) {
        if !self.deprecation_warning_sent.swap(true, Ordering::Relaxed) {
            warn!(
                "DEPRECATION WARNING: '*_async' method names will be removed in a future version. \
                 Please use the identical methods without the '_async' suffix."
            );
        }
    }
}

/// Builder for [`ProbModelSeedClient`]
pub struct ClientBuilder {
    url: String,
    auth: AuthInfo,
    provider: Option<Arc<dyn TokenProvider>>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: AuthInfo::default(),
            provider: None,
            timeout: None,
        }
    }

    /// Static token and user id
    pub fn auth(mut self, auth: AuthInfo) -> Self {
        self.auth = auth;
        self
    }

    /// Token callback, consulted on every call ahead of the static token
    pub fn auth_callback(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Per-request timeout enforced by the HTTP transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ProbModelSeedClient> {
        reqwest::Url::parse(&self.url)
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", self.url, e)))?;

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(|source| SdkError::Connection {
            url: self.url.clone(),
            source,
        })?;

        Ok(ProbModelSeedClient {
            url: self.url,
            credentials: Credentials {
                auth: self.auth,
                provider: self.provider,
            },
            http,
            deprecation_warning_sent: AtomicBool::new(false),
        })
    }
}
