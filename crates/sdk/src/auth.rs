//! Authorization token resolution

use crate::types::AuthInfo;
use std::fmt;
use std::sync::Arc;

/// Token provider interface.
///
/// Called once per outgoing request; returning `None` sends the request
/// without an `Authorization` header.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Credentials held by a client handle
#[derive(Clone, Default)]
pub(crate) struct Credentials {
    pub(crate) auth: AuthInfo,
    pub(crate) provider: Option<Arc<dyn TokenProvider>>,
}

impl Credentials {
    /// Resolve the header value for one request.
    ///
    /// A configured provider wins even over a non-empty static token.
    pub(crate) fn resolve(&self) -> Option<String> {
        match &self.provider {
            Some(provider) => provider.token(),
            None if !self.auth.token.is_empty() => Some(self.auth.token.clone()),
            None => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.auth.user_id)
            .field("has_token", &!self.auth.token.is_empty())
            .field("has_provider", &self.provider.is_some())
            .finish()
    }
}
