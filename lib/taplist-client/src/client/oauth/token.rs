//! Bearer token state and the per-client token cache.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::error::AuthError;

/// An OAuth2 access token with expiry tracking.
///
/// The raw value never leaves the authorizing transport; it is zeroed on
/// drop and redacted in debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct BearerToken {
    value: String,
    #[zeroize(skip)]
    issued_at: Instant,
    /// When the token expires; `None` means the token endpoint did not
    /// report a lifetime and the token is reused until the cache is gone.
    #[zeroize(skip)]
    expires_at: Option<Instant>,
}

impl BearerToken {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            issued_at: Instant::now(),
            expires_at: None,
        }
    }

    pub(crate) fn with_expiry(value: impl Into<String>, expires_in: Duration) -> Self {
        let issued_at = Instant::now();
        Self {
            value: value.into(),
            issued_at,
            expires_at: Some(issued_at + expires_in),
        }
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// A token is expired at its expiry instant, not after it.
    pub(crate) fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BearerToken")
            .field("value", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Cache for the current bearer token of one client instance.
///
/// `get_or_try_init` holds the lock across the whole check/fetch/store
/// sequence, so concurrent callers with a cold or expired cache converge on
/// a single token exchange and the others reuse its result.
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenCache {
    inner: Arc<Mutex<Option<BearerToken>>>,
}

impl TokenCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token while it is valid, otherwise runs `fetch`
    /// and stores its result. A failed fetch leaves the cache untouched, so
    /// the next caller retries.
    pub(crate) async fn get_or_try_init<F, Fut>(&self, fetch: F) -> Result<BearerToken, AuthError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<BearerToken, AuthError>>,
    {
        let mut guard = self.inner.lock().await;
        if let Some(token) = guard.as_ref().filter(|token| !token.is_expired()) {
            return Ok(token.clone());
        }

        let token = fetch().await?;
        *guard = Some(token.clone());
        Ok(token)
    }
}
