use http::HeaderValue;
use http::header::AUTHORIZATION;
use reqwest::{Request, Response};
use tracing::debug;

use super::error::CatalogError;
use super::oauth::{AuthError, BearerToken, OAuthConfig, TokenCache};

/// HTTP transport wrapper that guarantees every request carries a
/// currently-valid bearer credential.
///
/// The token is resolved lazily on the first call and reused until its
/// expiry instant; the cache key is the expiry alone, so a warm cache adds
/// no side effects to a request. The cache belongs to this instance, so
/// independently configured clients never share tokens.
#[derive(Debug, Clone)]
pub struct AuthorizedClient {
    http: reqwest::Client,
    oauth: OAuthConfig,
    cache: TokenCache,
}

impl AuthorizedClient {
    pub fn new(http: reqwest::Client, oauth: OAuthConfig) -> Self {
        Self {
            http,
            oauth,
            cache: TokenCache::new(),
        }
    }

    /// Sends `request` with a resolved `Authorization: Bearer` header,
    /// overwriting any header the caller may have set.
    ///
    /// There is no retry of any kind here: a 401 from the service surfaces
    /// like any other non-2xx status, and re-authorization only happens on
    /// a later call once the cached token has expired.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Authorization`] when the token exchange fails; the
    ///   request is not sent.
    /// - [`CatalogError::Transport`] on network failure.
    /// - [`CatalogError::UnexpectedStatus`] for any non-2xx response, with
    ///   the original status code and body preserved.
    pub async fn send(&self, mut request: Request) -> Result<Response, CatalogError> {
        let token = self.resolve_token().await?;
        request
            .headers_mut()
            .insert(AUTHORIZATION, bearer_header(&token)?);

        debug!(method = %request.method(), url = %request.url(), "sending...");
        let response = self.http.execute(request).await?;
        debug!(status = %response.status(), "...receiving");

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));
            return Err(CatalogError::UnexpectedStatus {
                status_code: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Reuses the cached token while it is valid; otherwise performs one
    /// client-credentials exchange and caches the result. The cache
    /// serializes this sequence, so concurrent callers share one exchange.
    async fn resolve_token(&self) -> Result<BearerToken, AuthError> {
        self.cache
            .get_or_try_init(|| self.oauth.exchange(&self.http))
            .await
    }
}

fn bearer_header(token: &BearerToken) -> Result<HeaderValue, AuthError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.value())).map_err(|err| {
        AuthError::MalformedToken {
            reason: err.to_string(),
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn should_format_bearer_header() {
        let token = BearerToken::with_expiry("tap-token", Duration::from_secs(60));
        let header = bearer_header(&token).expect("header");
        assert_eq!(header.to_str().expect("ascii"), "Bearer tap-token");
        assert!(header.is_sensitive());
    }

    #[test]
    fn should_reject_tokens_with_invalid_header_characters() {
        let token = BearerToken::new("bad\ntoken");
        let result = bearer_header(&token);
        assert!(matches!(result, Err(AuthError::MalformedToken { .. })));
    }
}
