//! OAuth2 client-credentials configuration.

use url::Url;

use super::error::AuthError;
use super::secret::SecureString;

/// Configuration for the client-credentials grant.
///
/// Built with [`OAuthConfig::client_credentials`]; the values are consumed
/// as already-parsed configuration and are never re-read from anywhere.
///
/// The client secret is held as a [`SecureString`], so debug output of the
/// config never exposes it.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub(crate) client_id: String,
    pub(crate) client_secret: SecureString,
    pub(crate) token_url: Url,
    pub(crate) scopes: Vec<String>,
}

impl OAuthConfig {
    /// Creates a builder for the client-credentials flow.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidTokenEndpoint`] when `token_url` cannot
    /// be parsed as a URL.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
        token_url: impl AsRef<str>,
    ) -> Result<OAuthConfigBuilder, AuthError> {
        let token_url =
            Url::parse(token_url.as_ref()).map_err(|err| AuthError::InvalidTokenEndpoint {
                url: token_url.as_ref().to_string(),
                reason: err.to_string(),
            })?;

        Ok(OAuthConfigBuilder {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url,
            scopes: Vec::new(),
        })
    }
}

/// Builder for [`OAuthConfig`].
#[derive(Debug, Clone)]
pub struct OAuthConfigBuilder {
    client_id: String,
    client_secret: SecureString,
    token_url: Url,
    scopes: Vec<String>,
}

impl OAuthConfigBuilder {
    /// Adds a scope to request during the token exchange.
    #[must_use]
    pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Adds multiple scopes.
    #[must_use]
    pub fn add_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> OAuthConfig {
        let Self {
            client_id,
            client_secret,
            token_url,
            scopes,
        } = self;
        OAuthConfig {
            client_id,
            client_secret,
            token_url,
            scopes,
        }
    }
}
