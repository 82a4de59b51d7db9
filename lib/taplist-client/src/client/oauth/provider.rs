//! Client-credentials token exchange.

use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, Scope, TokenResponse, TokenUrl};
use tracing::debug;

use super::config::OAuthConfig;
use super::error::AuthError;
use super::token::BearerToken;

impl OAuthConfig {
    /// Performs one client-credentials exchange against the token endpoint.
    ///
    /// The exchange runs over the same `reqwest` client as the catalog
    /// calls, so connection pooling and timeouts apply to it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ExchangeFailed`] when the endpoint is
    /// unreachable, answers with a non-success status, or returns a
    /// response that is not a valid token.
    pub(crate) async fn exchange(
        &self,
        http: &reqwest::Client,
    ) -> Result<BearerToken, AuthError> {
        let client = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.client_secret.as_str().to_owned()))
            .set_token_uri(TokenUrl::from_url(self.token_url.clone()));

        let mut request = client.exchange_client_credentials();
        for scope in &self.scopes {
            request = request.add_scope(Scope::new(scope.clone()));
        }

        debug!(client_id = %self.client_id, token_url = %self.token_url, "requesting access token");
        let response = request
            .request_async(http)
            .await
            .map_err(|err| AuthError::ExchangeFailed {
                reason: err.to_string(),
            })?;

        let token = match response.expires_in() {
            Some(expires_in) => {
                BearerToken::with_expiry(response.access_token().secret().clone(), expires_in)
            }
            None => BearerToken::new(response.access_token().secret().clone()),
        };
        Ok(token)
    }
}
