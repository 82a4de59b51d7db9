use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};

use http::Uri;
use http::uri::{PathAndQuery, Scheme};

use super::CatalogClient;
use super::authorized::AuthorizedClient;
use super::error::CatalogError;
use super::oauth::OAuthConfig;

/// Builder for [`CatalogClient`] instances.
///
/// Defaults to plain HTTP against `127.0.0.1:80` with no base path, which
/// suits local development; OAuth client credentials are mandatory and
/// `build()` fails without them.
///
/// ```rust
/// use taplist_client::{CatalogClient, OAuthConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = OAuthConfig::client_credentials(
///     "taplist",
///     "secret",
///     "https://auth.example.com/oauth2/token",
/// )?
/// .build();
///
/// let client = CatalogClient::builder()
///     .with_scheme(http::uri::Scheme::HTTPS)
///     .with_host("api.example.com")
///     .with_port(443)
///     .with_credentials(credentials)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClientBuilder {
    http: Option<reqwest::Client>,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    credentials: Option<OAuthConfig>,
}

impl CatalogClientBuilder {
    /// Builds the client.
    ///
    /// When no `reqwest` client was supplied, one is created with redirects
    /// disabled: the catalog service never redirects, and the `Location`
    /// answer of a create is followed explicitly.
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::CredentialsRequired`] when no credentials
    /// were configured, or when the scheme/host/port combination does not
    /// form a valid URI.
    pub fn build(self) -> Result<CatalogClient, CatalogError> {
        let Self {
            http,
            scheme,
            host,
            port,
            base_path,
            credentials,
        } = self;

        let credentials = credentials.ok_or(CatalogError::CredentialsRequired)?;

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        let http = match http {
            Some(client) => client,
            None => reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?,
        };

        Ok(CatalogClient {
            base_uri,
            http: AuthorizedClient::new(http, credentials),
        })
    }

    /// Sets the scheme (defaults to HTTP).
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname or IP address of the catalog service.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port (defaults to 80).
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a path prefix prepended to every request (for deployments
    /// behind a gateway).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBasePath`] when the path cannot be
    /// parsed as a URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, CatalogError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| CatalogError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets the OAuth client credentials used to authorize every call.
    #[must_use]
    pub fn with_credentials(mut self, credentials: OAuthConfig) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Supplies a preconfigured `reqwest` client (timeouts, proxies, …).
    /// Both the catalog calls and the token exchange run over it.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            http: None,
            scheme: Scheme::HTTP,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 80,
            base_path: None,
            credentials: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> OAuthConfig {
        OAuthConfig::client_credentials("client-id", "secret", "https://auth.example.com/token")
            .expect("builder")
            .build()
    }

    #[test]
    fn should_default_to_localhost_http() {
        let client = CatalogClientBuilder::default()
            .with_credentials(credentials())
            .build()
            .expect("client");

        assert_eq!(client.base_uri.to_string(), "http://127.0.0.1:80/");
    }

    #[test]
    fn should_build_with_custom_scheme_host_port_and_base_path() {
        let client = CatalogClientBuilder::default()
            .with_scheme(Scheme::HTTPS)
            .with_host("api.example.com")
            .with_port(443)
            .with_base_path("/gateway")
            .expect("valid base path")
            .with_credentials(credentials())
            .build()
            .expect("client");

        assert_eq!(
            client.base_uri.to_string(),
            "https://api.example.com:443/gateway"
        );
    }

    #[test]
    fn should_reject_invalid_base_path() {
        let result = CatalogClientBuilder::default().with_base_path("invalid path with spaces");
        assert!(matches!(result, Err(CatalogError::InvalidBasePath { .. })));
    }

    #[test]
    fn should_require_credentials() {
        let result = CatalogClientBuilder::default().build();
        assert!(matches!(result, Err(CatalogError::CredentialsRequired)));
    }
}
