//! # taplist-client
//!
//! Typed async client for the taplist beer-catalog REST service.
//!
//! Every call is authenticated with an OAuth2 client-credentials bearer
//! token that is acquired lazily on the first request, cached inside the
//! client instance, and re-acquired when it expires. Callers never touch
//! tokens; they configure an [`OAuthConfig`] once and use the five catalog
//! operations.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use taplist_client::{CatalogClient, ListBeersQuery, OAuthConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = OAuthConfig::client_credentials(
//!     "taplist",
//!     "secret",
//!     "https://auth.example.com/oauth2/token",
//! )?
//! .build();
//!
//! let client = CatalogClient::builder()
//!     .with_host("api.example.com")
//!     .with_credentials(credentials)
//!     .build()?;
//!
//! // Filters appear in the query string only when supplied.
//! let page = client
//!     .list_beers(&ListBeersQuery::new().with_beer_name("ALE"))
//!     .await?;
//!
//! // Absence is a value, not an error: a 404 here is `None`.
//! if let Some(first) = page.content.first().and_then(|beer| beer.id) {
//!     let beer = client.beer_by_id(first).await?;
//!     assert!(beer.is_some());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! All operations return [`CatalogError`]. A failed token exchange aborts
//! the call before anything is sent ([`CatalogError::Authorization`]);
//! non-2xx answers keep their status code and body
//! ([`CatalogError::UnexpectedStatus`]). Nothing is retried; retry policy
//! belongs to the caller.

mod client;
mod model;

pub use self::client::oauth::{AuthError, OAuthConfig, OAuthConfigBuilder, SecureString};
pub use self::client::{
    AuthorizedClient, BEER_PATH, CatalogClient, CatalogClientBuilder, CatalogError, ListBeersQuery,
};
pub use self::model::{Beer, BeerStyle, Page};
