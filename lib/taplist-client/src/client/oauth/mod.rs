//! OAuth2 client-credentials support.
//!
//! The catalog service only accepts requests carrying a bearer token
//! obtained with the client-credentials grant (machine-to-machine; no end
//! user involved). This module holds the configuration surface
//! ([`OAuthConfig`]), the exchange itself, and the token cache used by the
//! authorizing transport.
//!
//! Tokens never leave this crate: the cache hands them straight to the
//! request dispatch, and both the token and the client secret are zeroed
//! on drop and redacted in debug output.

mod config;
mod error;
mod provider;
mod secret;
mod token;

pub use self::config::{OAuthConfig, OAuthConfigBuilder};
pub use self::error::AuthError;
pub use self::secret::SecureString;
pub(crate) use self::token::{BearerToken, TokenCache};
