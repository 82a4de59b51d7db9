//! Authorization-specific error types.

/// Errors raised while acquiring an access token.
///
/// Any of these aborts the call that needed the token; the catalog request
/// itself is never sent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthError {
    /// The configured token endpoint is not a valid URL.
    #[display("invalid token endpoint URL '{url}': {reason}")]
    InvalidTokenEndpoint {
        /// The URL that was provided.
        url: String,
        /// Why it could not be parsed.
        reason: String,
    },

    /// The client-credentials exchange failed: the endpoint was unreachable,
    /// answered with a non-success status, or returned a malformed token
    /// response.
    #[display("token exchange failed: {reason}")]
    ExchangeFailed {
        /// Description of the failure.
        reason: String,
    },

    /// The token endpoint returned a token that cannot be used as an HTTP
    /// header value.
    #[display("access token is not a valid header value: {reason}")]
    MalformedToken {
        /// Description of the offending characters.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_token_endpoint() {
        let error = AuthError::InvalidTokenEndpoint {
            url: "not-a-url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid token endpoint URL 'not-a-url': relative URL without a base"
        );
    }

    #[test]
    fn should_display_exchange_failure() {
        let error = AuthError::ExchangeFailed {
            reason: "invalid_client".to_string(),
        };
        assert_eq!(error.to_string(), "token exchange failed: invalid_client");
    }
}
