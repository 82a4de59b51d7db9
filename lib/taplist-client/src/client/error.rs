use super::oauth::AuthError;

/// Errors that can occur when using the catalog client.
///
/// All variants implement `std::error::Error`. Responses with unexpected
/// status codes keep the original status and body so callers can inspect
/// them.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum CatalogError {
    /// Token acquisition failed; the catalog request was not sent.
    #[display("authorization failed: {_0}")]
    Authorization(AuthError),

    /// Network-level failure reaching the catalog service or the token
    /// endpoint (connection refused, timeout, TLS failure).
    Transport(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    Url(url::ParseError),

    /// HTTP protocol error while assembling the base URI.
    Http(http::Error),

    /// JSON serialization of a request body failed.
    BodySerialization(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerialization(serde_urlencoded::ser::Error),

    /// The server answered with a status code outside the 2xx range.
    ///
    /// A 404 is converted to an absent result only where the operation
    /// documents it; everywhere else it surfaces here.
    #[display("unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatus {
        /// The status code received.
        status_code: u16,
        /// The response body, unmodified.
        body: String,
    },

    /// The response body is not valid JSON or does not match the expected
    /// shape.
    #[display("failed to decode response at '{location}': {error}\n{body}")]
    #[from(skip)]
    Decode {
        /// JSON path where deserialization failed.
        location: String,
        /// The underlying deserialization error.
        error: serde_json::Error,
        /// The body that failed to decode.
        body: String,
    },

    /// The `Location` response header is not a usable URI reference.
    #[display("Location response header is not a valid URI: {reason}")]
    #[from(skip)]
    InvalidLocation {
        /// Why the header value was rejected.
        reason: String,
    },

    /// Invalid base path configuration.
    #[display("invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// An update was attempted on a record that has never been persisted.
    #[display("record has no id; create it before updating")]
    #[from(skip)]
    MissingRecordId,

    /// The builder was finalized without OAuth client credentials.
    #[display("client credentials are required; configure them with `with_credentials`")]
    #[from(skip)]
    CredentialsRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<CatalogError>();
        assert_sync::<CatalogError>();
    }

    #[test]
    fn should_preserve_status_and_body_in_display() {
        let error = CatalogError::UnexpectedStatus {
            status_code: 418,
            body: "short and stout".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unexpected status code 418: short and stout"
        );
    }
}
