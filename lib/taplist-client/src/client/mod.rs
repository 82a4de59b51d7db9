use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderValue, Method, Uri};
use reqwest::{Body, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

mod authorized;
pub use self::authorized::AuthorizedClient;

mod builder;
pub use self::builder::CatalogClientBuilder;

mod error;
pub use self::error::CatalogError;

pub mod oauth;

mod query;
pub use self::query::ListBeersQuery;

use crate::model::{Beer, Page};

/// Collection path of the beer catalog; item paths append `/{id}`.
pub const BEER_PATH: &str = "/api/v1/beer";

/// Typed client for the beer catalog.
///
/// Every operation routes through the authorizing transport, which attaches
/// an OAuth2 bearer token resolved on demand and cached until expiry. No
/// operation retries on failure; each is a single request/response round
/// trip, except `create_beer` and `update_beer`, which re-fetch the record
/// afterwards as documented.
///
/// # Example
///
/// ```rust,no_run
/// use taplist_client::{CatalogClient, ListBeersQuery, OAuthConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = OAuthConfig::client_credentials(
///     "taplist",
///     "secret",
///     "https://auth.example.com/oauth2/token",
/// )?
/// .build();
///
/// let client = CatalogClient::builder()
///     .with_host("api.example.com")
///     .with_credentials(credentials)
///     .build()?;
///
/// let page = client
///     .list_beers(&ListBeersQuery::new().with_beer_name("ALE"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: AuthorizedClient,
    base_uri: Uri,
}

impl CatalogClient {
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }
}

// Operations
impl CatalogClient {
    /// Creates a beer and returns the server's stored version of it.
    ///
    /// The service answers a create with a `Location` header instead of a
    /// body, so a follow-up `GET` fetches the stored record. `Ok(None)`
    /// means the server did not say where the record lives (no `Location`)
    /// or the follow-up found no body; no id is ever synthesized here.
    pub async fn create_beer(&self, beer: &Beer) -> Result<Option<Beer>, CatalogError> {
        let mut request = Request::new(Method::POST, self.url_for(BEER_PATH)?);
        set_json_body(&mut request, beer)?;
        let response = self.http.send(request).await?;

        let Some(location) = response.headers().get(LOCATION) else {
            return Ok(None);
        };
        let location = location
            .to_str()
            .map_err(|err| CatalogError::InvalidLocation {
                reason: err.to_string(),
            })?;
        let url = self.join_location(location)?;
        self.fetch_optional(url).await
    }

    /// Fetches one beer; `Ok(None)` when the catalog has no such record.
    pub async fn beer_by_id(&self, id: Uuid) -> Result<Option<Beer>, CatalogError> {
        self.fetch_optional(self.item_url(id)?).await
    }

    /// Lists beers matching `query`.
    ///
    /// Only the filters that were supplied appear in the query string.
    pub async fn list_beers(&self, query: &ListBeersQuery) -> Result<Page<Beer>, CatalogError> {
        let mut url = self.url_for(BEER_PATH)?;
        url.set_query(query.to_query_string()?.as_deref());

        let response = self.http.send(Request::new(Method::GET, url)).await?;
        decode_json(response).await
    }

    /// Replaces the stored record and returns the server's canonical state
    /// after the update (the update endpoint itself returns no body).
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::MissingRecordId`] when `beer.id` is
    /// absent; updating a record that was never created is a usage error,
    /// not an absent result.
    pub async fn update_beer(&self, beer: &Beer) -> Result<Option<Beer>, CatalogError> {
        let id = beer.id.ok_or(CatalogError::MissingRecordId)?;

        let mut request = Request::new(Method::PUT, self.item_url(id)?);
        set_json_body(&mut request, beer)?;
        self.http.send(request).await?;

        self.beer_by_id(id).await
    }

    /// Deletes one beer. A 404 propagates as
    /// [`CatalogError::UnexpectedStatus`]; deleting an unknown id is not
    /// treated as an absent result.
    pub async fn delete_beer(&self, id: Uuid) -> Result<(), CatalogError> {
        self.http
            .send(Request::new(Method::DELETE, self.item_url(id)?))
            .await?;
        Ok(())
    }
}

// URL construction and decoding
impl CatalogClient {
    fn item_url(&self, id: Uuid) -> Result<Url, CatalogError> {
        self.url_for(&format!("{BEER_PATH}/{id}"))
    }

    fn url_for(&self, path: &str) -> Result<Url, CatalogError> {
        let base_uri = self.base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(url.parse::<Url>()?)
    }

    /// Resolves a `Location` response header; the server may answer with an
    /// absolute URL or a plain path. Paths are taken relative to the
    /// configured base path, so a client behind a gateway keeps its prefix
    /// on the follow-up request.
    fn join_location(&self, location: &str) -> Result<Url, CatalogError> {
        if location.starts_with('/') {
            return self.url_for(location);
        }
        let base = Url::parse(&self.base_uri.to_string())?;
        Ok(base.join(location)?)
    }

    /// `GET` that treats a 404 status and an empty body as an absent
    /// record instead of an error.
    async fn fetch_optional(&self, url: Url) -> Result<Option<Beer>, CatalogError> {
        let response = match self.http.send(Request::new(Method::GET, url)).await {
            Ok(response) => response,
            Err(CatalogError::UnexpectedStatus {
                status_code: 404, ..
            }) => return Ok(None),
            Err(other) => return Err(other),
        };

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(None);
        }
        decode_body(&body).map(Some)
    }
}

fn set_json_body<T: Serialize>(request: &mut Request, body: &T) -> Result<(), CatalogError> {
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *request.body_mut() = Some(Body::from(serde_json::to_vec(body)?));
    Ok(())
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let body = response.text().await?;
    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|err| CatalogError::Decode {
        location: err.path().to_string(),
        error: err.into_inner(),
        body: body.to_string(),
    })
}
