use serde::Serialize;

use super::error::CatalogError;
use crate::model::BeerStyle;

/// Optional filters for listing beers.
///
/// Each filter is appended to the query string only when it was supplied;
/// an absent filter is omitted entirely rather than sent empty. Page
/// numbering follows the server's convention and is passed through
/// unmodified.
///
/// ```rust
/// use taplist_client::{BeerStyle, ListBeersQuery};
///
/// let query = ListBeersQuery::new()
///     .with_beer_name("ALE")
///     .with_beer_style(BeerStyle::Ipa)
///     .with_page_size(25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBeersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    beer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    beer_style: Option<BeerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_inventory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListBeersQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters on beer name (server-side substring match).
    #[must_use]
    pub fn with_beer_name(mut self, beer_name: impl Into<String>) -> Self {
        self.beer_name = Some(beer_name.into());
        self
    }

    /// Filters on an exact beer style.
    #[must_use]
    pub fn with_beer_style(mut self, beer_style: BeerStyle) -> Self {
        self.beer_style = Some(beer_style);
        self
    }

    /// Asks the server to include (or omit) inventory counts.
    #[must_use]
    pub fn with_show_inventory(mut self, show_inventory: bool) -> Self {
        self.show_inventory = Some(show_inventory);
        self
    }

    #[must_use]
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Serializes the supplied filters; `None` when no filter is set, so
    /// the request URL carries no `?` at all.
    pub(crate) fn to_query_string(&self) -> Result<Option<String>, CatalogError> {
        let query = serde_urlencoded::to_string(self)?;
        Ok((!query.is_empty()).then_some(query))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn should_serialize_nothing_when_no_filter_is_set() {
        let query = ListBeersQuery::new().to_query_string().expect("query");
        assert_eq!(query, None);
    }

    #[rstest]
    #[case::name_only(ListBeersQuery::new().with_beer_name("ALE"), "beerName=ALE")]
    #[case::style_only(ListBeersQuery::new().with_beer_style(BeerStyle::PaleAle), "beerStyle=PALE_ALE")]
    #[case::inventory_only(ListBeersQuery::new().with_show_inventory(true), "showInventory=true")]
    #[case::paging_only(
        ListBeersQuery::new().with_page_number(2).with_page_size(10),
        "pageNumber=2&pageSize=10"
    )]
    #[case::all_filters(
        ListBeersQuery::new()
            .with_beer_name("ALE")
            .with_beer_style(BeerStyle::Ipa)
            .with_show_inventory(false)
            .with_page_number(1)
            .with_page_size(25),
        "beerName=ALE&beerStyle=IPA&showInventory=false&pageNumber=1&pageSize=25"
    )]
    fn should_serialize_exactly_the_supplied_filters(
        #[case] query: ListBeersQuery,
        #[case] expected: &str,
    ) {
        let query = query.to_query_string().expect("query");
        assert_eq!(query.as_deref(), Some(expected));
    }

    #[test]
    fn should_form_encode_filter_values() {
        let query = ListBeersQuery::new()
            .with_beer_name("Mango Bobs")
            .to_query_string()
            .expect("query");
        assert_eq!(query.as_deref(), Some("beerName=Mango+Bobs"));
    }
}
