//! Domain types exchanged with the beer catalog.
//!
//! Wire format is the service's camelCase JSON; fields the server assigns
//! (`id`, timestamps) are optional and omitted from request bodies when
//! absent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A beer as exposed by the catalog service.
///
/// `id` is assigned by the server on creation, is immutable afterwards, and
/// is the sole identity key; leave it `None` (together with the timestamps)
/// for records that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub price: Decimal,
    pub quantity_on_hand: i32,
    /// Server-assigned; never sent by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned; never sent by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Beer styles recognized by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Ale,
    Ipa,
    Wheat,
    PaleAle,
    Saison,
    Porter,
    Stout,
    Gose,
}

/// One page of results plus the server's pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    /// Total number of matching records across all pages, not the size of
    /// this page.
    pub total_elements: u64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn unsaved_beer() -> Beer {
        Beer {
            id: None,
            beer_name: "Mango Bobs".to_string(),
            beer_style: BeerStyle::Ipa,
            upc: "0631234200036".to_string(),
            price: Decimal::new(1099, 2),
            quantity_on_hand: 500,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn should_omit_server_assigned_fields_when_unsaved() {
        let value = serde_json::to_value(unsaved_beer()).expect("json");
        let object = value.as_object().expect("object");

        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("createdAt"));
        assert!(!object.contains_key("updatedAt"));
        assert_eq!(object["beerName"], json!("Mango Bobs"));
        assert_eq!(object["beerStyle"], json!("IPA"));
        assert_eq!(object["quantityOnHand"], json!(500));
    }

    #[test]
    fn should_decode_a_server_payload() {
        let id = Uuid::new_v4();
        let beer: Beer = serde_json::from_value(json!({
            "id": id,
            "beerName": "Galaxy Cat",
            "beerStyle": "PALE_ALE",
            "upc": "9122089364369",
            "price": 12.50,
            "quantityOnHand": 20,
            "createdAt": "2026-01-12T17:51:01Z",
            "updatedAt": "2026-01-12T17:51:01Z"
        }))
        .expect("beer");

        assert_eq!(beer.id, Some(id));
        assert_eq!(beer.beer_style, BeerStyle::PaleAle);
        assert_eq!(beer.price, Decimal::new(1250, 2));
        assert!(beer.created_at.is_some());
    }

    #[rstest]
    #[case(BeerStyle::Lager, "LAGER")]
    #[case(BeerStyle::PaleAle, "PALE_ALE")]
    #[case(BeerStyle::Gose, "GOSE")]
    fn should_use_the_wire_names_for_styles(#[case] style: BeerStyle, #[case] wire: &str) {
        assert_eq!(serde_json::to_value(style).expect("json"), json!(wire));
    }

    #[test]
    fn should_decode_a_page_envelope() {
        let page: Page<Beer> = serde_json::from_value(json!({
            "content": [serde_json::to_value(unsaved_beer()).expect("json")],
            "pageNumber": 1,
            "pageSize": 25,
            "totalElements": 1
        }))
        .expect("page");

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 25);
        assert_eq!(page.total_elements, 1);
    }
}
