use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::error::{GiftGenieError, Result};
use crate::models::GiftRecommendation;

const ID_LEN: usize = 16;

/// A response item as the model produces it, before an id is attached.
/// Closed schema: a missing field fails the whole payload rather than
/// producing a partial record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    gift_name: String,
    why_it_fits: String,
    budget_category: String,
    alternatives: Vec<String>,
    #[serde(rename = "type")]
    kind: String,
    target_audience: String,
}

/// Parse the model's JSON payload into typed records, deriving an id per
/// item. Output order matches the raw array. An empty payload is
/// `EmptyResponse`; an empty JSON array is a valid zero-item result.
pub fn normalize(raw: &str) -> Result<Vec<GiftRecommendation>> {
    if raw.trim().is_empty() {
        return Err(GiftGenieError::EmptyResponse);
    }

    let items: Vec<RawRecommendation> =
        serde_json::from_str(raw).map_err(|e| GiftGenieError::MalformedResponse {
            reason: format!("{e}. Raw: {raw}"),
        })?;

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| GiftRecommendation {
            id: derive_id(&item.gift_name, idx),
            gift_name: item.gift_name,
            why_it_fits: item.why_it_fits,
            budget_category: item.budget_category,
            alternatives: item.alternatives,
            kind: item.kind,
            target_audience: item.target_audience,
        })
        .collect())
}

/// Fixed-length id from the gift name and its position in the list. Not
/// globally unique: two lists can derive the same id for different content
/// when names and positions coincide.
fn derive_id(gift_name: &str, idx: usize) -> String {
    let encoded = STANDARD.encode(format!("{gift_name}{idx}"));
    encoded.chars().take(ID_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(name: &str) -> String {
        format!(
            r#"{{"giftName":"{name}","whyItFits":"fits well","budgetCategory":"₹500-₹800","alternatives":["Bookmark"],"type":"Practical","targetAudience":"Readers"}}"#
        )
    }

    #[test]
    fn test_normalize_five_items_in_order() {
        let raw = format!(
            "[{},{},{},{},{}]",
            item_json("Book Light"),
            item_json("Tea Set"),
            item_json("Journal"),
            item_json("Headphones"),
            item_json("Plant Kit"),
        );
        let gifts = normalize(&raw).expect("should normalize");
        assert_eq!(gifts.len(), 5);
        assert_eq!(gifts[0].gift_name, "Book Light");
        assert_eq!(gifts[4].gift_name, "Plant Kit");
        for gift in &gifts {
            assert!(!gift.id.is_empty());
            assert!(gift.id.len() <= 16);
        }
    }

    #[test]
    fn test_id_is_deterministic_and_position_dependent() {
        let raw = format!("[{},{}]", item_json("Book Light"), item_json("Book Light"));
        let gifts = normalize(&raw).expect("should normalize");
        assert_ne!(gifts[0].id, gifts[1].id);

        let again = normalize(&raw).expect("should normalize");
        assert_eq!(gifts[0].id, again[0].id);
    }

    #[test]
    fn test_empty_string_is_empty_response() {
        assert!(matches!(normalize(""), Err(GiftGenieError::EmptyResponse)));
        assert!(matches!(
            normalize("   \n"),
            Err(GiftGenieError::EmptyResponse)
        ));
    }

    #[test]
    fn test_empty_array_is_zero_records() {
        let gifts = normalize("[]").expect("empty array should succeed");
        assert!(gifts.is_empty());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            normalize("not json"),
            Err(GiftGenieError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_non_array_json_is_malformed() {
        let raw = item_json("Book Light");
        assert!(matches!(
            normalize(&raw),
            Err(GiftGenieError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let raw = r#"[{"giftName":"Book Light","whyItFits":"fits","budgetCategory":"₹500","alternatives":[],"type":"Practical"}]"#;
        assert!(matches!(
            normalize(raw),
            Err(GiftGenieError::MalformedResponse { .. })
        ));
    }
}
