use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/receipts/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptUpload {
    pub image_base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
    pub name: String,
    pub restaurant: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

/// Body of `POST /api/compare/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRequest {
    pub delivery_item: DeliveryItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushTokenRegistration {
    pub expo_push_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Expired,
    ExpiresToday,
    Urgent,
    Warning,
    Good,
}

impl Urgency {
    /// Badge text shown next to a pantry item. Anything not yet expiring
    /// today reads "Nd left"; `None` only when the day count is unknown.
    pub fn label(&self, days_until_expiration: Option<i64>) -> Option<String> {
        match self {
            Urgency::Expired => Some("Expired".to_string()),
            Urgency::ExpiresToday => Some("Expires Today".to_string()),
            Urgency::Urgent | Urgency::Warning | Urgency::Good => {
                days_until_expiration.map(|days| format!("{}d left", days))
            }
        }
    }
}

/// Pantry item as decorated by the backend's list/expiring endpoints.
///
/// Only the fields the pantry screen reads are typed; everything else is kept
/// in `extra` so re-serializing yields the original object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub item_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_expiration: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PantryItem {
    pub fn urgency_label(&self) -> Option<String> {
        self.urgency
            .and_then(|urgency| urgency.label(self.days_until_expiration))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_id: Option<String>,
    pub savings: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_difference: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub comparison: Comparison,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pantry_item_keeps_unknown_fields() {
        let raw = json!({
            "item_id": "1",
            "name": "Milk",
            "category": "dairy",
            "urgency": "urgent",
            "urgency_color": "#F59E0B",
            "days_until_expiration": 1
        });

        let item: PantryItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.urgency, Some(Urgency::Urgent));
        assert_eq!(item.extra.get("category"), Some(&json!("dairy")));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_urgency_labels() {
        assert_eq!(Urgency::Expired.label(Some(-2)).as_deref(), Some("Expired"));
        assert_eq!(
            Urgency::ExpiresToday.label(Some(0)).as_deref(),
            Some("Expires Today")
        );
        assert_eq!(Urgency::Warning.label(Some(3)).as_deref(), Some("3d left"));
        assert_eq!(Urgency::Urgent.label(None), None);
        assert_eq!(Urgency::Good.label(Some(10)).as_deref(), Some("10d left"));
        assert_eq!(Urgency::Good.label(None), None);
    }

    #[test]
    fn test_receipt_upload_omits_missing_date() {
        let body = serde_json::to_value(ReceiptUpload {
            image_base64: "aGVsbG8=".to_string(),
            purchase_date: None,
        })
        .unwrap();
        assert_eq!(body, json!({"image_base64": "aGVsbG8="}));
    }

    #[test]
    fn test_comparison_response_parsing() {
        let raw = json!({
            "comparison": {
                "comparison_id": "c1",
                "savings": 12.5,
                "calorie_difference": -340.0,
                "delivery_item": {"name": "Burrito", "restaurant": "Chipotle", "price": 14.5}
            },
            "recommendation": "Cook at home"
        });

        let parsed: ComparisonResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.comparison.savings, 12.5);
        assert_eq!(parsed.comparison.calorie_difference, Some(-340.0));
        assert!(parsed.comparison.extra.contains_key("delivery_item"));
        assert_eq!(parsed.recommendation, "Cook at home");
    }
}
