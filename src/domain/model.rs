use serde::{Deserialize, Serialize};

use crate::core::encoding;
use crate::utils::error::{DashboardError, Result};

/// 預測模式，對應遠端服務的兩個端點
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    KMeans,
    Dbscan,
}

impl ModelKind {
    /// URL path suffix under `/predict/`
    pub fn path_suffix(&self) -> &'static str {
        match self {
            ModelKind::KMeans => "kmeans",
            ModelKind::Dbscan => "dbscan",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::KMeans => "KMeans",
            ModelKind::Dbscan => "DBSCAN",
        }
    }
}

/// Raw form fields as the user entered them, before encoding.
#[derive(Debug, Clone)]
pub struct PredictionForm {
    pub score: f64,
    pub price_range: String,
    pub category: String,
}

impl PredictionForm {
    /// 編碼表單欄位，產生送往服務的請求
    pub fn encode(&self) -> Result<PredictionRequest> {
        let price_range_encoded = encoding::price_range_code(&self.price_range).ok_or_else(|| {
            DashboardError::InvalidConfigValueError {
                field: "price-range".to_string(),
                value: self.price_range.clone(),
                reason: "Expected one of: $, $$, $$$".to_string(),
            }
        })?;

        let category_encoded = encoding::category_code(&self.category).ok_or_else(|| {
            DashboardError::InvalidConfigValueError {
                field: "category".to_string(),
                value: self.category.clone(),
                reason: "Unknown category (run the `categories` command for the full list)"
                    .to_string(),
            }
        })?;

        // 分數在進入編碼前夾到 [0, 10]，與輸入元件的行為一致
        Ok(PredictionRequest {
            score: self.score.clamp(0.0, 10.0),
            price_range_encoded,
            category_encoded,
        })
    }
}

/// JSON payload expected by the prediction service. Field names are part of
/// the wire contract and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Price_Range_encoded")]
    pub price_range_encoded: u8,
    #[serde(rename = "Category_encoded")]
    pub category_encoded: u8,
}

/// Service response. A missing `cluster` key is a valid outcome (DBSCAN
/// noise points), not a protocol violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub cluster: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    Assigned(i64),
    Unassigned,
}

impl PredictionOutcome {
    pub fn display(&self, model: ModelKind) -> String {
        match self {
            PredictionOutcome::Assigned(id) => {
                format!("{} Cluster: {}", model.display_name(), id)
            }
            PredictionOutcome::Unassigned => {
                format!("{} Cluster: Not assigned to any cluster", model.display_name())
            }
        }
    }
}

/// Numeric view of the cleaned training table, one entry per column that
/// parsed as numeric end to end.
#[derive(Debug, Clone)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct DataTable {
    pub columns: Vec<NumericColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_matches_wire_contract() {
        let request = PredictionRequest {
            score: 9.0,
            price_range_encoded: 0,
            category_encoded: 8,
        };

        let payload = serde_json::to_string(&request).unwrap();
        assert_eq!(
            payload,
            r#"{"Score":9.0,"Price_Range_encoded":0,"Category_encoded":8}"#
        );
    }

    #[test]
    fn test_form_encoding_uses_category_table() {
        let form = PredictionForm {
            score: 9.0,
            price_range: "$".to_string(),
            category: "Café".to_string(),
        };

        let request = form.encode().unwrap();
        assert_eq!(request.score, 9.0);
        assert_eq!(request.price_range_encoded, 0);
        assert_eq!(request.category_encoded, 8);
    }

    #[test]
    fn test_form_encoding_clamps_score() {
        let form = PredictionForm {
            score: 42.0,
            price_range: "$$".to_string(),
            category: "Pizza".to_string(),
        };
        assert_eq!(form.encode().unwrap().score, 10.0);

        let form = PredictionForm {
            score: -3.5,
            price_range: "$$".to_string(),
            category: "Pizza".to_string(),
        };
        assert_eq!(form.encode().unwrap().score, 0.0);
    }

    #[test]
    fn test_form_encoding_rejects_unknown_values() {
        let form = PredictionForm {
            score: 5.0,
            price_range: "$$$$".to_string(),
            category: "Café".to_string(),
        };
        assert!(form.encode().is_err());

        let form = PredictionForm {
            score: 5.0,
            price_range: "$".to_string(),
            category: "Space Food".to_string(),
        };
        assert!(form.encode().is_err());
    }

    #[test]
    fn test_response_without_cluster_key_deserializes_to_none() {
        let response: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.cluster.is_none());

        let response: PredictionResponse = serde_json::from_str(r#"{"cluster": 3}"#).unwrap();
        assert_eq!(response.cluster, Some(3));
    }

    #[test]
    fn test_outcome_display_lines() {
        assert_eq!(
            PredictionOutcome::Assigned(3).display(ModelKind::KMeans),
            "KMeans Cluster: 3"
        );
        assert_eq!(
            PredictionOutcome::Unassigned.display(ModelKind::Dbscan),
            "DBSCAN Cluster: Not assigned to any cluster"
        );
    }

    #[test]
    fn test_identical_forms_produce_identical_payloads() {
        let form = PredictionForm {
            score: 7.5,
            price_range: "$$$".to_string(),
            category: "Sushi".to_string(),
        };

        let first = serde_json::to_string(&form.encode().unwrap()).unwrap();
        let second = serde_json::to_string(&form.encode().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
