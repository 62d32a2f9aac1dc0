use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cart::CartLine;

/// Outbound checkout payload, POSTed as the request body. The backend
/// expects `totalAmount` as a string, so it is formatted before send.
#[derive(Debug, Serialize, Clone)]
pub struct OrderRequest {
    pub name: String,
    pub email: String,
    pub cart: Vec<CartLine>,
    #[serde(rename = "totalAmount")]
    pub total_amount: String,
    pub review: String,
}

/// One order row as the sheet returns it from `action=getOrders`.
/// Rendered verbatim; `Total` arrives as a number, a numeric string, or
/// nothing at all depending on how the row was written.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Items", default)]
    pub items: String,
    #[serde(rename = "Total", default)]
    pub total: Value,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}

impl OrderRecord {
    /// Coerce `Total` to a number, treating missing or invalid values as 0.
    pub fn total_amount(&self) -> f64 {
        match &self.total {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}
