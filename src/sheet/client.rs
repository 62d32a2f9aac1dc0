use async_trait::async_trait;
use std::env;
use std::time::Duration;

use crate::models::{MenuItem, NewProduct, OrderRecord, OrderRequest};
use crate::utils::AppError;

use super::SheetApi;

// Apps Script web app deployment backing the menu and order sheets
const SHEET_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbzqQn0wEWn6kYpTuDTqOUbJ4H_k9qFv0XGmY2m1fYI/exec";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the remote sheet. One `reqwest::Client` shared across
/// calls; every action is a query-parameter dispatch on the same URL.
pub struct SheetClient {
    http: reqwest::Client,
    base_url: String,
}

impl SheetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Endpoint URL from `SHEET_ENDPOINT_URL`, falling back to the
    /// deployed Apps Script constant.
    pub fn from_env() -> Self {
        let url = env::var("SHEET_ENDPOINT_URL").unwrap_or_else(|_| SHEET_ENDPOINT.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_action(&self, query: &str) -> Result<reqwest::Response, AppError> {
        let url = format!("{}?{}", self.base_url, query);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach sheet endpoint: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Sheet endpoint error: {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl SheetApi for SheetClient {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError> {
        log::info!("🍽️  Fetching menu from sheet...");

        let items: Vec<MenuItem> = self
            .get_action("action=getMenu")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Data(format!("Failed to parse menu response: {}", e)))?;

        log::info!("✅ Retrieved {} menu items", items.len());

        Ok(items)
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, AppError> {
        log::info!("📋 Fetching orders from sheet...");

        let orders: Vec<OrderRecord> = self
            .get_action("action=getOrders")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Data(format!("Failed to parse orders response: {}", e)))?;

        log::info!("✅ Retrieved {} orders", orders.len());

        Ok(orders)
    }

    async fn add_product(&self, product: &NewProduct) -> Result<(), AppError> {
        log::info!("➕ Adding product '{}' to sheet...", product.name);

        let payload = serde_json::to_string(product)
            .map_err(|e| AppError::Data(format!("Failed to encode product: {}", e)))?;
        let query = format!("action=addProduct&data={}", urlencoding::encode(&payload));

        // Response body is ignored beyond HTTP success
        self.get_action(&query).await?;

        log::info!("✅ Product '{}' added", product.name);

        Ok(())
    }

    async fn delete_product(&self, name: &str) -> Result<(), AppError> {
        log::info!("🗑️  Deleting product '{}' from sheet...", name);

        let query = format!("action=deleteProduct&name={}", urlencoding::encode(name));
        self.get_action(&query).await?;

        log::info!("✅ Product '{}' deleted", name);

        Ok(())
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<String, AppError> {
        log::info!(
            "🛒 Submitting order for '{}' ({} lines, total {})...",
            order.name,
            order.cart.len(),
            order.total_amount
        );

        let response = self
            .http
            .post(&self.base_url)
            .json(order)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to submit order: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Sheet endpoint error: {}",
                response.status()
            )));
        }

        // The backend answers with a plain-text acknowledgement
        let ack = response
            .text()
            .await
            .map_err(|e| AppError::Data(format!("Failed to read order acknowledgement: {}", e)))?;

        log::info!("✅ Order accepted: {}", ack.trim());

        Ok(ack)
    }
}
