pub mod client;
#[cfg(test)]
pub mod testing;

pub use client::*;

use async_trait::async_trait;

use crate::models::{MenuItem, NewProduct, OrderRecord, OrderRequest};
use crate::utils::AppError;

/// Seam over the spreadsheet-backed web endpoint. Controllers and
/// services depend on this trait so the request-issuing logic can be
/// exercised against an in-memory double.
#[async_trait]
pub trait SheetApi: Send + Sync {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError>;
    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, AppError>;
    async fn add_product(&self, product: &NewProduct) -> Result<(), AppError>;
    async fn delete_product(&self, name: &str) -> Result<(), AppError>;
    async fn submit_order(&self, order: &OrderRequest) -> Result<String, AppError>;
}
