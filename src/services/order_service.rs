use serde::Serialize;

use crate::models::{Cart, OrderRecord, OrderRequest};
use crate::sheet::SheetApi;
use crate::utils::AppError;

/// Counters shown at the top of the admin dashboard. Computed per
/// refresh, never stored.
#[derive(Debug, Serialize, Clone)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub total_sales: f64,
    pub total_products: usize,
    pub generated_at: String,
}

/// Checkout precondition: a customer name and a non-empty cart.
pub fn validate_checkout(name: &str, cart: &Cart) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your name before ordering".to_string(),
        ));
    }
    if cart.is_empty() {
        return Err(AppError::Validation(
            "Your cart is empty, add something first".to_string(),
        ));
    }
    Ok(())
}

/// The backend stores the total as text, so whole amounts are sent
/// without a decimal point ("70") and fractional ones with two ("70.50").
pub fn format_amount(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{}", total as i64)
    } else {
        format!("{:.2}", total)
    }
}

pub fn build_order(name: &str, email: &str, review: &str, cart: &Cart) -> OrderRequest {
    OrderRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        cart: cart.lines().to_vec(),
        total_amount: format_amount(cart.total()),
        review: review.trim().to_string(),
    }
}

/// Validate and submit a checkout. No request is issued when validation
/// fails; on success the backend's plain-text acknowledgement is
/// returned for the console to echo. Resetting cart and form is the
/// caller's job, since it must happen regardless of response content.
pub async fn place_order(
    api: &dyn SheetApi,
    name: &str,
    email: &str,
    review: &str,
    cart: &Cart,
) -> Result<String, AppError> {
    validate_checkout(name, cart)?;

    let order = build_order(name, email, review, cart);
    api.submit_order(&order).await
}

/// Sum of order totals, with missing or non-numeric values counted as 0.
pub fn total_sales(orders: &[OrderRecord]) -> f64 {
    orders.iter().map(|order| order.total_amount()).sum()
}
