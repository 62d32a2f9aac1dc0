//! Pure state → text functions. Nothing here touches the network or
//! stdin, so every view the consoles print can be asserted on directly.

use serde_json::Value;

use crate::models::{Cart, MenuItem, OrderRecord};
use crate::services::order_service::{format_amount, DashboardSummary};

fn veg_marker(item: &MenuItem) -> &'static str {
    if item.is_veg() {
        "🟢"
    } else {
        "🔴"
    }
}

/// Product cards for the customer view: name, veg marker, price,
/// description.
pub fn menu_cards(items: &[&MenuItem]) -> String {
    if items.is_empty() {
        return "No items in this category.".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{} {} - ₹{}\n",
            veg_marker(item),
            item.name,
            format_amount(item.price)
        ));
        if !item.description.is_empty() {
            out.push_str(&format!("   {}\n", item.description));
        }
    }
    out.push_str(&format!("\n{} item(s) shown. Add one with: add <name>", items.len()));
    out
}

/// The filter options: `all` plus each category in first-seen order,
/// with the active selection marked.
pub fn category_options(categories: &[String], selected: &str) -> String {
    let mut out = String::from("Categories:\n");
    let mark = |c: &str| if c == selected { "*" } else { " " };
    out.push_str(&format!(" {} all\n", mark("all")));
    for category in categories {
        out.push_str(&format!(" {} {}\n", mark(category), category));
    }
    out.push_str("Switch with: filter <category>");
    out
}

/// Cart lines with per-line subtotals and the grand total.
pub fn cart_view(cart: &Cart) -> String {
    if cart.is_empty() {
        return "🛒 Your cart is empty.".to_string();
    }

    let mut out = String::from("🛒 Cart:\n");
    for line in cart.lines() {
        out.push_str(&format!(
            "   {} x{} @ ₹{} = ₹{}\n",
            line.name,
            line.qty,
            format_amount(line.price),
            format_amount(line.subtotal())
        ));
    }
    out.push_str(&format!("   Total: ₹{}", format_amount(cart.total())));
    out
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    format!(
        "📊 Dashboard ({})\n   Total orders:   {}\n   Total sales:    ₹{}\n   Total products: {}",
        summary.generated_at,
        summary.total_orders,
        format_amount(summary.total_sales),
        summary.total_products
    )
}

// Total column shown verbatim, as it came off the sheet
fn total_text(record: &OrderRecord) -> String {
    match &record.total {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

pub fn orders_table(orders: &[OrderRecord]) -> String {
    if orders.is_empty() {
        return "No orders yet.".to_string();
    }

    let mut out = String::from("Orders:\n");
    for record in orders {
        out.push_str(&format!(
            "   {} | {} | {} | {} | {}\n",
            record.name,
            record.items,
            total_text(record),
            record.email,
            record.timestamp
        ));
    }
    out.push_str(&format!("{} order(s).", orders.len()));
    out
}

pub fn products_table(items: &[MenuItem]) -> String {
    if items.is_empty() {
        return "The menu is empty.".to_string();
    }

    let mut out = String::from("Products:\n");
    for item in items {
        out.push_str(&format!(
            "   {} {} | {} | ₹{}\n",
            veg_marker(item),
            item.name,
            item.category,
            format_amount(item.price)
        ));
    }
    out.push_str("Remove one with: delete <name>");
    out
}
