use serde::{Deserialize, Serialize};

/// One menu row as the sheet returns it from `action=getMenu`.
/// Field names follow the spreadsheet column headers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Price", default)]
    pub price: f64,
    #[serde(rename = "Type", default)]
    pub item_type: String, // veg, nonveg
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Image", default)]
    pub image: String,
}

impl MenuItem {
    /// The sheet stores the type column in mixed case ("Veg", "veg", "NonVeg").
    pub fn is_veg(&self) -> bool {
        self.item_type.eq_ignore_ascii_case("veg")
    }
}

/// Payload of the `addProduct` action, JSON-encoded into the `data`
/// query parameter. Same column names as MenuItem.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewProduct {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Description")]
    pub description: String,
}
