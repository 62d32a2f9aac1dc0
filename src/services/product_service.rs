use crate::models::{MenuItem, NewProduct};
use crate::sheet::SheetApi;
use crate::utils::AppError;

/// Raw admin form fields, as typed into the console prompts.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub description: String,
}

/// Turn the raw form into the `addProduct` payload. Price must parse as
/// a number; nothing is sent otherwise.
pub fn validate_product(form: &ProductForm) -> Result<NewProduct, AppError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Product name is required".to_string(),
        ));
    }

    let price: f64 = form.price.trim().parse().map_err(|_| {
        AppError::Validation(format!("'{}' is not a valid price", form.price.trim()))
    })?;

    Ok(NewProduct {
        name: name.to_string(),
        category: form.category.trim().to_string(),
        price,
        image: form.image.trim().to_string(),
        description: form.description.trim().to_string(),
    })
}

/// Validate the form and push the new product to the sheet.
pub async fn add_product(api: &dyn SheetApi, form: &ProductForm) -> Result<NewProduct, AppError> {
    let product = validate_product(form)?;
    api.add_product(&product).await?;
    Ok(product)
}

/// Remove-by-name against the sheet. The name must exist in the held
/// menu so a typo fails locally instead of silently no-opping remotely.
pub async fn delete_product(
    api: &dyn SheetApi,
    menu: &[MenuItem],
    name: &str,
) -> Result<(), AppError> {
    if !menu.iter().any(|item| item.name == name) {
        return Err(AppError::NotFound(format!(
            "No product named '{}' on the menu",
            name
        )));
    }
    api.delete_product(name).await
}
