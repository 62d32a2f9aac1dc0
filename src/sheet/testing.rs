//! In-memory [`SheetApi`] double for exercising request-issuing logic
//! without a live endpoint.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::{MenuItem, NewProduct, OrderRecord, OrderRequest};
use crate::utils::AppError;

use super::SheetApi;

pub fn menu_item(name: &str, category: &str, price: f64, item_type: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        category: category.to_string(),
        price,
        item_type: item_type.to_string(),
        description: format!("{} from the test kitchen", name),
        image: String::new(),
    }
}

#[derive(Default)]
pub struct MockSheet {
    menu: Vec<MenuItem>,
    orders: Vec<OrderRecord>,
    order_ack: String,
    fail_all: bool,
    submitted: Mutex<Vec<OrderRequest>>,
    added: Mutex<Vec<NewProduct>>,
    deleted: Mutex<Vec<String>>,
}

impl MockSheet {
    pub fn new() -> Self {
        Self {
            order_ack: "OK".to_string(),
            ..Self::default()
        }
    }

    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_orders(mut self, orders: Vec<OrderRecord>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_order_ack(mut self, ack: &str) -> Self {
        self.order_ack = ack.to_string();
        self
    }

    /// Every call fails with a Network error, as if the endpoint were down.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn submitted_orders(&self) -> Vec<OrderRequest> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn added_products(&self) -> Vec<NewProduct> {
        self.added.lock().unwrap().clone()
    }

    pub fn deleted_names(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail_all {
            Err(AppError::Network("sheet endpoint unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SheetApi for MockSheet {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError> {
        self.check()?;
        Ok(self.menu.clone())
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, AppError> {
        self.check()?;
        Ok(self.orders.clone())
    }

    async fn add_product(&self, product: &NewProduct) -> Result<(), AppError> {
        self.check()?;
        self.added.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn delete_product(&self, name: &str) -> Result<(), AppError> {
        self.check()?;
        self.deleted.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<String, AppError> {
        self.check()?;
        self.submitted.lock().unwrap().push(order.clone());
        Ok(self.order_ack.clone())
    }
}
