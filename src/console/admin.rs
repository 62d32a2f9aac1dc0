use std::io::{self, BufRead, Write};

use crate::models::{MenuItem, OrderRecord};
use crate::services::order_service::{self, DashboardSummary};
use crate::services::product_service::{self, ProductForm};
use crate::sheet::SheetApi;
use crate::utils::AppError;

use super::render;

const HELP: &str = "Commands:
  dashboard           show the summary counters
  orders              list all orders
  products            list the menu products
  add                 add a product (prompts for each field)
  delete <name>       delete a product by name
  refresh             re-fetch orders and menu from the sheet
  quit                leave";

/// The admin front-end: holds the last fetched orders and menu and
/// recomputes the dashboard counters from them on demand.
pub struct AdminConsole {
    api: Box<dyn SheetApi>,
    orders: Vec<OrderRecord>,
    menu: Vec<MenuItem>,
}

impl AdminConsole {
    pub fn new(api: Box<dyn SheetApi>) -> Self {
        Self {
            api,
            orders: Vec::new(),
            menu: Vec::new(),
        }
    }

    /// Fetch orders then menu (sequential awaits). Held state is only
    /// replaced once both responses are in, so a failure midway leaves
    /// the previous view intact.
    pub async fn refresh(&mut self) -> Result<DashboardSummary, AppError> {
        let orders = self.api.fetch_orders().await?;
        let menu = self.api.fetch_menu().await?;
        self.orders = orders;
        self.menu = menu;
        Ok(self.summary())
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_orders: self.orders.len(),
            total_sales: order_service::total_sales(&self.orders),
            total_products: self.menu.len(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Validate the form, push the product, then re-fetch the menu for
    /// the table. When the re-fetch fails the add still counts; the
    /// held menu just goes stale until the next refresh.
    pub async fn add_product(&mut self, form: &ProductForm) -> Result<String, AppError> {
        let product = product_service::add_product(self.api.as_ref(), form).await?;

        match self.api.fetch_menu().await {
            Ok(menu) => self.menu = menu,
            Err(e) => log::warn!("⚠️  Menu refresh after add failed: {}", e),
        }

        Ok(format!("✅ Product '{}' added.", product.name))
    }

    /// Remove-by-name against the sheet, then bring the table back in
    /// sync (re-fetch, falling back to a local remove).
    pub async fn delete_product(&mut self, name: &str) -> Result<String, AppError> {
        product_service::delete_product(self.api.as_ref(), &self.menu, name).await?;

        match self.api.fetch_menu().await {
            Ok(menu) => self.menu = menu,
            Err(e) => {
                log::warn!("⚠️  Menu refresh after delete failed: {}", e);
                self.menu.retain(|item| item.name != name);
            }
        }

        Ok(format!("🗑️  Product '{}' deleted.", name))
    }

    /// Single-line commands. The interactive `add` form lives in
    /// [`run`], which collects the fields before calling in here.
    pub async fn handle(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => Some(String::new()),
            "dashboard" => Some(render::dashboard(&self.summary())),
            "orders" => Some(render::orders_table(&self.orders)),
            "products" => Some(render::products_table(&self.menu)),
            "delete" => Some(match self.delete_product(rest).await {
                Ok(msg) => msg,
                Err(e) => {
                    log::error!("❌ Delete failed: {}", e);
                    format!("⚠️  {}", e)
                }
            }),
            "refresh" => Some(match self.refresh().await {
                Ok(summary) => render::dashboard(&summary),
                Err(e) => {
                    log::error!("❌ Refresh failed: {}", e);
                    format!("⚠️  {}", e)
                }
            }),
            "help" => Some(HELP.to_string()),
            "quit" | "exit" => None,
            other => Some(format!("Unknown command '{}', try 'help'.", other)),
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        println!("🔧 Admin console. Type 'help' for commands.");

        match self.refresh().await {
            Ok(summary) => println!("{}", render::dashboard(&summary)),
            Err(e) => {
                log::error!("❌ Could not load dashboard: {}", e);
                println!("⚠️  Could not load dashboard: {}", e);
            }
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            let line = line?;

            // The product form is the one multi-prompt interaction
            if line.trim() == "add" {
                let mut form = ProductForm::default();
                for (label, field) in [
                    ("Name", &mut form.name),
                    ("Category", &mut form.category),
                    ("Price", &mut form.price),
                    ("Image URL", &mut form.image),
                    ("Description", &mut form.description),
                ] {
                    print!("{}: ", label);
                    io::stdout().flush()?;
                    match lines.next() {
                        Some(value) => *field = value?,
                        None => return Ok(()),
                    }
                }
                match self.add_product(&form).await {
                    Ok(msg) => println!("{}\n{}", msg, render::products_table(&self.menu)),
                    Err(e) => {
                        log::error!("❌ Add product failed: {}", e);
                        println!("⚠️  {}", e);
                    }
                }
                continue;
            }

            match self.handle(&line).await {
                Some(out) if out.is_empty() => {}
                Some(out) => println!("{}", out),
                None => break,
            }
        }

        println!("👋 Bye!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::testing::{menu_item, MockSheet};

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            menu_item("Dosa", "South Indian", 60.0, "veg"),
            menu_item("Tea", "Beverages", 10.0, "veg"),
        ]
    }

    fn sample_orders() -> Vec<OrderRecord> {
        serde_json::from_str(
            r#"[
                {"Name":"Ravi","Items":"Tea x2","Total":"100","Email":"r@x.com","Timestamp":"t1"},
                {"Name":"Asha","Items":"Dosa x1","Total":60,"Email":"a@x.com","Timestamp":"t2"},
                {"Name":"Meera","Items":"Cake x1","Email":"m@x.com","Timestamp":"t3"}
            ]"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn dashboard_counts_orders_sales_and_products() {
        let api = MockSheet::new()
            .with_menu(sample_menu())
            .with_orders(sample_orders());
        let mut console = AdminConsole::new(Box::new(api));

        let summary = console.refresh().await.unwrap();
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_sales, 160.0); // missing Total counts as 0
        assert_eq!(summary.total_products, 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_state() {
        let api = MockSheet::new()
            .with_menu(sample_menu())
            .with_orders(sample_orders());
        let mut console = AdminConsole::new(Box::new(api));
        console.refresh().await.unwrap();

        console.api = Box::new(MockSheet::new().failing());
        assert!(console.refresh().await.is_err());
        assert_eq!(console.orders().len(), 3);
        assert_eq!(console.menu().len(), 2);
    }

    #[tokio::test]
    async fn add_product_refreshes_the_table() {
        let api = MockSheet::new().with_menu(sample_menu());
        let mut console = AdminConsole::new(Box::new(api));
        console.refresh().await.unwrap();

        let form = ProductForm {
            name: "Masala Chai".to_string(),
            category: "Beverages".to_string(),
            price: "20".to_string(),
            image: String::new(),
            description: String::new(),
        };
        let msg = console.add_product(&form).await.unwrap();
        assert!(msg.contains("Masala Chai"));
    }

    #[tokio::test]
    async fn bad_price_never_reaches_the_sheet() {
        let mut console = AdminConsole::new(Box::new(MockSheet::new()));
        let form = ProductForm {
            name: "Masala Chai".to_string(),
            price: "cheap".to_string(),
            ..ProductForm::default()
        };
        let result = console.add_product(&form).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_falls_back_to_local_remove_when_refetch_fails() {
        let api = MockSheet::new().with_menu(sample_menu());
        let mut console = AdminConsole::new(Box::new(api));
        console.refresh().await.unwrap();

        // swap in an endpoint that accepts the delete but fails the re-fetch
        struct DeleteOnly;
        #[async_trait::async_trait]
        impl crate::sheet::SheetApi for DeleteOnly {
            async fn fetch_menu(&self) -> Result<Vec<MenuItem>, AppError> {
                Err(AppError::Network("down".to_string()))
            }
            async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, AppError> {
                Err(AppError::Network("down".to_string()))
            }
            async fn add_product(
                &self,
                _: &crate::models::NewProduct,
            ) -> Result<(), AppError> {
                Ok(())
            }
            async fn delete_product(&self, _: &str) -> Result<(), AppError> {
                Ok(())
            }
            async fn submit_order(
                &self,
                _: &crate::models::OrderRequest,
            ) -> Result<String, AppError> {
                Ok(String::new())
            }
        }

        console.api = Box::new(DeleteOnly);
        console.delete_product("Tea").await.unwrap();
        let names: Vec<&str> = console.menu().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Dosa"]);
    }

    #[tokio::test]
    async fn delete_of_unknown_product_is_a_local_error() {
        let api = MockSheet::new().with_menu(sample_menu());
        let mut console = AdminConsole::new(Box::new(api));
        console.refresh().await.unwrap();

        let result = console.delete_product("Pizza").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(console.menu().len(), 2);
    }
}
