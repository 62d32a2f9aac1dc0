use std::io::{self, BufRead, Write};

use crate::models::{Cart, MenuItem};
use crate::services::menu_service::{self, ALL_CATEGORIES};
use crate::services::order_service;
use crate::sheet::SheetApi;
use crate::utils::AppError;

use super::render;

const HELP: &str = "Commands:
  menu                show the menu (current filter applied)
  categories          list category filter options
  filter <category>   show only one category ('filter all' resets)
  add <name>          add a product to the cart
  cart                show the cart
  name <your name>    set the checkout name
  email <address>     set the checkout email
  review <text>       set the order review/note
  checkout            place the order
  reload              re-fetch the menu from the sheet
  quit                leave";

/// The customer-facing front-end: owns the fetched menu, the selected
/// filter, the cart, and the checkout form fields for one session.
pub struct CustomerConsole {
    api: Box<dyn SheetApi>,
    menu: Vec<MenuItem>,
    category: String,
    name: String,
    email: String,
    review: String,
    cart: Cart,
}

impl CustomerConsole {
    pub fn new(api: Box<dyn SheetApi>) -> Self {
        Self {
            api,
            menu: Vec::new(),
            category: ALL_CATEGORIES.to_string(),
            name: String::new(),
            email: String::new(),
            review: String::new(),
            cart: Cart::new(),
        }
    }

    /// Re-fetch the menu. Held items stay untouched when the fetch
    /// fails, so the last good view keeps rendering.
    pub async fn load_menu(&mut self) -> Result<usize, AppError> {
        let items = self.api.fetch_menu().await?;
        let count = items.len();
        self.menu = items;
        Ok(count)
    }

    pub fn visible_items(&self) -> Vec<&MenuItem> {
        menu_service::filter_by_category(&self.menu, &self.category)
    }

    pub fn menu_view(&self) -> String {
        render::menu_cards(&self.visible_items())
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_filter(&mut self, category: &str) {
        self.category = if category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category.to_string()
        };
    }

    /// Cart upsert by product name, then the freshly rendered cart.
    /// The name must exist on the held menu.
    pub fn add_to_cart(&mut self, name: &str) -> Result<String, AppError> {
        let item = self
            .menu
            .iter()
            .find(|item| item.name == name)
            .or_else(|| {
                self.menu
                    .iter()
                    .find(|item| item.name.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| AppError::NotFound(format!("'{}' is not on the menu", name)))?;

        let (name, price) = (item.name.clone(), item.price);
        self.cart.add(&name, price);
        Ok(render::cart_view(&self.cart))
    }

    /// Validate, submit, echo the backend's acknowledgement. Cart and
    /// form fields reset on success regardless of response content;
    /// on any error they are left exactly as they were.
    pub async fn checkout(&mut self) -> Result<String, AppError> {
        let ack = order_service::place_order(
            self.api.as_ref(),
            &self.name,
            &self.email,
            &self.review,
            &self.cart,
        )
        .await?;

        self.cart.clear();
        self.name.clear();
        self.email.clear();
        self.review.clear();

        Ok(ack)
    }

    /// One command line in, one rendered response out. `None` ends the
    /// session. Errors become messages here; state is never poisoned.
    pub async fn handle(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => Some(String::new()),
            "menu" => Some(self.menu_view()),
            "categories" => Some(render::category_options(
                &menu_service::distinct_categories(&self.menu),
                &self.category,
            )),
            "filter" => {
                self.set_filter(rest);
                Some(self.menu_view())
            }
            "add" => Some(match self.add_to_cart(rest) {
                Ok(view) => view,
                Err(e) => format!("⚠️  {}", e),
            }),
            "cart" => Some(render::cart_view(&self.cart)),
            "name" => {
                self.name = rest.to_string();
                Some(format!("Name set to '{}'", self.name))
            }
            "email" => {
                self.email = rest.to_string();
                Some(format!("Email set to '{}'", self.email))
            }
            "review" => {
                self.review = rest.to_string();
                Some("Review noted.".to_string())
            }
            "checkout" => Some(match self.checkout().await {
                Ok(ack) => format!("🧾 {}", ack.trim()),
                Err(e) => {
                    log::error!("❌ Checkout failed: {}", e);
                    format!("⚠️  {}", e)
                }
            }),
            "reload" => Some(match self.load_menu().await {
                Ok(count) => format!("✅ Menu reloaded, {} items.\n{}", count, self.menu_view()),
                Err(e) => {
                    log::error!("❌ Menu reload failed: {}", e);
                    format!("⚠️  {}", e)
                }
            }),
            "help" => Some(HELP.to_string()),
            "quit" | "exit" => None,
            other => Some(format!("Unknown command '{}', try 'help'.", other)),
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        println!("🍽️  Welcome! Type 'help' for commands.");

        match self.load_menu().await {
            Ok(_) => println!("{}", self.menu_view()),
            Err(e) => {
                log::error!("❌ Could not load menu: {}", e);
                println!("⚠️  Could not load menu: {}", e);
            }
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            match self.handle(&line?).await {
                Some(out) if out.is_empty() => {}
                Some(out) => println!("{}", out),
                None => break,
            }
        }

        println!("👋 Bye!");
        Ok(())
    }
}
