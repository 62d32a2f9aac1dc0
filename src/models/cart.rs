use serde::{Deserialize, Serialize};

/// One selected product with its accumulated quantity. Serialized as-is
/// into the order POST body, so the field names are part of the wire shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartLine {
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * self.qty as f64
    }
}

/// Session-scoped cart. Invariant: at most one line per product name,
/// lines kept in first-added order.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear-scan upsert keyed by name: bump qty on an existing line,
    /// otherwise append a new line with qty 1. Cart sizes are small.
    pub fn add(&mut self, name: &str, price: f64) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.qty += 1;
        } else {
            self.lines.push(CartLine {
                name: name.to_string(),
                price,
                qty: 1,
            });
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.subtotal()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_adds_collapse_into_one_line() {
        let mut cart = Cart::new();
        cart.add("Tea", 10.0);
        cart.add("Cake", 50.0);
        cart.add("Tea", 10.0);

        assert_eq!(cart.len(), 2);
        let tea = &cart.lines()[0];
        assert_eq!(tea.name, "Tea");
        assert_eq!(tea.qty, 2);
        assert_eq!(cart.lines()[1].qty, 1);
    }

    #[test]
    fn one_line_per_distinct_name() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add("Dosa", 60.0);
        }
        cart.add("Idli", 40.0);
        cart.add("Dosa", 60.0);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].qty, 6);
        assert_eq!(cart.lines()[1].qty, 1);
    }

    #[test]
    fn grand_total_sums_subtotals() {
        let mut cart = Cart::new();
        cart.add("Tea", 10.0);
        cart.add("Tea", 10.0);
        cart.add("Cake", 50.0);

        assert_eq!(cart.total(), 70.0);
        assert_eq!(cart.lines()[0].subtotal(), 20.0);
        assert_eq!(cart.lines()[1].subtotal(), 50.0);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add("Tea", 10.0);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn line_serializes_to_wire_shape() {
        let line = CartLine {
            name: "Tea".to_string(),
            price: 10.0,
            qty: 2,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["name"], "Tea");
        assert_eq!(json["price"], 10.0);
        assert_eq!(json["qty"], 2);
    }
}
