//! Cart and line item types.
//!
//! The cart is an ordered collection of lines, one per product id, in
//! first-added order. Totals are derived from the lines on every read and
//! never stored. All state transitions here are pure; persistence is the
//! caller's concern.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One product/quantity pairing in the cart.
///
/// The full product is carried (flattened) so the persisted form is a JSON
/// array of `{...productFields, quantity}` records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    /// Line subtotal (price × quantity).
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }

    pub fn subtotal_display(&self) -> String {
        format!("${:.2}", self.subtotal())
    }
}

/// A shopping cart.
///
/// Serde-transparent: the serialized form is the bare line array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of a product.
    ///
    /// If a line for the product id exists, its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the line for a product id. Returns whether a line was removed;
    /// an absent id is not an error.
    pub fn remove(&mut self, product_id: u64) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity <= 0 behaves exactly like [`Cart::remove`]. An absent id is
    /// a silent no-op; this never inserts a new line.
    pub fn set_quantity(&mut self, product_id: u64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count (sum of quantities), recomputed on every call.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price (sum of price × quantity), recomputed on every call.
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    pub fn total_price_display(&self) -> String {
        format!("${:.2}", self.total_price())
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Look up a line by product id.
    pub fn get(&self, product_id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            category: "test".to_string(),
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 10,
            brand: None,
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_add_merges_on_id() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.0));
        cart.add(product(1, "Pen", 2.0));
        cart.add(product(1, "Pen", 2.0));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::default();
        cart.add(product(2, "Mug", 8.0));
        cart.add(product(1, "Pen", 2.0));
        cart.add(product(2, "Mug", 8.0));

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.0));
        cart.set_quantity(1, 0);
        assert!(cart.is_empty());

        cart.add(product(1, "Pen", 2.0));
        cart.set_quantity(1, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.0));
        cart.set_quantity(99, 4);
        cart.set_quantity(99, 0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.0));
        assert!(!cart.remove(99));
        assert!(cart.remove(1));
        assert!(!cart.remove(1));
    }

    #[test]
    fn test_totals_recomputed() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.5));
        cart.add(product(2, "Mug", 8.0));
        cart.set_quantity(1, 4);

        assert_eq!(cart.total_items(), 5);
        assert!((cart.total_price() - (4.0 * 2.5 + 8.0)).abs() < 1e-9);

        cart.remove(2);
        assert!((cart.total_price() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialized_form_is_line_array() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.0));
        cart.add(product(1, "Pen", 2.0));

        let json = serde_json::to_value(&cart).unwrap();
        let lines = json.as_array().expect("cart serializes as an array");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[0]["title"], "Pen");
        assert_eq!(lines[0]["quantity"], 2);
    }

    #[test]
    fn test_round_trip() {
        let mut cart = Cart::default();
        cart.add(product(1, "Pen", 2.0));
        cart.add(product(1, "Pen", 2.0));
        cart.add(product(7, "Mug", 8.0));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.get(1).unwrap().quantity, 2);
        assert_eq!(restored.get(7).unwrap().quantity, 1);
    }
}
