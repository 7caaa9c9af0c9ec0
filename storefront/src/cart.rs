use serde::Serialize;
use uuid::Uuid;

use plant_api::domain::Plant;

/// One cart entry: a snapshot of a plant at the moment it was added.
/// Later catalog loads do not affect items already in the cart.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    /// Generated at add time, distinct from the plant id, so the same
    /// plant can sit in the cart as several independent line items.
    pub cart_id: Uuid,
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Ordered in-memory cart. Insertion order is preserved and nothing is
/// deduplicated; the total is recomputed from scratch on every call so it
/// can never drift.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item for the plant. Always succeeds; there is no
    /// capacity limit and no duplicate detection. Returns the generated
    /// cart id so the caller can wire up its remove action.
    pub fn add(&mut self, plant: &Plant) -> Uuid {
        let cart_id = Uuid::new_v4();
        // A malformed price must never poison the total.
        let price = if plant.price.is_finite() {
            plant.price.max(0.0)
        } else {
            0.0
        };
        self.items.push(LineItem {
            cart_id,
            id: plant.id.clone(),
            name: plant.name.clone(),
            price,
            image: plant.image.clone(),
        });
        cart_id
    }

    /// Remove the line item with the given cart id. Removing an unknown
    /// id is a no-op, not an error.
    pub fn remove(&mut self, cart_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.cart_id != cart_id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plant(id: &str, name: &str, price: f64) -> Plant {
        let mut plant = Plant::from_raw(&json!({"id": id, "name": name})).unwrap();
        plant.price = price;
        plant
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add(&plant("1", "Fern", 300.0));
        let size_before = cart.len();
        let total_before = cart.total();

        let cart_id = cart.add(&plant("2", "Aloe", 250.0));
        assert!(cart.remove(cart_id));

        assert_eq!(cart.len(), size_before);
        assert_eq!(cart.total(), total_before);
    }

    #[test]
    fn same_plant_twice_makes_independent_line_items() {
        let mut cart = Cart::new();
        let fern = plant("1", "Fern", 300.0);

        let first = cart.add(&fern);
        let second = cart.add(&fern);

        assert_ne!(first, second);
        assert_eq!(cart.len(), 2);
        assert!(cart.items().iter().all(|item| item.id == "1"));
        assert_eq!(cart.total(), 600.0);

        // Each copy is removable on its own.
        cart.remove(first);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].cart_id, second);
    }

    #[test]
    fn removing_unknown_cart_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&plant("1", "Fern", 300.0));

        assert!(!cart.remove(Uuid::new_v4()));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 300.0);
    }

    #[test]
    fn malformed_prices_are_coerced_to_zero() {
        let mut cart = Cart::new();
        cart.add(&plant("1", "Fern", f64::NAN));
        cart.add(&plant("2", "Aloe", f64::INFINITY));
        cart.add(&plant("3", "Oak", -50.0));

        let total = cart.total();
        assert_eq!(total, 0.0);
        assert!(!total.is_nan());
    }

    #[test]
    fn line_items_snapshot_the_plant() {
        let mut cart = Cart::new();
        let mut fern = plant("1", "Fern", 300.0);
        cart.add(&fern);

        // Mutating the catalog copy leaves the cart untouched.
        fern.price = 999.0;
        assert_eq!(cart.total(), 300.0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(&plant("1", "Fern", 100.0));
        cart.add(&plant("2", "Aloe", 200.0));
        cart.add(&plant("3", "Oak", 300.0));

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Fern", "Aloe", "Oak"]);
        assert_eq!(cart.total(), 600.0);
    }
}
