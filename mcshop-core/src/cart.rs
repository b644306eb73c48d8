//! Shopping cart state
use crate::catalog::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An item paired with a purchase quantity. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: Item,
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this entry, `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}

/// Shopping cart keyed by item id.
///
/// At most one entry exists per id, and entries are listed in the order they
/// were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    entries: HashMap<ItemId, CartEntry>,
    order: Vec<ItemId>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`. Returns the new quantity for that item.
    pub fn add_to_cart(&mut self, item: &Item) -> u32 {
        if let Some(entry) = self.entries.get_mut(&item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            log::debug!("cart: {} x{}", item.id, entry.quantity);
            return entry.quantity;
        }
        self.entries.insert(
            item.id,
            CartEntry {
                item: item.clone(),
                quantity: 1,
            },
        );
        self.order.push(item.id);
        log::debug!("cart: {} added", item.id);
        1
    }

    /// Drop the entry for `id`. No-op when absent.
    pub fn remove_from_cart(&mut self, id: ItemId) {
        if self.entries.remove(&id).is_some() {
            self.order.retain(|existing| *existing != id);
            log::debug!("cart: {id} removed");
        }
    }

    /// Set the quantity of an existing entry.
    ///
    /// A quantity of zero or below removes the entry. Ids that are not in the
    /// cart are left untouched.
    pub fn update_quantity(&mut self, id: ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            log::debug!("cart: {id} set to {}", entry.quantity);
        }
    }

    /// Sum of `price × quantity` over every entry; 0 when empty. Saturates at
    /// `u64::MAX`.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.entries
            .values()
            .map(CartEntry::line_total)
            .fold(0, u64::saturating_add)
    }

    /// Current quantity of `id`, or 0 when not in the cart.
    #[must_use]
    pub fn quantity(&self, id: ItemId) -> u32 {
        self.entries.get(&id).map_or(0, |entry| entry.quantity)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Rarity};

    fn item(id: u32, price: u32) -> Item {
        Item {
            id: ItemId(id),
            name: format!("item-{id}"),
            description: String::new(),
            price,
            image: String::new(),
            category: Category::Weapons,
            rarity: Rarity::Rare,
        }
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut cart = Cart::new();
        let sword = item(1, 1500);
        assert_eq!(cart.add_to_cart(&sword), 1);
        assert_eq!(cart.add_to_cart(&sword), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity(ItemId(1)), 2);
    }

    #[test]
    fn update_to_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_to_cart(&item(1, 10));
        cart.add_to_cart(&item(2, 10));
        cart.update_quantity(ItemId(1), 0);
        cart.update_quantity(ItemId(2), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_of_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity(ItemId(9), 4);
        assert!(cart.is_empty());
        assert!(!cart.contains(ItemId(9)));
    }

    #[test]
    fn update_sets_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&item(3, 800));
        cart.update_quantity(ItemId(3), 5);
        assert_eq!(cart.quantity(ItemId(3)), 5);
        assert_eq!(cart.total_price(), 4000);
    }

    #[test]
    fn oversized_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add_to_cart(&item(1, 1));
        cart.update_quantity(ItemId(1), i64::MAX);
        assert_eq!(cart.quantity(ItemId(1)), u32::MAX);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        for id in [1, 2] {
            cart.add_to_cart(&item(id, u32::MAX));
            cart.update_quantity(ItemId(id), i64::from(u32::MAX));
        }
        assert_eq!(cart.total_price(), u64::MAX);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        let sword = item(1, 1500);
        cart.add_to_cart(&sword);
        cart.add_to_cart(&sword);
        cart.add_to_cart(&item(2, 500));
        assert_eq!(cart.total_price(), 3500);
        assert_eq!(Cart::new().total_price(), 0);
    }

    #[test]
    fn cart_serializes_but_is_never_deserialized() {
        trait NotDeserialize<A> {
            fn check() {}
        }
        impl<T: ?Sized> NotDeserialize<()> for T {}
        impl<T: ?Sized + serde::de::DeserializeOwned> NotDeserialize<u8> for T {}
        // Ambiguous, and so rejected by the compiler, if either type gains `Deserialize`.
        <Cart as NotDeserialize<_>>::check();
        <crate::state::ShopState as NotDeserialize<_>>::check();

        let mut cart = Cart::new();
        cart.add_to_cart(&item(2, 10));
        cart.add_to_cart(&item(1, 10));
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["order"], serde_json::json!([2, 1]));
    }

    #[test]
    fn entries_follow_first_added_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&item(5, 1));
        cart.add_to_cart(&item(2, 1));
        cart.add_to_cart(&item(5, 1));
        cart.add_to_cart(&item(7, 1));
        cart.remove_from_cart(ItemId(2));
        let ids: Vec<u32> = cart.entries().map(|e| e.item.id.0).collect();
        assert_eq!(ids, vec![5, 7]);
    }

    #[test]
    fn remove_of_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&item(1, 1));
        cart.remove_from_cart(ItemId(2));
        assert_eq!(cart.len(), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.entries().count(), 0);
    }
}
