//! Cart line items with prices kept in step with pack size and quantity.
//!
//! Every mutation that changes the items writes the whole collection through
//! to storage. Storage failures are logged and otherwise ignored.

use std::collections::HashSet;
use std::fmt;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CART_STORAGE_KEY;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PackSize {
    Six,
    Twelve,
}

impl PackSize {
    pub const ALL: [PackSize; 2] = [PackSize::Six, PackSize::Twelve];

    pub fn from_cans(cans: u32) -> Option<Self> {
        match cans {
            6 => Some(PackSize::Six),
            12 => Some(PackSize::Twelve),
            _ => None,
        }
    }

    pub fn cans(self) -> u32 {
        match self {
            PackSize::Six => 6,
            PackSize::Twelve => 12,
        }
    }

    /// Price of one pack, in euros.
    pub fn unit_price(self) -> u32 {
        match self {
            PackSize::Six => 12,
            PackSize::Twelve => 24,
        }
    }

    pub fn price_for(self, quantity: u32) -> u32 {
        self.unit_price().saturating_mul(quantity)
    }
}

impl TryFrom<u32> for PackSize {
    type Error = String;

    fn try_from(cans: u32) -> Result<Self, Self::Error> {
        PackSize::from_cans(cans).ok_or_else(|| format!("unsupported pack size {}", cans))
    }
}

impl From<PackSize> for u32 {
    fn from(pack: PackSize) -> u32 {
        pack.cans()
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} latas", self.cans())
    }
}

/// One persisted line of the cart. `price` is always
/// `pack_size.unit_price() * quantity`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub quantity: u32,
    pub pack_size: PackSize,
}

impl CartItem {
    fn reprice(&mut self) {
        self.price = self.pack_size.price_for(self.quantity);
    }
}

/// Input for [`CartStore::add_item`], as the UI hands it over.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub pack_size: u32,
    pub quantity: u32,
}

#[derive(Debug, Error)]
pub enum CartLoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored cart is not a JSON array of items: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stored cart item {0:?} is invalid")]
    InvalidItem(String),
}

/// Pack-size ids end in the pack size, e.g. `steez-pink-6`.
pub fn item_id_for_pack(id: &str, pack: PackSize) -> String {
    let stem = id.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == id.len() {
        format!("{}-{}", id, pack.cans())
    } else {
        format!("{}{}", stem, pack.cans())
    }
}

#[derive(Clone, Debug)]
pub struct CartStore<S> {
    items: Vec<CartItem>,
    storage: S,
}

impl<S> PartialEq for CartStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrates from storage. Anything unreadable yields an empty cart.
    pub fn load(storage: S) -> Self {
        let items = match Self::read(&storage) {
            Ok(items) => items,
            Err(e) => {
                error!("Discarding stored cart: {}", e);
                Vec::new()
            }
        };
        Self { items, storage }
    }

    fn read(storage: &S) -> Result<Vec<CartItem>, CartLoadError> {
        let Some(raw) = storage.get(CART_STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        let mut items: Vec<CartItem> = serde_json::from_str(&raw)?;
        let mut seen = HashSet::new();
        for item in items.iter_mut() {
            if item.quantity == 0 || !seen.insert(item.id.clone()) {
                return Err(CartLoadError::InvalidItem(item.id.clone()));
            }
            let expected = item.pack_size.price_for(item.quantity);
            if item.price != expected {
                warn!("Stored price {} for {} is stale, using {}", item.price, item.id, expected);
                item.price = expected;
            }
        }
        Ok(items)
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(|e| StorageError::Write(e.to_string()))
            .and_then(|raw| self.storage.set(CART_STORAGE_KEY, &raw));
        if let Err(e) = result {
            error!("Failed to save cart: {}", e);
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of packs across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of line prices. Each price already includes its quantity.
    pub fn total(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.price))
    }

    /// Adds packs, merging into an existing line with the same id.
    pub fn add_item(&mut self, item: NewCartItem) {
        let Some(pack_size) = PackSize::from_cans(item.pack_size) else {
            warn!("Ignoring {}: pack size {} is not sold", item.id, item.pack_size);
            return;
        };
        let quantity = item.quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            existing.reprice();
            info!("Cart: {} now x{}", existing.id, existing.quantity);
        } else {
            info!("Cart: added {} x{}", item.id, quantity);
            self.items.push(CartItem {
                id: item.id,
                name: item.name,
                price: pack_size.price_for(quantity),
                image: item.image,
                quantity,
                pack_size,
            });
        }
        self.persist();
    }

    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            info!("Cart: removed {}", id);
            self.persist();
        }
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity < 1 {
            warn!("Ignoring quantity {} for {}", quantity, id);
            return;
        }
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return;
        };
        item.quantity = quantity;
        item.reprice();
        self.persist();
    }

    /// Switches a line to another pack size. The line's id changes to match
    /// the new size; if a line with that id already exists the two merge.
    pub fn update_pack_size(&mut self, id: &str, pack_size: u32, unit_price: u32) {
        let Some(pack) = PackSize::from_cans(pack_size) else {
            warn!("Ignoring pack size {} for {}", pack_size, id);
            return;
        };
        if unit_price == 0 {
            warn!("Ignoring zero unit price for {}", id);
            return;
        }
        if unit_price != pack.unit_price() {
            warn!(
                "Unit price {} does not match {} ({}), using catalogue price",
                unit_price,
                pack,
                pack.unit_price()
            );
        }
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return;
        };

        let new_id = item_id_for_pack(id, pack);
        let collision = self
            .items
            .iter()
            .position(|i| i.id == new_id)
            .filter(|&other| other != index);

        match collision {
            Some(other) => {
                let moved = self.items.remove(index);
                let other = if other > index { other - 1 } else { other };
                let target = &mut self.items[other];
                target.quantity = target.quantity.saturating_add(moved.quantity);
                target.reprice();
                info!("Cart: merged {} into {}", id, new_id);
            }
            None => {
                let item = &mut self.items[index];
                item.pack_size = pack;
                item.id = new_id;
                item.reprice();
                info!("Cart: {} switched to {}", id, item.id);
            }
        }
        self.persist();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.storage.remove(CART_STORAGE_KEY) {
            error!("Failed to clear saved cart: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn pink(id: &str, pack_size: u32, quantity: u32) -> NewCartItem {
        NewCartItem {
            id: id.to_string(),
            name: "Steez Pink".to_string(),
            image: "/assets/can-pink.png".to_string(),
            pack_size,
            quantity,
        }
    }

    fn assert_priced<S: KeyValueStore>(cart: &CartStore<S>) {
        for item in cart.items() {
            assert_eq!(item.price, item.pack_size.unit_price() * item.quantity, "{}", item.id);
        }
    }

    #[test]
    fn unit_price_follows_pack_size() {
        assert_eq!(PackSize::Six.unit_price(), 12);
        assert_eq!(PackSize::Twelve.unit_price(), 24);
        assert_eq!(PackSize::from_cans(7), None);
    }

    #[test]
    fn adding_same_id_merges_quantities() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 1));
        cart.add_item(pink("p-6", 6, 2));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].price, 36);
    }

    #[test]
    fn add_clamps_quantity_and_ignores_unknown_packs() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 0));
        cart.add_item(pink("p-24", 24, 1));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[0].price, 12);
    }

    #[test]
    fn update_quantity_reprices_and_rejects_zero() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-12", 12, 1));
        cart.update_quantity("p-12", 4);
        assert_eq!(cart.get("p-12").map(|i| i.price), Some(96));

        cart.update_quantity("p-12", 0);
        cart.update_quantity("missing", 2);
        assert_eq!(cart.get("p-12").map(|i| i.quantity), Some(4));
        assert_priced(&cart);
    }

    #[test]
    fn pack_size_change_renames_item() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 3));
        cart.update_pack_size("p-6", 12, 24);

        assert!(cart.get("p-6").is_none());
        let item = cart.get("p-12").expect("renamed item");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, 72);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn pack_size_change_ignores_invalid_input() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 2));
        cart.update_pack_size("p-6", 8, 16);
        cart.update_pack_size("p-6", 12, 0);

        assert_eq!(cart.items()[0].id, "p-6");
        assert_eq!(cart.items()[0].price, 24);
    }

    #[test]
    fn pack_size_change_keeps_price_invariant_with_wrong_unit_price() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 2));
        cart.update_pack_size("p-6", 12, 30);

        assert_eq!(cart.get("p-12").map(|i| i.price), Some(48));
    }

    #[test]
    fn pack_size_change_into_existing_line_merges() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 2));
        cart.add_item(pink("p-12", 12, 1));
        cart.update_pack_size("p-6", 12, 24);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, "p-12");
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].price, 72);
    }

    #[test]
    fn ids_without_trailing_digits_get_a_suffix() {
        assert_eq!(item_id_for_pack("pink", PackSize::Twelve), "pink-12");
        assert_eq!(item_id_for_pack("pink-12", PackSize::Six), "pink-6");
        assert_eq!(item_id_for_pack("pink-6", PackSize::Six), "pink-6");
    }

    #[test]
    fn count_and_total_sum_lines() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 2));
        cart.add_item(pink("p-12", 12, 3));

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), 24 + 72);
        assert_priced(&cart);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_item(pink("p-6", 6, 1));
        cart.add_item(pink("p-6", 6, 2));
        assert_eq!(cart.items()[0].price, 36);

        cart.update_pack_size("p-6", 12, 24);
        let new_id = cart.items()[0].id.clone();
        assert_ne!(new_id, "p-6");
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].price, 72);

        cart.remove_item(&new_id);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn reload_reproduces_items() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::load(storage.clone());
        cart.add_item(pink("p-6", 6, 2));
        cart.add_item(pink("p-12", 12, 1));
        let saved = cart.items().to_vec();
        drop(cart);

        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.items(), saved.as_slice());
    }

    #[test]
    fn stored_format_uses_camel_case_pack_size() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::load(storage.clone());
        cart.add_item(pink("p-6", 6, 1));

        let raw = storage.raw(CART_STORAGE_KEY).expect("cart saved");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["packSize"], 6);
        assert_eq!(value[0]["price"], 12);
    }

    #[test]
    fn corrupt_storage_starts_empty() {
        for raw in ["not json", "{\"id\":\"p-6\"}", "42", "[{\"id\":\"p-6\"}]"] {
            let cart = CartStore::load(MemoryStorage::with_entry(CART_STORAGE_KEY, raw));
            assert!(cart.is_empty(), "{}", raw);
        }
    }

    #[test]
    fn invalid_stored_items_are_discarded() {
        let bad_pack = r#"[{"id":"p-8","name":"x","price":1,"image":"","quantity":1,"packSize":8}]"#;
        let zero_qty = r#"[{"id":"p-6","name":"x","price":0,"image":"","quantity":0,"packSize":6}]"#;
        for raw in [bad_pack, zero_qty] {
            assert!(CartStore::load(MemoryStorage::with_entry(CART_STORAGE_KEY, raw)).is_empty());
        }
    }

    #[test]
    fn stale_stored_price_is_recomputed() {
        let raw = r#"[{"id":"p-6","name":"x","price":99,"image":"","quantity":2,"packSize":6}]"#;
        let cart = CartStore::load(MemoryStorage::with_entry(CART_STORAGE_KEY, raw));
        assert_eq!(cart.items()[0].price, 24);
    }

    #[test]
    fn storage_failure_keeps_memory_state() {
        let storage = MemoryStorage::new();
        storage.fail_writes();
        let mut cart = CartStore::load(storage.clone());
        cart.add_item(pink("p-6", 6, 1));
        cart.clear();
        cart.add_item(pink("p-12", 12, 1));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(storage.raw(CART_STORAGE_KEY), None);
    }

    #[test]
    fn clear_removes_saved_copy() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::load(storage.clone());
        cart.add_item(pink("p-6", 6, 1));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_STORAGE_KEY), None);
    }
}
