//! Cart and line item types.

use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::product::ProductDescriptor;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// This is also the persisted record: the stored cart is a JSON array of
/// these objects. Unknown fields are ignored and a missing `image` reads as
/// an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Stable slug, unique within the cart.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image URI, may be empty.
    #[serde(default)]
    pub image: String,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1 from a resolved product.
    pub fn from_descriptor(product: ProductDescriptor) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: 1,
        }
    }

    /// `price * quantity` as money, unrounded.
    pub fn line_total(&self, currency: Currency) -> Money {
        Money::new(self.price, currency).multiply(self.quantity)
    }

    /// Name as shown in the cart, with a `(n)` suffix when more than one unit.
    pub fn display_name(&self) -> String {
        if self.quantity > 1 {
            format!("{} ({})", self.name, self.quantity)
        } else {
            self.name.clone()
        }
    }

    fn is_valid(&self) -> bool {
        self.quantity >= 1 && self.price.is_finite() && self.price >= 0.0
    }
}

/// What an add did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended.
    Added(ItemId),
    /// An existing line's quantity went up by one.
    Incremented { id: ItemId, quantity: u32 },
}

/// A shopping cart: an ordered list of line items with unique ids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Build a cart from previously persisted items.
    ///
    /// Items with a zero quantity or a negative price are dropped, and only
    /// the first occurrence of a repeated id is kept, so the cart invariants
    /// hold even for hand-edited storage.
    pub fn from_items(items: Vec<LineItem>, currency: Currency) -> Self {
        let mut cart = Self::new(currency);
        for item in items {
            if item.is_valid() && cart.get(&item.id).is_none() {
                cart.items.push(item);
            }
        }
        cart
    }

    /// Add one unit of a product.
    ///
    /// If the id is already present only the quantity changes; name, price
    /// and image keep their first-seen values.
    pub fn add(&mut self, product: ProductDescriptor) -> CartChange {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return CartChange::Incremented {
                id: existing.id.clone(),
                quantity: existing.quantity,
            };
        }

        let item = LineItem::from_descriptor(product);
        let id = item.id.clone();
        self.items.push(item);
        CartChange::Added(id)
    }

    /// Remove an item. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> Money {
        Money::sum(
            self.items.iter().map(|i| i.line_total(self.currency)),
            self.currency,
        )
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by ID.
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Currency used for totals.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}
