//! The cart store: single source of truth for the page's cart.

use cart_cache::{Cache, KeyValueStore};
use cart_core::cart::{Cart, CartChange, LineItem};
use cart_core::product::ProductSource;
use cart_core::{CartError, ItemId, Money};
use cart_observability::StructuredLogger;

use crate::config::WidgetConfig;

/// Receives the cart after every mutation.
pub trait CartObserver {
    /// Redraw from the current cart.
    fn on_change(&mut self, cart: &Cart);
}

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added(ItemId),
    /// An existing line's quantity went up by one.
    Incremented { id: ItemId, quantity: u32 },
    /// The candidate did not resolve; nothing changed.
    Rejected(CartError),
}

impl From<CartChange> for AddOutcome {
    fn from(change: CartChange) -> Self {
        match change {
            CartChange::Added(id) => AddOutcome::Added(id),
            CartChange::Incremented { id, quantity } => AddOutcome::Incremented { id, quantity },
        }
    }
}

/// Owns the in-memory cart and keeps persisted storage in step with it.
pub struct CartStore<S> {
    cart: Cart,
    cache: Cache<S>,
    storage_key: String,
    logger: StructuredLogger,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store, loading whatever the page persisted before.
    pub fn open(store: S, config: &WidgetConfig, logger: StructuredLogger) -> Self {
        let mut this = Self {
            cart: Cart::new(config.currency),
            cache: Cache::new(store),
            storage_key: config.storage_key.clone(),
            logger,
        };
        let items = this.load();
        this.cart = Cart::from_items(items, config.currency);
        this.logger
            .info_builder("Cart loaded")
            .field("key", this.storage_key.as_str())
            .field_i64("items", this.cart.len() as i64)
            .emit();
        this
    }

    /// Read the persisted items.
    ///
    /// A missing key and unreadable content both yield an empty list; the
    /// latter is logged and otherwise ignored.
    pub fn load(&self) -> Vec<LineItem> {
        match self.cache.get::<Vec<LineItem>>(&self.storage_key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                self.logger
                    .warn_builder("Discarding unreadable cart data")
                    .field("key", self.storage_key.as_str())
                    .field("error", e.to_string())
                    .emit();
                Vec::new()
            }
        }
    }

    /// Write the cart to storage, logging a failed write.
    ///
    /// The in-memory cart stays authoritative when the write fails.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            self.logger
                .error_builder("Could not persist cart")
                .field("key", self.storage_key.as_str())
                .field("error", e.to_string())
                .emit();
        }
    }

    /// Write the cart to storage.
    pub fn try_save(&self) -> Result<(), CartError> {
        self.cache.set(&self.storage_key, self.cart.items())?;
        Ok(())
    }

    /// Add one unit of the candidate product, then save and refresh.
    ///
    /// A candidate that does not resolve is logged and leaves both the cart
    /// and storage untouched.
    pub fn add_item(
        &mut self,
        candidate: &ProductSource,
        observer: &mut impl CartObserver,
    ) -> AddOutcome {
        let product = match candidate.resolve(self.cart.currency()) {
            Ok(product) => product,
            Err(e) => {
                self.logger
                    .error_builder("Could not extract product data")
                    .field("reason", e.to_string())
                    .emit();
                return AddOutcome::Rejected(e);
            }
        };

        let outcome = AddOutcome::from(self.cart.add(product));
        if let AddOutcome::Added(id) | AddOutcome::Incremented { id, .. } = &outcome {
            self.logger
                .debug_builder("Item added")
                .field("id", id.as_str())
                .field_i64("lines", self.cart.len() as i64)
                .emit();
        }
        self.commit(observer);
        outcome
    }

    /// Remove an item if present, then save and refresh.
    ///
    /// Returns whether an item was removed. An unknown id is not an error.
    pub fn remove_item(&mut self, id: &ItemId, observer: &mut impl CartObserver) -> bool {
        let removed = self.cart.remove(id);
        self.logger
            .debug_builder("Item removed")
            .field("id", id.as_str())
            .field_bool("found", removed)
            .emit();
        self.commit(observer);
        removed
    }

    /// Sum of `price * quantity` over the cart.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Redraw from the current cart without mutating it.
    pub fn refresh_display(&self, observer: &mut impl CartObserver) {
        observer.on_change(&self.cart);
    }

    fn commit(&self, observer: &mut impl CartObserver) {
        self.save();
        self.refresh_display(observer);
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Get an item by ID.
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.cart.get(id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// The key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }
}
