//! Composition root: one cart store wired to one page.

use std::rc::Rc;

use cart_cache::KeyValueStore;
use cart_core::cart::Cart;
use cart_core::ItemId;
use cart_observability::{LogSink, StructuredLogger};

use crate::config::WidgetConfig;
use crate::dom::{Document, Listener, NodeId};
use crate::extract::product_source;
use crate::render::render_all;
use crate::store::{AddOutcome, CartObserver, CartStore};

/// The page side of the widget: the document and how to draw on it.
pub struct PageView {
    document: Document,
    config: WidgetConfig,
}

impl PageView {
    /// The page.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl CartObserver for PageView {
    fn on_change(&mut self, cart: &Cart) {
        render_all(&mut self.document, cart, &self.config);
    }
}

/// What a click did.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// An "add to cart" trigger was activated.
    Add(AddOutcome),
    /// A line's remove control was activated.
    Remove { id: ItemId, removed: bool },
}

/// A shopping cart mounted on a page.
pub struct ShoppingCart<S> {
    store: CartStore<S>,
    view: PageView,
}

impl<S: KeyValueStore> ShoppingCart<S> {
    /// Mount on a page with a logger built from the configuration.
    pub fn mount(document: Document, store: S, config: WidgetConfig) -> Self {
        let logger = StructuredLogger::new("cart")
            .with_min_level(config.log_level)
            .with_format(config.log_format)
            .with_sink(config.log_target.sink());
        Self::mount_with_logger(document, store, config, logger)
    }

    /// Mount on a page, logging diagnostics to `sink`.
    pub fn mount_with_sink(
        document: Document,
        store: S,
        config: WidgetConfig,
        sink: Rc<dyn LogSink>,
    ) -> Self {
        let logger = StructuredLogger::new("cart")
            .with_min_level(config.log_level)
            .with_format(config.log_format)
            .with_sink(sink);
        Self::mount_with_logger(document, store, config, logger)
    }

    /// Mount on a page.
    ///
    /// Loads the persisted cart, binds every trigger on the page and renders
    /// every display surface.
    pub fn mount_with_logger(
        mut document: Document,
        store: S,
        config: WidgetConfig,
        logger: StructuredLogger,
    ) -> Self {
        let triggers = document.query_all(config.trigger_classes.as_slice());
        for trigger in &triggers {
            document.set_listener(*trigger, Listener::AddToCart);
        }
        logger
            .debug_builder("Cart mounted")
            .field_i64("triggers", triggers.len() as i64)
            .emit();

        let store = CartStore::open(store, &config, logger);
        let mut cart = Self {
            store,
            view: PageView { document, config },
        };
        cart.refresh_display();
        cart
    }

    /// Handle a click on `node`.
    ///
    /// The click goes to the nearest node, starting at `node`, that has a
    /// listener. Returns `None` when nothing handles it.
    pub fn click(&mut self, node: NodeId) -> Option<ClickOutcome> {
        let (target, listener) = self.view.document.dispatch_target(node)?;
        let outcome = match listener {
            Listener::AddToCart => {
                let candidate = product_source(&self.view.document, target);
                ClickOutcome::Add(self.store.add_item(&candidate, &mut self.view))
            }
            Listener::RemoveItem(id) => {
                let removed = self.store.remove_item(&id, &mut self.view);
                ClickOutcome::Remove { id, removed }
            }
        };
        Some(outcome)
    }

    /// Redraw every display surface from the current cart.
    pub fn refresh_display(&mut self) {
        self.store.refresh_display(&mut self.view);
    }

    /// The cart store.
    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// The page.
    pub fn document(&self) -> &Document {
        self.view.document()
    }

    /// The active configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.view.config
    }

    /// Display surfaces currently on the page.
    pub fn surfaces(&self) -> Vec<NodeId> {
        self.view
            .document
            .query_all(self.view.config.surface_classes.as_slice())
    }

    /// Remove control rendered for `id` on the first surface, if any.
    pub fn remove_control(&self, id: &ItemId) -> Option<NodeId> {
        let doc = &self.view.document;
        let surface = *self.surfaces().first()?;
        doc.descendants(surface).into_iter().find(|n| {
            matches!(doc.listener(*n), Some(Listener::RemoveItem(item)) if item == id)
        })
    }

    /// Take the page back, unmounting the widget.
    pub fn into_document(self) -> Document {
        self.view.document
    }
}
