//! Page-embedded shopping cart.
//!
//! This crate provides:
//! - `CartStore` - The page's cart, persisted after every change
//! - `Document` - A minimal page tree with click listeners
//! - `render_all` - Rebuilds every cart display surface from the cart
//! - `ShoppingCart` - Mounts a store on a page and dispatches clicks
//! - `WidgetConfig` - Widget configuration loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use cart_cache::MemoryStore;
//! use cart_widget::{ClickOutcome, Document, ShoppingCart, WidgetConfig};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! doc.append_element(root, "div", &["cart"]);
//! let button = doc.append_element(root, "button", &["cart-button"]);
//! doc.set_data(button, "name", "Kingdom Hearts");
//! doc.set_data(button, "price", "12,50 EUR");
//!
//! let mut cart = ShoppingCart::mount(doc, MemoryStore::new(), WidgetConfig::default());
//! assert!(matches!(cart.click(button), Some(ClickOutcome::Add(_))));
//! assert_eq!(cart.store().total().display(), "12.50 EUR");
//! ```

pub mod config;
pub mod dom;
pub mod extract;
pub mod render;
pub mod store;
pub mod widget;

pub use config::WidgetConfig;
pub use dom::{Document, Listener, NodeId};
pub use extract::product_source;
pub use render::{render_all, render_surface};
pub use store::{AddOutcome, CartObserver, CartStore};
pub use widget::{ClickOutcome, PageView, ShoppingCart};
