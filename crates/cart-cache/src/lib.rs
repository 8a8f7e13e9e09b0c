//! Type-safe key-value persistence for the shopping cart widget.
//!
//! Wraps a string-keyed, string-valued store (browser `localStorage`, or an
//! in-memory map off the browser) with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use cart_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("shoppingCart", &vec!["yeezus"]).unwrap();
//!
//! let items: Option<Vec<String>> = cache.get("shoppingCart").unwrap();
//! assert_eq!(items, Some(vec!["yeezus".to_string()]));
//! ```

mod error;
mod kv;
mod memory;

#[cfg(target_arch = "wasm32")]
mod local;

pub use error::CacheError;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, MemoryStore};
}
