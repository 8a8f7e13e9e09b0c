//! Cart domain types for the shopping cart widget.
//!
//! This crate has no page or storage access of its own:
//!
//! - **Cart**: ordered line items with unique ids, add/remove/total
//! - **Money**: amounts rounded only for display, formatted as `21.00 EUR`
//! - **Product**: structured or scraped product data resolved to a descriptor
//!
//! # Example
//!
//! ```rust
//! use cart_core::prelude::*;
//!
//! let source = ProductSource::Scraped {
//!     name: "Kingdom Hearts".to_string(),
//!     price_text: "12,50 EUR".to_string(),
//!     category: Some(Category::Game),
//! };
//! let product = source.resolve(Currency::EUR).unwrap();
//!
//! let mut cart = Cart::new(Currency::EUR);
//! cart.add(product.clone());
//! cart.add(product);
//!
//! assert_eq!(cart.items()[0].id.as_str(), "kingdom-hearts");
//! assert_eq!(cart.total().display(), "25.00 EUR");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod product;

pub use error::CartError;
pub use ids::ItemId;
pub use money::{Currency, Money};
pub use product::parse_price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ItemId;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartChange, LineItem};
    pub use crate::product::{parse_price, Category, ProductDescriptor, ProductSource};
}
