//! Product resolution.
//!
//! A click on an "add to cart" trigger yields a [`ProductSource`]: either the
//! structured data attributes of the trigger itself or text scraped from the
//! enclosing product card. Both resolve to the same [`ProductDescriptor`].

mod category;
mod price;

pub use category::Category;
pub use price::parse_price;

use crate::error::CartError;
use crate::ids::ItemId;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// A normalized product, ready to be merged into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Where a product's data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSource {
    /// `data-*` attributes on the trigger element.
    Structured {
        id: Option<String>,
        name: String,
        price: String,
        image: Option<String>,
    },
    /// Text content of the product card's name and price fields.
    Scraped {
        name: String,
        price_text: String,
        category: Option<Category>,
    },
}

impl ProductSource {
    /// Resolve into a descriptor.
    ///
    /// Fails with [`CartError::MissingName`] when the name is blank and with
    /// [`CartError::InvalidPrice`] when the price does not parse.
    pub fn resolve(&self, currency: Currency) -> Result<ProductDescriptor, CartError> {
        match self {
            ProductSource::Structured {
                id,
                name,
                price,
                image,
            } => {
                if name.trim().is_empty() {
                    return Err(CartError::MissingName);
                }
                let price = parse_price(price, currency)?;
                let id = match id.as_deref() {
                    Some(id) if !id.is_empty() => ItemId::new(id),
                    _ => ItemId::slugify(name),
                };
                Ok(ProductDescriptor {
                    id,
                    name: name.clone(),
                    price,
                    image: image.clone().unwrap_or_default(),
                })
            }
            ProductSource::Scraped {
                name,
                price_text,
                category,
            } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(CartError::MissingName);
                }
                let price = parse_price(price_text, currency)?;
                Ok(ProductDescriptor {
                    id: ItemId::slugify(name),
                    name: name.to_string(),
                    price,
                    image: category
                        .map(|c| c.image_path().to_string())
                        .unwrap_or_default(),
                })
            }
        }
    }
}
