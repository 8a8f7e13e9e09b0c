//! Reading product data off the page.

use cart_core::product::{Category, ProductSource};

use crate::dom::{Document, NodeId};

/// Tag of the product card enclosing a trigger.
const PRODUCT_CARD_TAG: &str = "article";
/// Class of the product name field inside a card.
const NAME_CLASS: &str = "item-name";
/// Class of the product price field inside a card.
const PRICE_CLASS: &str = "item-price";

/// Build the product candidate for a clicked trigger.
///
/// `data-name` and `data-price` on the trigger win when both are non-empty.
/// Otherwise the name and price are scraped from the nearest product card.
/// Whatever cannot be found comes back empty, and resolving the candidate
/// then fails.
pub fn product_source(doc: &Document, trigger: NodeId) -> ProductSource {
    let non_empty = |key: &str| doc.data(trigger, key).filter(|v| !v.is_empty());

    if let (Some(name), Some(price)) = (non_empty("name"), non_empty("price")) {
        return ProductSource::Structured {
            id: doc.data(trigger, "id").map(str::to_string),
            name: name.to_string(),
            price: price.to_string(),
            image: doc.data(trigger, "image").map(str::to_string),
        };
    }

    let Some(card) = doc.closest(trigger, PRODUCT_CARD_TAG) else {
        return empty_source();
    };
    let (Some(name), Some(price)) = (
        doc.find_by_class(card, NAME_CLASS),
        doc.find_by_class(card, PRICE_CLASS),
    ) else {
        return empty_source();
    };

    ProductSource::Scraped {
        name: doc.text_content(name),
        price_text: doc.text_content(price),
        category: Category::from_classes(doc.classes(card).iter().map(String::as_str)),
    }
}

fn empty_source() -> ProductSource {
    ProductSource::Scraped {
        name: String::new(),
        price_text: String::new(),
        category: None,
    }
}
