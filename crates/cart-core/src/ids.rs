//! Line item identifiers.
//!
//! An `ItemId` is a stable slug. It is either supplied by the page (a
//! `data-id` attribute) or derived from the product name with [`ItemId::slugify`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a line item, unique within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ID from a string, used as-is.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an ID from a display name.
    ///
    /// The name is lower-cased and every run of whitespace becomes a single
    /// hyphen. Leading and trailing whitespace is not trimmed here; callers
    /// that scrape text trim it first.
    ///
    /// ```
    /// use cart_core::ItemId;
    /// assert_eq!(ItemId::slugify("Kingdom Hearts").as_str(), "kingdom-hearts");
    /// ```
    pub fn slugify(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for c in name.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
            } else {
                slug.extend(c.to_lowercase());
                in_whitespace = false;
            }
        }
        Self(slug)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
