//! Catalog categories and their static cart images.

use serde::{Deserialize, Serialize};

/// The six catalog categories a product card can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cd,
    Vhs,
    Game,
    Vinyl,
    Cassette,
    Dvd,
}

impl Category {
    /// All categories, in lookup order.
    pub const ALL: [Category; 6] = [
        Category::Cd,
        Category::Vhs,
        Category::Game,
        Category::Vinyl,
        Category::Cassette,
        Category::Dvd,
    ];

    /// Class name marking a product card of this category.
    ///
    /// The cassette class is spelled `item-casette` in the catalog markup.
    pub fn class_name(&self) -> &'static str {
        match self {
            Category::Cd => "item-cd",
            Category::Vhs => "item-vhs",
            Category::Game => "item-game",
            Category::Vinyl => "item-vinyl",
            Category::Cassette => "item-casette",
            Category::Dvd => "item-dvd",
        }
    }

    /// Static image shown for products of this category.
    pub fn image_path(&self) -> &'static str {
        match self {
            Category::Cd => "/assets/yeezus.jpg",
            Category::Vhs => "/assets/scarface.jpg",
            Category::Game => "/assets/kingdomHearts.jpg",
            Category::Vinyl => "/assets/discovery.jpg",
            Category::Cassette => "/assets/afterHours.jpg",
            Category::Dvd => "/assets/interstella.jpg",
        }
    }

    /// Look up a single class name.
    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.class_name() == class)
    }

    /// Find the first category, in lookup order, present in a class list.
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str> + Clone) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| classes.clone().into_iter().any(|class| class == c.class_name()))
    }
}
