//! Widget configuration.

use cart_core::{CartError, Currency};
use cart_observability::{LogFormat, LogLevel, LogTarget};
use serde::{Deserialize, Serialize};

/// Default storage key for the persisted cart.
pub const DEFAULT_STORAGE_KEY: &str = "shoppingCart";

/// Caption used when a display surface has none of its own.
pub const DEFAULT_CAPTION: &str =
    r#"<i class="fa-solid fa-basket-shopping"></i> Shopping Cart"#;

/// Message shown on a display surface when the cart is empty.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Your cart is empty";

/// Configuration for the cart widget.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Key under which the cart is persisted.
    pub storage_key: String,
    /// Currency for parsing and display.
    pub currency: Currency,
    /// Classes marking "add to cart" triggers.
    pub trigger_classes: Vec<String>,
    /// Classes marking cart display surfaces.
    pub surface_classes: Vec<String>,
    /// Caption markup for surfaces without one.
    pub default_caption: String,
    /// Empty-state message.
    pub empty_message: String,
    /// Minimum level for diagnostics.
    pub log_level: LogLevel,
    /// Diagnostic output format.
    pub log_format: LogFormat,
    /// Where diagnostics go.
    pub log_target: LogTarget,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: Currency::default(),
            trigger_classes: vec!["cart-button".to_string(), "button-cart".to_string()],
            surface_classes: vec!["cart".to_string(), "cart-desktop".to_string()],
            default_caption: DEFAULT_CAPTION.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Json,
            log_target: LogTarget::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, CartError> {
        let config: WidgetConfig =
            toml::from_str(s).map_err(|e| CartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Check that the configuration can drive a widget.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.storage_key.is_empty() {
            return Err(CartError::Config("storage_key must not be empty".to_string()));
        }
        if self.trigger_classes.iter().any(String::is_empty)
            || self.surface_classes.iter().any(String::is_empty)
        {
            return Err(CartError::Config("class names must not be empty".to_string()));
        }
        Ok(())
    }
}
