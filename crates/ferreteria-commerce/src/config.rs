//! Store configuration and the seed catalog.

use crate::catalog::{CatalogStore, Category, Item};
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// The embedded default configuration.
pub const DEFAULT_SEED: &str = include_str!("../seed.toml");

/// Highest accepted unit price, keeps cart arithmetic far from overflow.
pub const MAX_UNIT_PRICE: f64 = 1_000_000.0;

/// Errors raised while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML did not parse or had the wrong shape.
    #[error("Failed to parse store config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two seed items share an id.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// A seed item has a blank name.
    #[error("Item {0} has an empty name")]
    EmptyName(ItemId),

    /// A seed item has a negative, non-finite or absurd price.
    #[error("Item {item_id} has an invalid price: {price}")]
    InvalidPrice { item_id: ItemId, price: f64 },
}

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Currency of every seed price, by code ("PEN", "usd", ...).
    #[serde(default, deserialize_with = "currency_from_code")]
    pub currency: Currency,

    /// Whether "clear cart" returns reserved units to stock.
    #[serde(default = "default_restore_stock_on_clear")]
    pub restore_stock_on_clear: bool,

    /// Log filter directive for the app (e.g. "info", "debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed catalog, in display order.
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

fn currency_from_code<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Currency::from_code(&code)
        .ok_or_else(|| de::Error::custom(format!("unknown currency code: {}", code)))
}

fn default_restore_stock_on_clear() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            restore_stock_on_clear: default_restore_stock_on_clear(),
            log_level: default_log_level(),
            items: Vec::new(),
        }
    }
}

impl StoreConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded hardware-store configuration.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_SEED)
    }

    /// Check ids, names and prices of the seed items.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for seed in &self.items {
            let id = ItemId::new(seed.id);
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateItem(id));
            }
            if seed.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(id));
            }
            if !seed.price.is_finite() || seed.price < 0.0 || seed.price > MAX_UNIT_PRICE {
                return Err(ConfigError::InvalidPrice {
                    item_id: id,
                    price: seed.price,
                });
            }
        }
        Ok(())
    }

    /// Build the catalog store from the seed items.
    pub fn build_catalog(&self) -> CatalogStore {
        CatalogStore::new(self.items.iter().map(|seed| seed.to_item(self.currency)).collect())
    }
}

/// A seed catalog entry as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSeed {
    pub id: u32,
    pub name: String,
    /// Decimal unit price (e.g. 25.99).
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub stock: u32,
}

impl ItemSeed {
    pub fn to_item(&self, currency: Currency) -> Item {
        Item::new(
            ItemId::new(self.id),
            self.name.clone(),
            Money::from_decimal(self.price, currency),
            self.category,
            self.stock,
        )
    }
}
