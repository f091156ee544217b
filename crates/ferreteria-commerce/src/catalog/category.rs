//! Category types for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category. The set is fixed for the lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Hand tools.
    #[serde(rename = "Herramientas")]
    Herramientas,
    /// Nails, screws and other fasteners.
    #[serde(rename = "Fijaciones")]
    Fijaciones,
    /// Measuring instruments.
    #[serde(rename = "Medición")]
    Medicion,
    /// Power tools.
    #[serde(rename = "Eléctricas")]
    Electricas,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Herramientas,
        Category::Fijaciones,
        Category::Medicion,
        Category::Electricas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Herramientas => "Herramientas",
            Category::Fijaciones => "Fijaciones",
            Category::Medicion => "Medición",
            Category::Electricas => "Eléctricas",
        }
    }

    /// Parse an exact category label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The category half of the filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Key used for the "all" option.
    pub const ALL_KEY: &'static str = "all";

    /// Every selectable option: "all" first, then each category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todas",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Stable key, `all` or the category label.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if key == Self::ALL_KEY {
            return Some(CategoryFilter::All);
        }
        Category::from_label(key).map(CategoryFilter::Only)
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("medición"), None);
    }

    #[test]
    fn test_filter_options_order() {
        let keys: Vec<_> = CategoryFilter::options().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["all", "Herramientas", "Fijaciones", "Medición", "Eléctricas"]
        );
        assert_eq!(CategoryFilter::All.label(), "Todas");
    }

    #[test]
    fn test_filter_accepts() {
        assert!(CategoryFilter::All.accepts(Category::Fijaciones));
        let tools = CategoryFilter::Only(Category::Herramientas);
        assert!(tools.accepts(Category::Herramientas));
        assert!(!tools.accepts(Category::Electricas));
    }

    #[test]
    fn test_filter_from_key() {
        assert_eq!(CategoryFilter::from_key("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_key("Eléctricas"),
            Some(CategoryFilter::Only(Category::Electricas))
        );
        assert_eq!(CategoryFilter::from_key("Jardín"), None);
    }

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&Category::Medicion).unwrap();
        assert_eq!(json, "\"Medición\"");
    }
}
