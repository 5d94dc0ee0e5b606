//! Domain types shared across brewlab crates.
//!
//! Option items and beverages are stored as JSON documents. The field set
//! of each type is exactly its on-the-wire shape.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection holding composed beverages.
pub const BEVERAGES_COLLECTION: &str = "beverages";

/// Every collection the store reads or writes.
pub const COLLECTIONS: [&str; 4] = [
    OptionCategory::Base.collection(),
    OptionCategory::Creamer.collection(),
    OptionCategory::Syrup.collection(),
    BEVERAGES_COLLECTION,
];

// ── Option items ──────────────────────────────────────────────────

/// A selectable option (base, creamer, or syrup).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeverageItem {
    /// Unique, stable identifier. Also the document id.
    pub id: String,
    pub name: String,
    /// Display color token (hex code or CSS color name).
    pub color: String,
}

impl BeverageItem {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// A named set of selectable option items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    Base,
    Creamer,
    Syrup,
}

impl OptionCategory {
    /// All categories, in load order.
    pub const ALL: [OptionCategory; 3] = [
        OptionCategory::Base,
        OptionCategory::Creamer,
        OptionCategory::Syrup,
    ];

    /// Name of the collection holding this category's items.
    pub const fn collection(self) -> &'static str {
        match self {
            OptionCategory::Base => "bases",
            OptionCategory::Creamer => "creamers",
            OptionCategory::Syrup => "syrups",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OptionCategory::Base => "base",
            OptionCategory::Creamer => "creamer",
            OptionCategory::Syrup => "syrup",
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Beverages ─────────────────────────────────────────────────────

/// A composed beverage.
///
/// Components are copied by value when the beverage is made, so later
/// changes to the option lists never alter saved beverages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Beverage {
    /// Assigned by storage on creation. Not part of the stored body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub base: BeverageItem,
    pub creamer: BeverageItem,
    pub syrup: BeverageItem,
    pub created_at: DateTime<Utc>,
}

impl Beverage {
    /// Snapshot three selections into an unsaved beverage.
    pub fn compose(
        base: &BeverageItem,
        creamer: &BeverageItem,
        syrup: &BeverageItem,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            base: base.clone(),
            creamer: creamer.clone(),
            syrup: syrup.clone(),
            created_at,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The component item for a category.
    pub fn component(&self, category: OptionCategory) -> &BeverageItem {
        match category {
            OptionCategory::Base => &self.base,
            OptionCategory::Creamer => &self.creamer,
            OptionCategory::Syrup => &self.syrup,
        }
    }

    /// Short human-readable description, e.g. `Coffee + Milk + Vanilla`.
    pub fn describe(&self) -> String {
        format!("{} + {} + {}", self.base.name, self.creamer.name, self.syrup.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Beverage {
        Beverage::compose(
            &BeverageItem::new("b3", "Coffee", "#6F4E37"),
            &BeverageItem::new("c2", "Milk", "#FFFFFF"),
            &BeverageItem::new("s2", "Vanilla", "#FFEFD5"),
            Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap(),
        )
    }

    #[test]
    fn unsaved_beverage_omits_id_on_the_wire() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("id"));
        assert!(obj.contains_key("createdAt"));
        assert_eq!(obj["base"]["name"], "Coffee");
    }

    #[test]
    fn stored_body_parses_without_id() {
        let body = serde_json::json!({
            "base": { "id": "b1", "name": "Black Tea", "color": "#8B4513" },
            "creamer": { "id": "c1", "name": "No Cream", "color": "transparent" },
            "syrup": { "id": "s1", "name": "No Syrup", "color": "#C6C6C6" },
            "createdAt": "2025-03-01T08:30:00Z"
        });
        let bev: Beverage = serde_json::from_value(body).unwrap();
        assert!(bev.id.is_none());
        assert_eq!(bev.syrup.id, "s1");
    }

    #[test]
    fn collections_cover_every_category() {
        for category in OptionCategory::ALL {
            assert!(COLLECTIONS.contains(&category.collection()));
        }
        assert!(COLLECTIONS.contains(&BEVERAGES_COLLECTION));
    }

    #[test]
    fn component_and_describe() {
        let bev = sample().with_id("abc");
        assert_eq!(bev.id.as_deref(), Some("abc"));
        assert_eq!(bev.component(OptionCategory::Creamer).name, "Milk");
        assert_eq!(bev.describe(), "Coffee + Milk + Vanilla");
    }
}
