use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Cents;

pub type ItemCode = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Food,
    Drink,
    /// Laundry, room cleaning and other non-consumables
    Service,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Food => "Food",
            ItemCategory::Drink => "Drink",
            ItemCategory::Service => "Service",
        }
    }

    /// Food and drink are billed together on the food & beverage line.
    pub fn is_food_and_beverage(&self) -> bool {
        matches!(self, ItemCategory::Food | ItemCategory::Drink)
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(ItemCategory::Food),
            "drink" => Ok(ItemCategory::Drink),
            "service" => Ok(ItemCategory::Service),
            other => Err(format!("unknown item category '{}'", other)),
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// An entry on the hotel menu. Menu items never change once the ledger is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub code: ItemCode,
    pub name: String,
    pub price: Cents,
    pub category: ItemCategory,
}

impl MenuItem {
    pub fn new(
        code: impl Into<ItemCode>,
        name: impl Into<String>,
        price: Cents,
        category: ItemCategory,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("food".parse::<ItemCategory>(), Ok(ItemCategory::Food));
        assert_eq!("DRINK".parse::<ItemCategory>(), Ok(ItemCategory::Drink));
        assert_eq!(" Service ".parse::<ItemCategory>(), Ok(ItemCategory::Service));
        assert!("spa".parse::<ItemCategory>().is_err());
    }

    #[test]
    fn test_food_and_beverage_grouping() {
        assert!(ItemCategory::Food.is_food_and_beverage());
        assert!(ItemCategory::Drink.is_food_and_beverage());
        assert!(!ItemCategory::Service.is_food_and_beverage());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ItemCategory::Service.to_string(), "Service");
        assert_eq!(format!("{:<6}|", ItemCategory::Food), "Food  |");
    }
}
