use std::collections::HashSet;

use thiserror::Error;

use super::{Cents, ItemCategory, MenuItem, Room};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate room number: {0}")]
    DuplicateRoom(String),

    #[error("Duplicate menu item code: {0}")]
    DuplicateItem(String),

    #[error("Room {room} must have a positive nightly rate, got {rate}")]
    NonPositiveRate { room: String, rate: Cents },

    #[error("Menu item {code} has a negative price: {price}")]
    NegativePrice { code: String, price: Cents },

    #[error("Invalid amount '{value}' for {field}: {reason}")]
    InvalidAmount {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid category for {code}: {reason}")]
    InvalidCategory { code: String, reason: String },
}

/// The fixed room inventory and menu a ledger starts with.
/// Order is significant: listings follow catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub rooms: Vec<Room>,
    pub menu: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(rooms: Vec<Room>, menu: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let catalog = Self { rooms, menu };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The default hotel: five rooms over three classes and an eight-item menu.
    pub fn standard() -> Self {
        Self {
            rooms: vec![
                Room::new("101", "Standard", 10000),
                Room::new("102", "Standard", 10000),
                Room::new("201", "Deluxe", 20000),
                Room::new("202", "Deluxe", 20000),
                Room::new("301", "Suite", 30000),
            ],
            menu: vec![
                MenuItem::new("F1", "Burger", 1500, ItemCategory::Food),
                MenuItem::new("F2", "Pizza", 2000, ItemCategory::Food),
                MenuItem::new("F3", "Pasta", 1800, ItemCategory::Food),
                MenuItem::new("D1", "Water", 200, ItemCategory::Drink),
                MenuItem::new("D2", "Soda", 300, ItemCategory::Drink),
                MenuItem::new("D3", "Coffee", 400, ItemCategory::Drink),
                MenuItem::new("S1", "Laundry", 2500, ItemCategory::Service),
                MenuItem::new("S2", "Room Cleaning", 1500, ItemCategory::Service),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.number.as_str()) {
                return Err(CatalogError::DuplicateRoom(room.number.clone()));
            }
            if room.nightly_rate <= 0 {
                return Err(CatalogError::NonPositiveRate {
                    room: room.number.clone(),
                    rate: room.nightly_rate,
                });
            }
        }

        let mut seen = HashSet::new();
        for item in &self.menu {
            if !seen.insert(item.code.as_str()) {
                return Err(CatalogError::DuplicateItem(item.code.clone()));
            }
            if item.price < 0 {
                return Err(CatalogError::NegativePrice {
                    code: item.code.clone(),
                    price: item.price,
                });
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
