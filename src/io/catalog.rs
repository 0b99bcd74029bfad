use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::{parse_cents, Catalog, CatalogError, ItemCategory, MenuItem, Room};

/// On-disk catalog layout. Amounts are decimal strings ("100", "15.50").
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub rooms: Vec<RoomEntry>,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomEntry {
    pub number: String,
    pub room_type: String,
    pub nightly_rate: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuEntry {
    pub code: String,
    pub name: String,
    pub price: String,
    pub category: String,
}

impl CatalogFile {
    /// Convert into a validated catalog, keeping file order.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut rooms = Vec::with_capacity(self.rooms.len());
        for entry in self.rooms {
            let rate = parse_cents(&entry.nightly_rate).map_err(|e| CatalogError::InvalidAmount {
                field: format!("room {} nightly_rate", entry.number),
                value: entry.nightly_rate.clone(),
                reason: e.to_string(),
            })?;
            rooms.push(Room::new(entry.number, entry.room_type, rate));
        }

        let mut menu = Vec::with_capacity(self.menu.len());
        for entry in self.menu {
            let price = parse_cents(&entry.price).map_err(|e| CatalogError::InvalidAmount {
                field: format!("item {} price", entry.code),
                value: entry.price.clone(),
                reason: e.to_string(),
            })?;
            let category: ItemCategory =
                entry
                    .category
                    .parse()
                    .map_err(|reason| CatalogError::InvalidCategory {
                        code: entry.code.clone(),
                        reason,
                    })?;
            menu.push(MenuItem::new(entry.code, entry.name, price, category));
        }

        Catalog::new(rooms, menu)
    }
}

/// Read a JSON catalog document.
pub fn load_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let file: CatalogFile =
        serde_json::from_reader(reader).context("Catalog is not valid JSON")?;
    Ok(file.into_catalog()?)
}

/// Read a JSON catalog from a path.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    load_catalog(BufReader::new(file))
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "rooms": [
            { "number": "1A", "room_type": "Single", "nightly_rate": "80" },
            { "number": "1B", "room_type": "Double", "nightly_rate": "120.50" }
        ],
        "menu": [
            { "code": "T1", "name": "Tea", "price": "2.5", "category": "drink" },
            { "code": "P1", "name": "Parking", "price": "10", "category": "Service" }
        ]
    }"#;

    #[test]
    fn test_load_catalog_keeps_order_and_parses_amounts() {
        let catalog = load_catalog(SAMPLE.as_bytes()).unwrap();

        assert_eq!(catalog.rooms[0].number, "1A");
        assert_eq!(catalog.rooms[1].nightly_rate, 12050);
        assert_eq!(catalog.menu[0].price, 250);
        assert_eq!(catalog.menu[0].category, ItemCategory::Drink);
        assert_eq!(catalog.menu[1].category, ItemCategory::Service);
    }

    #[test]
    fn test_menu_is_optional() {
        let catalog = load_catalog(
            r#"{"rooms": [{"number": "7", "room_type": "Cabin", "nightly_rate": "55"}]}"#
                .as_bytes(),
        )
        .unwrap();
        assert!(catalog.menu.is_empty());
    }

    #[test]
    fn test_bad_amount_is_reported() {
        let err = load_catalog(
            r#"{"rooms": [{"number": "7", "room_type": "Cabin", "nightly_rate": "cheap"}]}"#
                .as_bytes(),
        )
        .unwrap_err();
        let catalog_err = err.downcast_ref::<CatalogError>().unwrap();
        assert!(matches!(catalog_err, CatalogError::InvalidAmount { .. }));
    }

    #[test]
    fn test_unknown_category_is_reported() {
        let err = load_catalog(
            r#"{"rooms": [], "menu": [{"code": "X", "name": "Spa", "price": "40", "category": "wellness"}]}"#
                .as_bytes(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid category for X"));
    }

    #[test]
    fn test_duplicate_room_is_reported() {
        let err = load_catalog(
            r#"{"rooms": [
                {"number": "7", "room_type": "Cabin", "nightly_rate": "55"},
                {"number": "7", "room_type": "Cabin", "nightly_rate": "60"}
            ]}"#
            .as_bytes(),
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::DuplicateRoom("7".into()))
        );
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(load_catalog("not json".as_bytes()).is_err());
    }
}
