use serde::{Deserialize, Serialize};

use super::Cents;

/// Room numbers are labels ("101", "2B"), not arithmetic values.
pub type RoomNumber = String;

/// A room in the hotel's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    /// Room class, e.g. "Standard", "Deluxe", "Suite"
    pub room_type: String,
    /// Price per night in cents (always positive)
    pub nightly_rate: Cents,
    /// False while an active booking holds the room
    pub available: bool,
}

impl Room {
    pub fn new(
        number: impl Into<RoomNumber>,
        room_type: impl Into<String>,
        nightly_rate: Cents,
    ) -> Self {
        Self {
            number: number.into(),
            room_type: room_type.into(),
            nightly_rate,
            available: true,
        }
    }

    /// Room charge for a stay of `nights` nights, `None` on overflow.
    pub fn charge_for(&self, nights: u32) -> Option<Cents> {
        self.nightly_rate.checked_mul(Cents::from(nights))
    }

    pub fn is_type(&self, room_type: &str) -> bool {
        self.room_type == room_type
    }
}
