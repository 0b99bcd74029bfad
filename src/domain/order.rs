use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, ItemCode};

pub type OrderId = String;

/// A menu item charged to a booking. Orders are immutable once placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub booking_id: BookingId,
    pub item_code: ItemCode,
    pub quantity: u32,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: OrderId,
        booking_id: BookingId,
        item_code: ItemCode,
        quantity: u32,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            booking_id,
            item_code,
            quantity,
            placed_at,
        }
    }
}
