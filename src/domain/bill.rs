use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, Cents, GuestId, ItemCategory, Room, RoomNumber};

pub type BillId = String;

/// Charge breakdown computed at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charges {
    pub room: Cents,
    /// Food and drink orders
    pub food: Cents,
    /// Every other order category
    pub service: Cents,
    pub total: Cents,
}

/// One billable order line: what category it falls in, its unit price and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeLine {
    pub category: ItemCategory,
    pub unit_price: Cents,
    pub quantity: u32,
}

impl ChargeLine {
    /// `None` on overflow.
    pub fn amount(&self) -> Option<Cents> {
        self.unit_price.checked_mul(Cents::from(self.quantity))
    }
}

/// Compute the charges for a stay.
/// Room charge = nightly rate x nights; order lines are split into
/// food & beverage and services.
/// Returns `None` if any sum leaves the `Cents` range.
pub fn compute_charges(
    room: &Room,
    nights: u32,
    lines: impl IntoIterator<Item = ChargeLine>,
) -> Option<Charges> {
    let mut charges = Charges {
        room: room.charge_for(nights)?,
        ..Charges::default()
    };

    for line in lines {
        let amount = line.amount()?;
        if line.category.is_food_and_beverage() {
            charges.food = charges.food.checked_add(amount)?;
        } else {
            charges.service = charges.service.checked_add(amount)?;
        }
    }

    charges.total = charges
        .room
        .checked_add(charges.food)?
        .checked_add(charges.service)?;
    Some(charges)
}

/// The bill produced when a booking is checked out.
/// Charges are frozen at creation; only `paid` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_number: RoomNumber,
    pub room_charge: Cents,
    pub food_charge: Cents,
    pub service_charge: Cents,
    pub total: Cents,
    pub created_at: DateTime<Utc>,
    pub paid: bool,
}

impl Bill {
    pub fn new(
        id: BillId,
        booking_id: BookingId,
        guest_id: GuestId,
        room_number: RoomNumber,
        charges: Charges,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            booking_id,
            guest_id,
            room_number,
            room_charge: charges.room,
            food_charge: charges.food,
            service_charge: charges.service,
            total: charges.total,
            created_at,
            paid: false,
        }
    }
}
