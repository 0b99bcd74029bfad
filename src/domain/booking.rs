use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{GuestId, RoomNumber};

pub type BookingId = String;

/// A guest's stay in one room.
/// A booking starts active and is closed exactly once, at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub guest_id: GuestId,
    pub room_number: RoomNumber,
    pub check_in: DateTime<Utc>,
    /// Planned departure: check-in plus `nights` days
    pub check_out: DateTime<Utc>,
    pub nights: u32,
    pub active: bool,
}

impl Booking {
    /// `None` when the departure date falls outside the representable range.
    pub fn new(
        id: BookingId,
        guest_id: GuestId,
        room_number: RoomNumber,
        check_in: DateTime<Utc>,
        nights: u32,
    ) -> Option<Self> {
        let check_out = check_in.checked_add_signed(Duration::days(i64::from(nights)))?;

        Some(Self {
            id,
            guest_id,
            room_number,
            check_in,
            check_out,
            nights,
            active: true,
        })
    }

    pub fn close(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_check_out_is_check_in_plus_nights() {
        let check_in = Utc.with_ymd_and_hms(2024, 2, 27, 14, 30, 0).unwrap();
        let booking = Booking::new("B1".into(), "G1".into(), "101".into(), check_in, 3).unwrap();

        assert_eq!(
            booking.check_out,
            Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap()
        );
        assert!(booking.active);
    }

    #[test]
    fn test_close_deactivates() {
        let mut booking =
            Booking::new("B1".into(), "G1".into(), "101".into(), Utc::now(), 1).unwrap();
        booking.close();
        assert!(!booking.active);
    }

    #[test]
    fn test_departure_past_calendar_range() {
        let check_in = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
        let booking = Booking::new("B1".into(), "G1".into(), "101".into(), check_in, u32::MAX);
        assert!(booking.is_none());
    }
}
