// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use frontdesk::application::{FixedClock, PropertyLedger, SequentialIds};
use frontdesk::domain::Catalog;

/// Helper to parse "YYYY-MM-DD HH:MM" into DateTime<Utc>
pub fn at(datetime: &str) -> DateTime<Utc> {
    let naive = chrono::NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M").unwrap();
    Utc.from_utc_datetime(&naive)
}

/// Helper to create a ledger over the standard catalog with a fixed clock and
/// predictable ids (G1, B1, O1, BL1, ...). The returned clock controls the ledger's time.
pub fn test_ledger() -> (PropertyLedger, FixedClock) {
    let clock = FixedClock::new(at("2024-03-10 14:00"));
    let ledger = PropertyLedger::new(Catalog::standard())
        .with_clock(clock.clone())
        .with_id_generator(SequentialIds::new());
    (ledger, clock)
}

/// Test fixture: a guest checked into a room
pub struct Stay {
    pub guest_id: String,
    pub booking_id: String,
}

impl Stay {
    pub fn start(ledger: &mut PropertyLedger, name: &str, room: &str, nights: u32) -> Self {
        let guest_id = ledger.register_guest(name, "555-0100");
        let booking_id = ledger.check_in(&guest_id, room, nights).unwrap();
        Self {
            guest_id,
            booking_id,
        }
    }
}
