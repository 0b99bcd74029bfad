use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::PropertyLedger;
use crate::domain::{format_cents, Bill, Booking, Guest, MenuItem, Order, Room};

/// Everything the ledger holds at one moment, for a JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub rooms: Vec<Room>,
    pub menu: Vec<MenuItem>,
    pub guests: Vec<Guest>,
    pub bookings: Vec<Booking>,
    pub orders: Vec<Order>,
    pub bills: Vec<Bill>,
}

/// Writes ledger contents out so a session's results outlive the process.
pub struct Exporter<'a> {
    ledger: &'a PropertyLedger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a PropertyLedger) -> Self {
        Self { ledger }
    }

    /// Export bills to CSV format, one row per bill, oldest first
    pub fn export_bills_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "bill_id",
            "booking_id",
            "guest_name",
            "room_number",
            "room_charge",
            "food_charge",
            "service_charge",
            "total",
            "created_at",
            "paid",
        ])?;

        let mut count = 0;
        for bill in self.ledger.bills() {
            let guest_name = self
                .ledger
                .guest(&bill.guest_id)
                .map(|g| g.name.clone())
                .unwrap_or_default();

            csv_writer.write_record([
                bill.id.clone(),
                bill.booking_id.clone(),
                guest_name,
                bill.room_number.clone(),
                format_cents(bill.room_charge),
                format_cents(bill.food_charge),
                format_cents(bill.service_charge),
                format_cents(bill.total),
                bill.created_at.to_rfc3339(),
                if bill.paid { "yes" } else { "no" }.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the whole ledger as a pretty-printed JSON snapshot
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: self.ledger.now(),
            rooms: self.ledger.rooms().to_vec(),
            menu: self.ledger.menu().to_vec(),
            guests: self.ledger.guests().into_iter().cloned().collect(),
            bookings: self.ledger.bookings().into_iter().cloned().collect(),
            orders: self.ledger.orders().into_iter().cloned().collect(),
            bills: self.ledger.bills().into_iter().cloned().collect(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
