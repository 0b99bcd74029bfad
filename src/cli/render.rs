use std::io::{self, Write};

use crate::application::{BillDetails, PropertyLedger, BILL_DATE_FORMAT};
use crate::domain::{format_price, Booking};

pub fn write_menu<W: Write>(ledger: &PropertyLedger, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== MENU =====")?;
    writeln!(out, "{:<5} {:<15} {:<10} {:<10}", "ID", "Item", "Price", "Category")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for item in ledger.menu() {
        writeln!(
            out,
            "{:<5} {:<15} {:<10} {:<10}",
            item.code,
            item.name,
            format_price(item.price),
            item.category
        )?;
    }
    Ok(())
}

pub fn write_available_rooms<W: Write>(
    ledger: &PropertyLedger,
    room_type: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    let available = ledger.available_rooms(room_type);
    if available.is_empty() {
        return writeln!(out, "No rooms available.");
    }

    writeln!(out, "Available Rooms:")?;
    for number in &available {
        if let Some(room) = ledger.room(number) {
            writeln!(
                out,
                "Room {}: {} - {}/night",
                room.number,
                room.room_type,
                format_price(room.nightly_rate)
            )?;
        }
    }
    Ok(())
}

pub fn write_bill<W: Write>(bill: &BillDetails, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== BILL =====")?;
    writeln!(out, "Bill ID: {}", bill.bill_id)?;
    writeln!(out, "Guest: {}", bill.guest_name)?;
    writeln!(out, "Room: {}", bill.room_number)?;
    writeln!(out, "Date: {}", bill.date)?;
    writeln!(out, "Room Charges: {}", format_price(bill.room_charge))?;
    writeln!(out, "Food & Beverage: {}", format_price(bill.food_charge))?;
    writeln!(out, "Services: {}", format_price(bill.service_charge))?;
    writeln!(out, "Total: {}", format_price(bill.total))?;
    writeln!(out, "Status: {}", if bill.paid { "Paid" } else { "Unpaid" })
}

pub fn write_active_bookings<W: Write>(ledger: &PropertyLedger, out: &mut W) -> io::Result<()> {
    let bookings: Vec<&Booking> = ledger.active_bookings();
    if bookings.is_empty() {
        return writeln!(out, "No active bookings.");
    }

    writeln!(
        out,
        "{:<10} {:<20} {:<6} {:<7} {:<16}",
        "BOOKING", "GUEST", "ROOM", "NIGHTS", "CHECK-OUT"
    )?;
    writeln!(out, "{}", "-".repeat(63))?;
    for booking in bookings {
        let guest_name = ledger
            .guest(&booking.guest_id)
            .map(|g| g.name.as_str())
            .unwrap_or("?");
        writeln!(
            out,
            "{:<10} {:<20} {:<6} {:<7} {:<16}",
            booking.id,
            guest_name,
            booking.room_number,
            booking.nights,
            booking.check_out.format(BILL_DATE_FORMAT).to_string()
        )?;
    }
    Ok(())
}
