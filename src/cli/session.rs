use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::application::PropertyLedger;
use crate::io::Exporter;

use super::render::{write_active_bookings, write_available_rooms, write_bill, write_menu};

/// Whether the session keeps prompting after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive front-desk session. Reads one answer per line from `input`
/// and writes prompts and results to `output`. End of input ends the session.
pub struct Session<'a, R, W> {
    ledger: &'a mut PropertyLedger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ledger: &'a mut PropertyLedger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "===== HOTEL MANAGEMENT SYSTEM =====")?;

        loop {
            self.write_actions()?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };

            let flow = match choice.to_lowercase().as_str() {
                "1" | "register" => self.register_guest()?,
                "2" | "rooms" => self.show_available_rooms()?,
                "3" | "checkin" => self.check_in()?,
                "4" | "order" => self.place_order()?,
                "5" | "checkout" => self.check_out()?,
                "6" | "bill" => self.show_bill()?,
                "7" | "pay" => self.pay_bill()?,
                "8" | "menu" => {
                    write_menu(self.ledger, &mut self.output)?;
                    Flow::Continue
                }
                "9" | "bookings" => {
                    write_active_bookings(self.ledger, &mut self.output)?;
                    Flow::Continue
                }
                "10" | "export" => self.export()?,
                "0" | "q" | "quit" | "exit" => Flow::Exit,
                "" => Flow::Continue,
                other => {
                    writeln!(self.output, "Unknown action '{}'", other)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn write_actions(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, " 1) Register guest     2) Available rooms")?;
        writeln!(self.output, " 3) Check in           4) Place order")?;
        writeln!(self.output, " 5) Check out          6) Show bill")?;
        writeln!(self.output, " 7) Pay bill           8) Show menu")?;
        writeln!(self.output, " 9) Active bookings   10) Export")?;
        writeln!(self.output, " 0) Quit")?;
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer parses as a `T`.
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    fn register_guest(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter guest name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Enter guest phone: ")? else {
            return Ok(Flow::Exit);
        };

        let guest_id = self.ledger.register_guest(name, phone);
        writeln!(self.output, "Guest registered with ID: {}", guest_id)?;
        Ok(Flow::Continue)
    }

    fn show_available_rooms(&mut self) -> Result<Flow> {
        let types = self.ledger.room_types().join(", ");
        let Some(room_type) = self.prompt(&format!("Room type ({}; blank for any): ", types))?
        else {
            return Ok(Flow::Exit);
        };

        let filter = Some(room_type.as_str()).filter(|t| !t.is_empty());
        write_available_rooms(self.ledger, filter, &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn check_in(&mut self) -> Result<Flow> {
        let Some(guest_id) = self.prompt("Enter guest ID: ")? else {
            return Ok(Flow::Exit);
        };
        write_available_rooms(self.ledger, None, &mut self.output)?;
        let Some(room_number) = self.prompt("Enter room number to book: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(nights) = self.prompt_number::<u32>("Enter number of days to stay: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.check_in(&guest_id, &room_number, nights) {
            Ok(booking_id) => writeln!(
                self.output,
                "Check-in successful! Booking ID: {}",
                booking_id
            )?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn place_order(&mut self) -> Result<Flow> {
        let Some(booking_id) = self.prompt("Enter booking ID: ")? else {
            return Ok(Flow::Exit);
        };
        write_menu(self.ledger, &mut self.output)?;
        let Some(item_code) = self.prompt("Enter item ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt_number::<u32>("Enter quantity: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.place_order(&booking_id, &item_code, quantity) {
            Ok(order_id) => writeln!(
                self.output,
                "Order placed successfully! Order ID: {}",
                order_id
            )?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_out(&mut self) -> Result<Flow> {
        let Some(booking_id) = self.prompt("Enter booking ID: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.check_out(&booking_id) {
            Ok(bill_id) => {
                writeln!(self.output, "Checked out. Bill ID: {}", bill_id)?;
                if let Some(details) = self.ledger.get_bill_details(&bill_id) {
                    write_bill(&details, &mut self.output)?;
                }
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_bill(&mut self) -> Result<Flow> {
        let Some(bill_id) = self.prompt("Enter bill ID: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.get_bill_details(&bill_id) {
            Some(details) => write_bill(&details, &mut self.output)?,
            None => writeln!(self.output, "Error: Bill not found: {}", bill_id)?,
        }
        Ok(Flow::Continue)
    }

    fn pay_bill(&mut self) -> Result<Flow> {
        let Some(bill_id) = self.prompt("Enter bill ID: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.pay_bill(&bill_id) {
            Ok(receipt) if receipt.already_paid => {
                writeln!(self.output, "Bill {} was already paid.", receipt.bill_id)?
            }
            Ok(_) => writeln!(
                self.output,
                "Payment successful! Thank you for staying with us."
            )?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let Some(kind) = self.prompt("Export what? (bills/full): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(path) = self.prompt("Output file: ")? else {
            return Ok(Flow::Exit);
        };

        match export_to_file(self.ledger, &kind, &path) {
            Ok(summary) => writeln!(self.output, "{}", summary)?,
            Err(e) => writeln!(self.output, "Error: {:#}", e)?,
        }
        Ok(Flow::Continue)
    }
}

fn export_to_file(ledger: &PropertyLedger, kind: &str, path: &str) -> Result<String> {
    let exporter = Exporter::new(ledger);

    match kind {
        "bills" => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let count = exporter.export_bills_csv(file)?;
            Ok(format!("Exported {} bills to {}", count, path))
        }
        "full" => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let snapshot = exporter.export_snapshot_json(file)?;
            Ok(format!(
                "Exported {} guests, {} bookings, {} orders, {} bills to {}",
                snapshot.guests.len(),
                snapshot.bookings.len(),
                snapshot.orders.len(),
                snapshot.bills.len(),
                path
            ))
        }
        _ => anyhow::bail!("Invalid export type '{}'. Valid types: bills, full", kind),
    }
}
