mod common;

use anyhow::Result;
use common::test_ledger;
use frontdesk::application::PropertyLedger;
use frontdesk::cli::Session;

/// Run a scripted session and return everything it printed.
fn run_script(ledger: &mut PropertyLedger, script: &str) -> Result<String> {
    let mut output = Vec::new();
    Session::new(ledger, script.as_bytes(), &mut output).run()?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_full_stay_through_console() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();
    let script = "\
1
Alice
555-0100
3
G1
101
2
4
B1
F1
2
4
B1
S1
1
5
B1
7
BL1
0
";

    let output = run_script(&mut ledger, script)?;

    assert!(output.contains("Guest registered with ID: G1"));
    assert!(output.contains("Check-in successful! Booking ID: B1"));
    assert!(output.contains("Order placed successfully! Order ID: O1"));
    assert!(output.contains("Order placed successfully! Order ID: O2"));
    assert!(output.contains("Checked out. Bill ID: BL1"));
    assert!(output.contains("Room Charges: $200.00"));
    assert!(output.contains("Food & Beverage: $30.00"));
    assert!(output.contains("Services: $25.00"));
    assert!(output.contains("Total: $255.00"));
    assert!(output.contains("Payment successful! Thank you for staying with us."));
    assert!(output.ends_with("Goodbye.\n"));

    assert!(ledger.bill("BL1").unwrap().paid);
    assert!(ledger.room("101").unwrap().available);
    Ok(())
}

#[test]
fn test_errors_are_reported_and_session_continues() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();
    let script = "\
3
G404
101
1
6
BL404
7
BL404
quit
";

    let output = run_script(&mut ledger, script)?;

    assert!(output.contains("Error: Guest not found: G404"));
    assert!(output.contains("Error: Bill not found: BL404"));
    assert!(output.contains("Goodbye."));
    assert!(ledger.bookings().is_empty());
    Ok(())
}

#[test]
fn test_malformed_number_reprompts() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();
    let guest = ledger.register_guest("Alice", "555-0100");
    let script = format!("3\n{}\n201\ntwo\n-1\n2\n0\n", guest);

    let output = run_script(&mut ledger, &script)?;

    assert_eq!(output.matches("Please enter a whole number.").count(), 2);
    assert!(output.contains("Check-in successful!"));
    assert_eq!(ledger.active_bookings()[0].nights, 2);
    Ok(())
}

#[test]
fn test_room_listing_and_filter() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();

    let output = run_script(&mut ledger, "2\nSuite\n2\n\n0\n")?;

    assert!(output.contains("Room 301: Suite - $300.00/night"));
    assert!(output.contains("Room 101: Standard - $100.00/night"));
    assert_eq!(output.matches("Room 301:").count(), 2);
    assert_eq!(output.matches("Room 101:").count(), 1);
    Ok(())
}

#[test]
fn test_menu_and_bookings_views() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();
    let guest = ledger.register_guest("Dora", "555-0199");
    ledger.check_in(&guest, "202", 5)?;

    let output = run_script(&mut ledger, "menu\nbookings\n0\n")?;

    assert!(output.contains("===== MENU ====="));
    assert!(output.contains("Room Cleaning"));
    assert!(output.contains("$15.00"));
    assert!(output.contains("Dora"));
    assert!(output.contains("2024-03-15 14:00"));
    Ok(())
}

#[test]
fn test_paying_twice_reports_already_paid() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();
    let guest = ledger.register_guest("Alice", "555-0100");
    let booking = ledger.check_in(&guest, "101", 1)?;
    let bill = ledger.check_out(&booking)?;

    let output = run_script(&mut ledger, &format!("7\n{bill}\n7\n{bill}\n0\n"))?;

    assert!(output.contains("Payment successful!"));
    assert!(output.contains(&format!("Bill {bill} was already paid.")));
    Ok(())
}

#[test]
fn test_end_of_input_ends_session() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();

    // Input runs out in the middle of registering a guest
    let output = run_script(&mut ledger, "1\nAlice\n")?;

    assert!(output.ends_with("Goodbye.\n"));
    assert!(ledger.guests().is_empty());
    Ok(())
}

#[test]
fn test_unknown_action() -> Result<()> {
    let (mut ledger, _clock) = test_ledger();

    let output = run_script(&mut ledger, "dance\n0\n")?;

    assert!(output.contains("Unknown action 'dance'"));
    Ok(())
}
