use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::{
    compute_charges, Bill, BillId, Booking, BookingId, Catalog, ChargeLine, Cents, Guest, GuestId,
    ItemCode, MenuItem, Order, OrderId, Room, RoomNumber,
};

use super::{Clock, IdGenerator, IdKind, LedgerError, RandomIds, SystemClock};

/// Timestamp format used on bill details.
pub const BILL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The property ledger owns every piece of front-desk state and is the only
/// way to change it. This is the primary interface for any client (console,
/// tests, export).
pub struct PropertyLedger {
    rooms: Vec<Room>,
    room_index: HashMap<RoomNumber, usize>,
    menu: Vec<MenuItem>,
    menu_index: HashMap<ItemCode, usize>,
    guests: HashMap<GuestId, Guest>,
    bookings: HashMap<BookingId, Booking>,
    orders: HashMap<OrderId, Order>,
    orders_by_booking: HashMap<BookingId, Vec<OrderId>>,
    bills: HashMap<BillId, Bill>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

/// Read-only view of a bill joined with the guest's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillDetails {
    pub bill_id: BillId,
    pub guest_name: String,
    pub room_number: RoomNumber,
    pub room_charge: Cents,
    pub food_charge: Cents,
    pub service_charge: Cents,
    pub total: Cents,
    /// Creation time, formatted with [`BILL_DATE_FORMAT`]
    pub date: String,
    pub paid: bool,
}

/// Result of paying a bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub bill_id: BillId,
    pub amount: Cents,
    /// True when the bill had already been paid before this call
    pub already_paid: bool,
}

impl PropertyLedger {
    /// Create a ledger over the given catalog, using the system clock and random ids.
    pub fn new(catalog: Catalog) -> Self {
        let Catalog { rooms, menu } = catalog;
        let room_index = rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (room.number.clone(), i))
            .collect();
        let menu_index = menu
            .iter()
            .enumerate()
            .map(|(i, item)| (item.code.clone(), i))
            .collect();

        Self {
            rooms,
            room_index,
            menu,
            menu_index,
            guests: HashMap::new(),
            bookings: HashMap::new(),
            orders: HashMap::new(),
            orders_by_booking: HashMap::new(),
            bills: HashMap::new(),
            clock: Box::new(SystemClock),
            ids: Box::new(RandomIds),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Current time according to the ledger's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Draw ids until one is not already in use.
    fn fresh_id(&mut self, kind: IdKind) -> String {
        loop {
            let candidate = self.ids.next_id(kind);
            let taken = match kind {
                IdKind::Guest => self.guests.contains_key(&candidate),
                IdKind::Booking => self.bookings.contains_key(&candidate),
                IdKind::Order => self.orders.contains_key(&candidate),
                IdKind::Bill => self.bills.contains_key(&candidate),
            };
            if !taken {
                return candidate;
            }
            debug!(kind = ?kind, id = %candidate, "Generated id already in use, drawing again");
        }
    }

    // ========================
    // Guests
    // ========================

    /// Register a guest. Always succeeds.
    pub fn register_guest(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> GuestId {
        let id = self.fresh_id(IdKind::Guest);
        let guest = Guest::new(id.clone(), name, phone, self.clock.now());
        debug!(guest_id = %id, name = %guest.name, "Registered guest");
        self.guests.insert(id.clone(), guest);
        id
    }

    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.get(id)
    }

    /// All guests, oldest registration first.
    pub fn guests(&self) -> Vec<&Guest> {
        let mut guests: Vec<&Guest> = self.guests.values().collect();
        guests.sort_by(|a, b| a.registered_at.cmp(&b.registered_at).then(a.id.cmp(&b.id)));
        guests
    }

    // ========================
    // Rooms and menu
    // ========================

    /// Numbers of the rooms that are free, optionally only those of one class,
    /// in catalog order.
    pub fn available_rooms(&self, room_type: Option<&str>) -> Vec<RoomNumber> {
        self.rooms
            .iter()
            .filter(|room| room.available && room_type.is_none_or(|t| room.is_type(t)))
            .map(|room| room.number.clone())
            .collect()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, number: &str) -> Option<&Room> {
        self.room_index.get(number).map(|&i| &self.rooms[i])
    }

    /// Distinct room classes in the order they first appear in the catalog.
    pub fn room_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for room in &self.rooms {
            if !types.contains(&room.room_type.as_str()) {
                types.push(&room.room_type);
            }
        }
        types
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn menu_item(&self, code: &str) -> Option<&MenuItem> {
        self.menu_index.get(code).map(|&i| &self.menu[i])
    }

    // ========================
    // Stays
    // ========================

    /// Check a registered guest into a free room for `nights` nights.
    pub fn check_in(
        &mut self,
        guest_id: &str,
        room_number: &str,
        nights: u32,
    ) -> Result<BookingId, LedgerError> {
        if !self.guests.contains_key(guest_id) {
            debug!(guest_id, "Check-in refused: unknown guest");
            return Err(LedgerError::GuestNotFound(guest_id.to_string()));
        }

        let room_idx = *self.room_index.get(room_number).ok_or_else(|| {
            debug!(room = room_number, "Check-in refused: unknown room");
            LedgerError::RoomNotFound(room_number.to_string())
        })?;

        if !self.rooms[room_idx].available {
            debug!(room = room_number, "Check-in refused: room occupied");
            return Err(LedgerError::RoomUnavailable(room_number.to_string()));
        }

        if nights == 0 {
            return Err(LedgerError::InvalidStayLength(nights));
        }

        let id = self.fresh_id(IdKind::Booking);
        let booking = Booking::new(
            id.clone(),
            guest_id.to_string(),
            room_number.to_string(),
            self.clock.now(),
            nights,
        )
        .ok_or_else(|| {
            debug!(room = room_number, nights, "Check-in refused: departure out of range");
            LedgerError::InvalidStayLength(nights)
        })?;

        debug!(
            booking_id = %id,
            guest_id,
            room = room_number,
            nights,
            check_out = %booking.check_out,
            "Checked in"
        );
        self.bookings.insert(id.clone(), booking);
        self.rooms[room_idx].available = false;

        Ok(id)
    }

    /// Close an active booking, free its room and issue the bill.
    pub fn check_out(&mut self, booking_id: &str) -> Result<BillId, LedgerError> {
        let booking = self
            .bookings
            .get(booking_id)
            .ok_or_else(|| LedgerError::BookingNotFound(booking_id.to_string()))?;

        if !booking.active {
            debug!(booking_id, "Check-out refused: booking already closed");
            return Err(LedgerError::BookingAlreadyClosed(booking_id.to_string()));
        }

        let room_idx = *self
            .room_index
            .get(&booking.room_number)
            .ok_or_else(|| LedgerError::RoomNotFound(booking.room_number.clone()))?;

        let lines = self
            .orders_by_booking
            .get(booking_id)
            .into_iter()
            .flatten()
            .filter_map(|order_id| self.orders.get(order_id))
            .filter_map(|order| {
                self.menu_item(&order.item_code).map(|item| ChargeLine {
                    category: item.category,
                    unit_price: item.price,
                    quantity: order.quantity,
                })
            });
        let charges = compute_charges(&self.rooms[room_idx], booking.nights, lines)
            .ok_or_else(|| {
                debug!(booking_id, "Check-out refused: charges overflow");
                LedgerError::ChargeOverflow(booking_id.to_string())
            })?;

        let guest_id = booking.guest_id.clone();
        let room_number = booking.room_number.clone();

        let id = self.fresh_id(IdKind::Bill);
        let bill = Bill::new(
            id.clone(),
            booking_id.to_string(),
            guest_id,
            room_number,
            charges,
            self.clock.now(),
        );

        debug!(
            booking_id,
            bill_id = %id,
            room = %bill.room_number,
            total = bill.total,
            "Checked out"
        );
        self.bills.insert(id.clone(), bill);
        if let Some(booking) = self.bookings.get_mut(booking_id) {
            booking.close();
        }
        self.rooms[room_idx].available = true;

        Ok(id)
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.get(id)
    }

    /// Bookings still in progress, earliest check-in first.
    pub fn active_bookings(&self) -> Vec<&Booking> {
        let mut bookings: Vec<&Booking> = self.bookings.values().filter(|b| b.active).collect();
        bookings.sort_by(|a, b| a.check_in.cmp(&b.check_in).then(a.id.cmp(&b.id)));
        bookings
    }

    /// Every booking, earliest check-in first.
    pub fn bookings(&self) -> Vec<&Booking> {
        let mut bookings: Vec<&Booking> = self.bookings.values().collect();
        bookings.sort_by(|a, b| a.check_in.cmp(&b.check_in).then(a.id.cmp(&b.id)));
        bookings
    }

    // ========================
    // Orders
    // ========================

    /// Charge a menu item to an active booking.
    pub fn place_order(
        &mut self,
        booking_id: &str,
        item_code: &str,
        quantity: u32,
    ) -> Result<OrderId, LedgerError> {
        let booking = self
            .bookings
            .get(booking_id)
            .ok_or_else(|| LedgerError::BookingNotFound(booking_id.to_string()))?;

        if !booking.active {
            debug!(booking_id, "Order refused: booking closed");
            return Err(LedgerError::BookingNotActive(booking_id.to_string()));
        }

        if !self.menu_index.contains_key(item_code) {
            debug!(booking_id, item_code, "Order refused: unknown item");
            return Err(LedgerError::ItemNotFound(item_code.to_string()));
        }

        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity(quantity));
        }

        let id = self.fresh_id(IdKind::Order);
        let order = Order::new(
            id.clone(),
            booking_id.to_string(),
            item_code.to_string(),
            quantity,
            self.clock.now(),
        );

        debug!(order_id = %id, booking_id, item_code, quantity, "Placed order");
        self.orders.insert(id.clone(), order);
        self.orders_by_booking
            .entry(booking_id.to_string())
            .or_default()
            .push(id.clone());

        Ok(id)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Orders charged to a booking, in the order they were placed.
    pub fn orders_for_booking(&self, booking_id: &str) -> Vec<&Order> {
        self.orders_by_booking
            .get(booking_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.orders.get(id))
            .collect()
    }

    /// Every order, oldest first.
    pub fn orders(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.values().collect();
        orders.sort_by(|a, b| a.placed_at.cmp(&b.placed_at).then(a.id.cmp(&b.id)));
        orders
    }

    // ========================
    // Bills
    // ========================

    pub fn bill(&self, id: &str) -> Option<&Bill> {
        self.bills.get(id)
    }

    /// Every bill, oldest first.
    pub fn bills(&self) -> Vec<&Bill> {
        let mut bills: Vec<&Bill> = self.bills.values().collect();
        bills.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        bills
    }

    /// Bill joined with the guest's name, or `None` for an unknown bill.
    pub fn get_bill_details(&self, bill_id: &str) -> Option<BillDetails> {
        let bill = self.bills.get(bill_id)?;
        let guest_name = self
            .guests
            .get(&bill.guest_id)
            .map(|g| g.name.clone())
            .unwrap_or_default();

        Some(BillDetails {
            bill_id: bill.id.clone(),
            guest_name,
            room_number: bill.room_number.clone(),
            room_charge: bill.room_charge,
            food_charge: bill.food_charge,
            service_charge: bill.service_charge,
            total: bill.total,
            date: bill.created_at.format(BILL_DATE_FORMAT).to_string(),
            paid: bill.paid,
        })
    }

    /// Mark a bill as paid. Paying an already paid bill succeeds again.
    pub fn pay_bill(&mut self, bill_id: &str) -> Result<PaymentReceipt, LedgerError> {
        let bill = self
            .bills
            .get_mut(bill_id)
            .ok_or_else(|| LedgerError::BillNotFound(bill_id.to_string()))?;

        let already_paid = bill.paid;
        bill.paid = true;
        debug!(bill_id, total = bill.total, already_paid, "Bill paid");

        Ok(PaymentReceipt {
            bill_id: bill.id.clone(),
            amount: bill.total,
            already_paid,
        })
    }
}

impl Default for PropertyLedger {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::application::{FixedClock, SequentialIds};

    fn ledger() -> PropertyLedger {
        PropertyLedger::new(Catalog::standard())
            .with_clock(FixedClock::new(
                Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap(),
            ))
            .with_id_generator(SequentialIds::new())
    }

    /// Hands out the same id a few times before moving on.
    struct StickyIds {
        calls: u32,
    }

    impl IdGenerator for StickyIds {
        fn next_id(&mut self, _kind: IdKind) -> String {
            self.calls += 1;
            if self.calls <= 3 {
                "dup".to_string()
            } else {
                format!("id{}", self.calls)
            }
        }
    }

    #[test]
    fn test_fresh_id_skips_taken_ids() {
        let mut ledger =
            PropertyLedger::new(Catalog::standard()).with_id_generator(StickyIds { calls: 0 });

        let first = ledger.register_guest("Alice", "555-0100");
        let second = ledger.register_guest("Bob", "555-0101");

        assert_eq!(first, "dup");
        assert_eq!(second, "id4");
        assert_eq!(ledger.guests().len(), 2);
    }

    #[test]
    fn test_ids_only_need_to_be_unique_per_collection() {
        let mut ledger =
            PropertyLedger::new(Catalog::standard()).with_id_generator(StickyIds { calls: 0 });

        let guest = ledger.register_guest("Alice", "555-0100");
        let booking = ledger.check_in(&guest, "101", 1).unwrap();

        assert_eq!(guest, "dup");
        assert_eq!(booking, "dup");
    }

    #[test]
    fn test_room_and_menu_lookup() {
        let ledger = ledger();
        assert_eq!(ledger.room("201").map(|r| r.nightly_rate), Some(20000));
        assert!(ledger.room("999").is_none());
        assert_eq!(ledger.menu_item("D3").map(|i| i.name.as_str()), Some("Coffee"));
        assert_eq!(ledger.room_types(), vec!["Standard", "Deluxe", "Suite"]);
    }

    #[test]
    fn test_orders_for_booking_in_placement_order() {
        let mut ledger = ledger();
        let guest = ledger.register_guest("Alice", "555-0100");
        let booking = ledger.check_in(&guest, "101", 1).unwrap();
        ledger.place_order(&booking, "D1", 1).unwrap();
        ledger.place_order(&booking, "F2", 1).unwrap();

        let codes: Vec<&str> = ledger
            .orders_for_booking(&booking)
            .iter()
            .map(|o| o.item_code.as_str())
            .collect();
        assert_eq!(codes, vec!["D1", "F2"]);
        assert!(ledger.orders_for_booking("nope").is_empty());
    }

    #[test]
    fn test_bill_details_uses_bill_date_format() {
        let mut ledger = ledger();
        let guest = ledger.register_guest("Alice", "555-0100");
        let booking = ledger.check_in(&guest, "301", 1).unwrap();
        let bill = ledger.check_out(&booking).unwrap();

        let details = ledger.get_bill_details(&bill).unwrap();
        assert_eq!(details.date, "2024-06-01 15:00");
        assert_eq!(details.guest_name, "Alice");
        assert_eq!(details.total, 30000);
    }
}
