use thiserror::Error;

use crate::domain::{BillId, BookingId, GuestId, ItemCode, RoomNumber};

/// Reasons a ledger operation is refused. A refused operation changes nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Guest not found: {0}")]
    GuestNotFound(GuestId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    #[error("Room not available: {0}")]
    RoomUnavailable(RoomNumber),

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Booking already closed: {0}")]
    BookingAlreadyClosed(BookingId),

    #[error("Booking is not active: {0}")]
    BookingNotActive(BookingId),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemCode),

    #[error("Bill not found: {0}")]
    BillNotFound(BillId),

    #[error("Invalid stay length: {0} nights")]
    InvalidStayLength(u32),

    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    #[error("Charges for booking {0} exceed the largest representable amount")]
    ChargeOverflow(BookingId),
}
