use uuid::Uuid;

/// Which collection an identifier is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Guest,
    Booking,
    Order,
    Bill,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Guest => "G",
            IdKind::Booking => "B",
            IdKind::Order => "O",
            IdKind::Bill => "BL",
        }
    }
}

/// Produces candidate identifiers. The ledger skips candidates that are
/// already taken, so a generator only has to eventually yield fresh ones.
pub trait IdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String;
}

/// Short random ids: the first 8 hex digits of a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, _kind: IdKind) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        id
    }
}

/// Predictable ids for tests: G1, G2, B1, O1, BL1, ...
/// Each kind counts independently.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    guest: u64,
    booking: u64,
    order: u64,
    bill: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        let counter = match kind {
            IdKind::Guest => &mut self.guest,
            IdKind::Booking => &mut self.booking,
            IdKind::Order => &mut self.order,
            IdKind::Bill => &mut self.bill,
        };
        *counter += 1;
        format!("{}{}", kind.prefix(), counter)
    }
}
