// Input and output at the edges of a session: the catalog a ledger is
// built from, and exports of what happened during the session.

pub mod catalog;
pub mod export;

pub use catalog::*;
pub use export::*;
