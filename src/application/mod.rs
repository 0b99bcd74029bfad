// Application layer - the property ledger and the capabilities it is built with.
// Clients (console session, export, tests) go through PropertyLedger only.

pub mod clock;
pub mod error;
pub mod ids;
pub mod service;

pub use clock::*;
pub use error::*;
pub use ids::*;
pub use service::*;
