mod bill;
mod booking;
mod catalog;
mod guest;
mod menu;
mod money;
mod order;
mod room;

pub use bill::*;
pub use booking::*;
pub use catalog::*;
pub use guest::*;
pub use menu::*;
pub use money::*;
pub use order::*;
pub use room::*;
