//! Roster core: wire records and the pure prepare step.
mod item;
mod snapshot;
mod transform;

pub use item::{Item, RosterRow};
pub use snapshot::{RosterSnapshot, Version};
pub use transform::prepare_roster;
