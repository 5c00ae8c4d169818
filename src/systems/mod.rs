//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be manually registered with a [Coordinator](crate::Coordinator)
//! for it to become active during the execution of the program.

mod change_set;
mod interest;
mod system;
mod system_store;

pub use change_set::*;
pub use system::*;
pub(crate) use interest::*;
pub(crate) use system_store::*;
