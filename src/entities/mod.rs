//! [Entities](Entity) represent the individual agents of the simulation.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.

mod entity;
mod entity_registry;
mod entity_store;

pub use entity::*;
pub use entity_registry::*;
pub use entity_store::*;
