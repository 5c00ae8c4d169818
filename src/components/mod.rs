//! [Components](Component) are the pieces of state attached to [Entities](crate::entities::Entity).
//!
//! The set of components is closed: every variant is declared once in this module and addressed
//! through its [ComponentKind] tag, so stores are indexed by tag rather than by runtime type lookup.

mod component_macros;
mod component_set;
mod component_store;
mod component_types;

pub use component_set::*;
pub use component_store::*;
pub use component_types::*;
