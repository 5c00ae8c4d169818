use std::fmt;

/// A unique handle to an `Entity`.
///
/// Handles are issued from a monotonically increasing counter and are never reused,
/// so a handle to a destroyed entity can never alias a newer one.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) id: u64,
}

impl Entity {
	#[inline(always)]
	pub const fn id(&self) -> u64 {
		self.id
	}
}

impl nohash_hasher::IsEnabled for Entity {}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "entity #{}", self.id)
	}
}
