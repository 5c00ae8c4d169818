use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::time::{Duration, Instant};
use std::sync::Arc;

lazy_static! {
	static ref EPOCH: Instant = Instant::now();
}

/// A monotonic time source, measured from an arbitrary fixed epoch.
pub trait Clock {
	fn now(&self) -> Duration;

	#[inline(always)]
	fn seconds(&self) -> f32 {
		self.now().as_secs_f32()
	}
}

/// Real time elapsed since the first time any [SystemClock] was read.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Duration {
		EPOCH.elapsed()
	}
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a driver can keep one handle and give another to its systems.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
	now: Arc<Mutex<Duration>>,
}

impl ManualClock {
	pub fn new(start: Duration) -> Self {
		Self {
			now: Arc::new(Mutex::new(start)),
		}
	}

	pub fn set(&self, now: Duration) {
		*self.now.lock() = now;
	}

	pub fn advance(&self, by: Duration) {
		*self.now.lock() += by;
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Duration {
		*self.now.lock()
	}
}
