//! Clocks

// Imports
use std::time::Instant;

/// Clock used to time the update phase
pub trait Clock {
	/// Returns the current time, in seconds since some fixed origin
	fn timestamp(&mut self) -> f64;
}

/// Wall clock
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
	/// Origin
	origin: Instant,
}

impl WallClock {
	/// Creates a wall clock starting now
	#[must_use]
	pub fn new() -> Self {
		Self { origin: Instant::now() }
	}
}

impl Default for WallClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for WallClock {
	fn timestamp(&mut self) -> f64 {
		self.origin.elapsed().as_secs_f64()
	}
}
