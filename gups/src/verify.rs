//! Verification

// Imports
use crate::{rng::Stream, table::Table};

/// Default error tolerance, as a fraction of the table size
pub const DEFAULT_ERROR_TOLERANCE: f64 = 0.01;

/// Verification result
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Verification {
	/// Number of words that didn't return to their index
	pub errors: u64,

	/// Number of words checked
	pub locations: u64,

	/// Whether `errors` is within the tolerance
	pub passed: bool,
}

/// Verifies an updated table.
///
/// Replays every update with a single serial stream, which undoes them,
/// then counts words that don't hold their own index. At most `tolerance`
/// of the words may be wrong for the verification to pass.
pub fn verify(table: &mut Table, tolerance: f64) -> Verification {
	for ran in Stream::new().take(table.num_updates() as usize) {
		table.xor(ran);
	}

	let errors = table.mismatches();
	let locations = table.size();
	let passed = errors as f64 <= tolerance * locations as f64;
	tracing::debug!(errors, locations, passed, "Verified table");

	Verification {
		errors,
		locations,
		passed,
	}
}
