//! Table updater

// Imports
use {
	crate::{
		rng::{self, Stream},
		table::Table,
	},
	itertools::Itertools,
};

/// Number of interleaved streams
pub const STREAMS: usize = 128;

/// Returns the starting state of each stream for a table.
///
/// Stream `j` starts `j` slices into the sequence, where a slice is the
/// number of updates each stream performs.
#[must_use]
pub fn stream_starts(table: &Table) -> [u64; STREAMS] {
	let updates_per_stream = table.num_updates() / STREAMS as u64;

	let mut ran = [0u64; STREAMS];
	for (stream_idx, ran) in ran.iter_mut().enumerate() {
		// Note: The table size is bounded, so this can't overflow an `i64`.
		*ran = Stream::starting_at((updates_per_stream * stream_idx as u64) as i64).state();
	}

	ran
}

/// Performs all updates on `table`.
///
/// The streams are advanced in lockstep, each updating the table once per
/// round, so together they apply the same values as a single serial stream
/// of [`Table::num_updates`] steps.
pub fn random_access_update(table: &mut Table) {
	let updates_per_stream = table.num_updates() / STREAMS as u64;
	let mut ran = self::stream_starts(table);
	tracing::trace!(
		updates_per_stream,
		starts = %ran.iter().take(4).map(|ran| format!("{ran:#018x}")).join(", "),
		"Initialized streams"
	);

	for _ in 0..updates_per_stream {
		for ran in &mut ran {
			*ran = rng::step(*ran);
			table.xor(*ran);
		}
	}
}
