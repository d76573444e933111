//! Update table

// Imports
use {
	crate::util::TableIndex,
	anyhow::Context,
	std::{fmt, mem},
};

/// Number of updates performed per table word
pub const UPDATES_PER_WORD: u64 = 4;

/// Minimum log2 of the table size.
///
/// Below this the number of updates isn't a multiple of the number of streams.
pub const MIN_LOG_SIZE: u32 = 5;

/// Maximum log2 of the table size.
///
/// Keeps all sequence offsets representable.
pub const MAX_LOG_SIZE: u32 = 48;

/// Table of `2^k` words, updated by xor-ing sequence values into it.
pub struct Table {
	/// Words
	words: Vec<u64>,

	/// Log2 of the number of words
	log_size: u32,
}

impl Table {
	/// Allocates a table of `2^log_size` words, with each word set to its own index.
	///
	/// # Errors
	/// Returns an error if `log_size` is out of range, or if the table couldn't be allocated.
	pub fn new(log_size: u32) -> Result<Self, anyhow::Error> {
		anyhow::ensure!(
			(MIN_LOG_SIZE..=MAX_LOG_SIZE).contains(&log_size),
			"Table size 2 ^ {log_size} must be between 2 ^ {MIN_LOG_SIZE} and 2 ^ {MAX_LOG_SIZE}"
		);
		let size = usize::try_from(1u64 << log_size).context("Table size doesn't fit in the address space")?;

		let mut words = Vec::new();
		words.try_reserve_exact(size).with_context(|| {
			format!(
				"Unable to allocate {size} words ({} bytes)",
				size.saturating_mul(mem::size_of::<u64>())
			)
		})?;
		words.extend(0..size as u64);
		tracing::debug!(log_size, size, "Allocated table");

		Ok(Self { words, log_size })
	}

	/// Returns the log2 of the number of words
	#[must_use]
	pub const fn log_size(&self) -> u32 {
		self.log_size
	}

	/// Returns the number of words
	#[must_use]
	pub const fn size(&self) -> u64 {
		1 << self.log_size
	}

	/// Returns the index mask
	#[must_use]
	pub const fn mask(&self) -> u64 {
		self.size() - 1
	}

	/// Returns the number of updates a full pass over this table performs
	#[must_use]
	pub const fn num_updates(&self) -> u64 {
		UPDATES_PER_WORD * self.size()
	}

	/// Updates the word addressed by `ran` by xor-ing `ran` into it
	#[inline(always)]
	pub fn xor(&mut self, ran: u64) {
		let idx = ran.table_index(self.mask());
		self.words[idx] ^= ran;
	}

	/// Returns all words
	#[must_use]
	pub fn words(&self) -> &[u64] {
		&self.words
	}

	/// Returns the number of words that don't hold their own index
	#[must_use]
	pub fn mismatches(&self) -> u64 {
		self.words
			.iter()
			.zip(0..)
			.filter(|&(&word, idx)| word != idx)
			.count() as u64
	}
}

impl fmt::Debug for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Note: We don't print the words, as there may be billions of them
		f.debug_struct("Table")
			.field("log_size", &self.log_size)
			.field("size", &self.size())
			.finish_non_exhaustive()
	}
}
