//! Utilities

/// Extension trait to index power-of-two tables with a sequence value
#[extend::ext(name = TableIndex)]
pub impl u64 {
	/// Returns the index this value addresses in a table with index mask `mask`.
	///
	/// For a table of `2^k` words, `mask` is `2^k - 1` and this equals
	/// `self % 2^k`.
	#[inline(always)]
	fn table_index(self, mask: u64) -> usize {
		(self & mask) as usize
	}
}
