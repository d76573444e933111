//! Pseudo-random sequence
//!
//! The sequence is the GF(2) linear recurrence `x_{n+1} = x * x_n mod p(x)`,
//! with `p(x) = x^64 + x^2 + x + 1`, starting at `x_0 = 1`.
//!
//! Each state is a 64-bit vector of polynomial coefficients, so advancing
//! the sequence is a single shift with a conditional fold of [`POLY`].

/// Low coefficients of the feedback polynomial
pub const POLY: u64 = 0x0000_0000_0000_0007;

/// Period of the sequence
pub const PERIOD: i64 = 1_317_624_576_693_539_401;

/// Advances `ran` by a single step
#[inline(always)]
#[must_use]
pub const fn step(ran: u64) -> u64 {
	(ran << 1) ^ if (ran as i64) < 0 { POLY } else { 0 }
}

/// Returns the `n`-th state of the sequence, without generating any of the previous ones.
///
/// `n` is taken modulo [`PERIOD`], so it may be negative.
#[must_use]
pub fn starts(n: i64) -> u64 {
	let n = n.rem_euclid(PERIOD);
	if n == 0 {
		return 0x1;
	}

	// Note: `squares[i]` is `x^(2i)`, so squaring a state is the
	//       sum of the entries for each of its set bits.
	let mut squares = [0u64; 64];
	let mut temp = 0x1;
	for square in &mut squares {
		*square = temp;
		temp = self::step(self::step(temp));
	}

	// Go through all bits of `n` after the most significant one, squaring
	// the state each time and stepping it once more for each set bit.
	let mut bit = 63 - n.leading_zeros();
	let mut ran = 0x2;
	while bit > 0 {
		ran = squares
			.iter()
			.enumerate()
			.filter(|&(idx, _)| (ran >> idx) & 1 != 0)
			.fold(0, |acc, (_, &square)| acc ^ square);

		bit -= 1;
		if (n >> bit) & 1 != 0 {
			ran = self::step(ran);
		}
	}

	ran
}

/// Serial stream over the sequence.
///
/// Yields every state *after* the current one, forever.
#[derive(Clone, Copy, Debug)]
pub struct Stream {
	/// Current state
	ran: u64,
}

impl Stream {
	/// Creates a stream at the start of the sequence
	#[must_use]
	pub const fn new() -> Self {
		Self { ran: 0x1 }
	}

	/// Creates a stream at the `n`-th state of the sequence
	#[must_use]
	pub fn starting_at(n: i64) -> Self {
		Self { ran: self::starts(n) }
	}

	/// Returns the current state
	#[must_use]
	pub const fn state(&self) -> u64 {
		self.ran
	}
}

impl Default for Stream {
	fn default() -> Self {
		Self::new()
	}
}

impl Iterator for Stream {
	type Item = u64;

	#[inline(always)]
	fn next(&mut self) -> Option<Self::Item> {
		self.ran = self::step(self.ran);
		Some(self.ran)
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		rand::{rngs::StdRng, Rng, SeedableRng},
	};

	#[test]
	fn step_folds_polynomial() {
		assert_eq!(step(0x1), 0x2);
		assert_eq!(step(0x4000_0000_0000_0000), 0x8000_0000_0000_0000);
		assert_eq!(step(0x8000_0000_0000_0000), POLY);
		assert_eq!(step(0xc000_0000_0000_0001), 0x8000_0000_0000_0002 ^ POLY);
	}

	#[test]
	fn starts_matches_serial_stepping() {
		let mut ran = 0x1;
		for n in 0..=10_000 {
			assert_eq!(starts(n), ran, "Mismatch at n = {n}");
			ran = step(ran);
		}
	}

	#[test]
	fn starts_is_periodic() {
		assert_eq!(starts(0), 0x1);
		assert_eq!(starts(PERIOD), starts(0));
		assert_eq!(starts(-1), starts(PERIOD - 1));
		assert_eq!(step(starts(PERIOD - 1)), 0x1);

		let mut rng = StdRng::seed_from_u64(0x5eed);
		for _ in 0..64 {
			let n = rng.gen_range(0..i64::MAX - 2 * PERIOD);
			assert_eq!(starts(n + PERIOD), starts(n), "Period mismatch at n = {n}");
			assert_eq!(starts(n + 2 * PERIOD), starts(n), "Period mismatch at n = {n}");
			assert_eq!(starts(-n), starts(PERIOD - n % PERIOD), "Negative mismatch at n = {n}");
		}
	}

	#[test]
	fn starts_jumps_far_ahead() {
		// Stepping from a jumped-to state must agree with jumping straight there
		let mut rng = StdRng::seed_from_u64(0xa11ce);
		for _ in 0..16 {
			let n = rng.gen_range(0..PERIOD - 1000);
			let mut stream = Stream::starting_at(n);
			for offset in 1..=1000 {
				assert_eq!(stream.next(), Some(starts(n + offset)));
			}
		}
	}

	#[test]
	fn sequence_never_reaches_zero() {
		assert!(Stream::new().take(1_000_000).all(|ran| ran != 0));
	}

	#[test]
	fn stream_yields_following_states() {
		let mut stream = Stream::new();
		assert_eq!(stream.state(), 0x1);
		assert_eq!(stream.next(), Some(0x2));
		assert_eq!(stream.next(), Some(0x4));
		assert_eq!(stream.state(), 0x4);
		assert_eq!(Stream::default().nth(63), Some(POLY));
	}
}
