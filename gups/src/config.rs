//! Configuration

// Imports
use {crate::verify, std::mem};

/// Configuration
#[derive(Clone, Debug)]
pub struct Config {
	/// Nominal memory budget, in bytes
	pub memory_bytes: u64,

	/// Fraction of `memory_bytes` the table may occupy
	pub memory_fraction: f64,

	/// Log2 of the table size.
	///
	/// If `None`, derived from the memory budget
	pub log_table_size: Option<u32>,

	/// Fraction of the table that may fail verification
	pub error_tolerance: f64,
}

impl Config {
	/// Returns the log2 of the table size.
	///
	/// Unless overridden, this is the largest power of two words that fit
	/// in the memory budget.
	///
	/// # Errors
	/// Returns an error if the memory fraction isn't a positive, finite number.
	pub fn log_table_size(&self) -> Result<u32, anyhow::Error> {
		if let Some(log_table_size) = self.log_table_size {
			return Ok(log_table_size);
		}

		anyhow::ensure!(
			self.memory_fraction.is_finite() && self.memory_fraction > 0.0,
			"Memory fraction must be a positive number, found {}",
			self.memory_fraction
		);

		let mut words = self.memory_bytes as f64 * self.memory_fraction / mem::size_of::<u64>() as f64;
		anyhow::ensure!(words.is_finite(), "Memory budget of {words} words is too large");
		let mut log_table_size = 0;
		while words >= 2.0 {
			words *= 0.5;
			log_table_size += 1;
		}

		Ok(log_table_size)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			memory_bytes:    1 << 32,
			memory_fraction: 0.5,
			log_table_size:  None,
			error_tolerance: verify::DEFAULT_ERROR_TOLERANCE,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_uses_half_of_nominal_memory() {
		assert_eq!(Config::default().log_table_size().ok(), Some(28));
	}

	#[test]
	fn log_table_size_rounds_down() {
		let config = |memory_bytes, memory_fraction| Config {
			memory_bytes,
			memory_fraction,
			..Config::default()
		};

		assert_eq!(config(1 << 20, 0.5).log_table_size().ok(), Some(16));
		assert_eq!(config(3000, 1.0).log_table_size().ok(), Some(8));
		assert_eq!(config((1 << 20) - 8, 1.0).log_table_size().ok(), Some(16));
		assert_eq!(config(8, 1.0).log_table_size().ok(), Some(0));
		assert_eq!(config(0, 0.5).log_table_size().ok(), Some(0));
	}

	#[test]
	fn log_table_size_override() {
		let config = Config {
			log_table_size: Some(10),
			..Config::default()
		};
		assert_eq!(config.log_table_size().ok(), Some(10));
	}

	#[test]
	fn non_finite_memory_fraction_is_rejected() {
		for memory_fraction in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.0, -0.5, f64::MAX] {
			let config = Config {
				memory_fraction,
				..Config::default()
			};
			assert!(
				config.log_table_size().is_err(),
				"Memory fraction {memory_fraction} was accepted"
			);
		}
	}
}
