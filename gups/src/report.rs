//! Report

// Imports
use std::fmt;

/// Report header, with the run parameters
#[derive(Clone, Copy, Debug)]
#[derive(serde::Serialize)]
pub struct Header {
	pub log_table_size: u32,
	pub table_size:     u64,
	pub num_updates:    u64,
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"Main table size   = 2 ^ {} = {} words",
			self.log_table_size, self.table_size
		)?;
		writeln!(f, "Number of updates = {}", self.num_updates)
	}
}

/// Report summary, with the run results
#[derive(Clone, Copy, Debug)]
#[derive(serde::Serialize)]
pub struct Summary {
	/// Time spent updating, in seconds
	pub real_time: f64,

	/// Giga-updates per second
	pub gups: f64,

	pub errors:    u64,
	pub locations: u64,
	pub passed:    bool,
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Real time used = {:.6} seconds", self.real_time)?;
		writeln!(f, "{:.9} Billion(10^9) Updates    per second [GUP/s]", self.gups)?;
		writeln!(
			f,
			"Found {} errors in {} locations ({}).",
			self.errors,
			self.locations,
			match self.passed {
				true => "passed",
				false => "failed",
			}
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_format() {
		let header = Header {
			log_table_size: 28,
			table_size:     1 << 28,
			num_updates:    1 << 30,
		};
		assert_eq!(
			header.to_string(),
			"Main table size   = 2 ^ 28 = 268435456 words\nNumber of updates = 1073741824\n"
		);
	}

	#[test]
	fn summary_format() {
		let summary = Summary {
			real_time: 1.5,
			gups:      0.000_004_096 / 1.5,
			errors:    3,
			locations: 1024,
			passed:    true,
		};
		assert_eq!(
			summary.to_string(),
			"Real time used = 1.500000 seconds\n0.000002731 Billion(10^9) Updates    per second [GUP/s]\nFound 3 \
			 errors in 1024 locations (passed).\n"
		);
	}

	#[test]
	fn summary_format_failed_sentinel() {
		let summary = Summary {
			real_time: 0.0,
			gups:      -1.0,
			errors:    500,
			locations: 1024,
			passed:    false,
		};
		assert_eq!(
			summary.to_string(),
			"Real time used = 0.000000 seconds\n-1.000000000 Billion(10^9) Updates    per second [GUP/s]\nFound 500 \
			 errors in 1024 locations (failed).\n"
		);
	}
}
