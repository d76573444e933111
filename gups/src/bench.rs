//! Benchmark driver

// Imports
use {
	crate::{
		clock::Clock,
		config::Config,
		report::{Header, Summary},
		table::Table,
		update,
		verify::{self, Verification},
	},
	anyhow::Context,
};

/// Benchmark, with its table allocated and ready to update
#[derive(Debug)]
pub struct Benchmark {
	/// Table
	table: Table,

	/// Error tolerance
	error_tolerance: f64,
}

impl Benchmark {
	/// Creates a benchmark, allocating its table.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid or the table couldn't be allocated.
	pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
		anyhow::ensure!(
			config.error_tolerance.is_finite() && config.error_tolerance >= 0.0,
			"Error tolerance must be a non-negative number, found {}",
			config.error_tolerance
		);

		let log_table_size = config.log_table_size().context("Unable to compute table size")?;
		let table = Table::new(log_table_size).context("Unable to create table")?;
		tracing::debug!(?config, ?table, "Created benchmark");

		Ok(Self {
			table,
			error_tolerance: config.error_tolerance,
		})
	}

	/// Returns the report header for this benchmark
	#[must_use]
	pub fn header(&self) -> Header {
		Header {
			log_table_size: self.table.log_size(),
			table_size:     self.table.size(),
			num_updates:    self.table.num_updates(),
		}
	}

	/// Runs the benchmark, timing the updates with `clock`, and then verifies the table.
	pub fn run<C: Clock>(mut self, clock: &mut C) -> RunOutput {
		let num_updates = self.table.num_updates();
		tracing::info!(num_updates, "Updating table");

		let start = clock.timestamp();
		update::random_access_update(&mut self.table);
		let real_time = clock.timestamp() - start;

		let gups = self::gups(num_updates, real_time);
		tracing::info!(real_time, gups, "Updated table");

		let verification = verify::verify(&mut self.table, self.error_tolerance);
		if !verification.passed {
			tracing::warn!(
				errors = verification.errors,
				locations = verification.locations,
				"Verification failed"
			);
		}

		RunOutput {
			table: self.table,
			real_time,
			gups,
			verification,
		}
	}
}

/// Creates and runs a benchmark
///
/// # Errors
/// Returns an error if unable to create the benchmark.
pub fn run<C: Clock>(config: &Config, clock: &mut C) -> Result<RunOutput, anyhow::Error> {
	let bench = Benchmark::new(config)?;
	Ok(bench.run(clock))
}

/// Returns the throughput, in giga-updates per second, of `num_updates` in `real_time` seconds.
///
/// If `real_time` isn't positive, returns `-1.0`.
#[must_use]
pub fn gups(num_updates: u64, real_time: f64) -> f64 {
	match real_time > 0.0 {
		true => 1e-9 * num_updates as f64 / real_time,
		false => -1.0,
	}
}

/// Output for [`Benchmark::run`]
#[derive(Debug)]
pub struct RunOutput {
	/// Table, after verification
	pub table: Table,

	/// Time spent updating, in seconds
	pub real_time: f64,

	/// Giga-updates per second
	pub gups: f64,

	/// Verification
	pub verification: Verification,
}

impl RunOutput {
	/// Returns the report summary for this run
	#[must_use]
	pub fn summary(&self) -> Summary {
		Summary {
			real_time: self.real_time,
			gups:      self.gups,
			errors:    self.verification.errors,
			locations: self.verification.locations,
			passed:    self.verification.passed,
		}
	}
}
