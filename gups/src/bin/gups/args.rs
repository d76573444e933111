//! Arguments

// Imports
use std::path::PathBuf;

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Log2 of the table size.
	///
	/// By default, the table takes up half of a 4 GiB memory budget.
	#[clap(long = "log-table-size")]
	pub log_table_size: Option<u32>,

	/// Fraction of the table that may fail verification
	#[clap(long = "error-tolerance")]
	pub error_tolerance: Option<f64>,

	/// Also print the report as json
	#[clap(long = "json")]
	pub json: bool,
}
