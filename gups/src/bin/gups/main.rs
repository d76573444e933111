//! GUPS random access benchmark

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	gups::{
		report::{Header, Summary},
		Benchmark,
		Config,
		WallClock,
	},
	gups_util::logger,
	std::io::{self, Write},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	let mut config = Config::default();
	if let Some(log_table_size) = args.log_table_size {
		config.log_table_size = Some(log_table_size);
	}
	if let Some(error_tolerance) = args.error_tolerance {
		config.error_tolerance = error_tolerance;
	}

	let bench = Benchmark::new(&config).context("Unable to create benchmark")?;
	let header = bench.header();

	// Note: We flush before running so the header isn't stuck in the buffer
	//       for the whole run.
	let mut stdout = io::stdout().lock();
	write!(stdout, "{header}").context("Unable to write report header")?;
	stdout.flush().context("Unable to flush stdout")?;

	let output = bench.run(&mut WallClock::new());
	let summary = output.summary();
	write!(stdout, "{summary}").context("Unable to write report summary")?;

	if args.json {
		let report = JsonReport { header, summary };
		serde_json::to_writer(&mut stdout, &report).context("Unable to write json report")?;
		writeln!(stdout).context("Unable to write json report")?;
	}

	Ok(())
}

/// Json report
#[derive(Debug)]
#[derive(serde::Serialize)]
struct JsonReport {
	#[serde(flatten)]
	header: Header,

	#[serde(flatten)]
	summary: Summary,
}
