//! Logger
//!
//! Logs to stderr, filtered by `RUST_LOG`, and optionally to a file,
//! filtered by `RUST_LOG_FILE`.

// Imports
use {
	std::{
		fs,
		io,
		path::Path,
		sync::{Mutex, PoisonError},
	},
	tracing::metadata::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// Any messages logged through [`pre_init`] are emitted right after.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let term_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", LevelFilter::INFO));

	let file_layer = log_file.and_then(|path| {
		let file = fs::OpenOptions::new()
			.write(true)
			.create(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(path);

		match file {
			Ok(file) => Some(
				tracing_subscriber::fmt::layer()
					.with_ansi(false)
					.with_writer(Mutex::new(file))
					.with_filter(self::env_filter("RUST_LOG_FILE", LevelFilter::DEBUG)),
			),
			Err(err) => {
				eprintln!("Unable to open log file {path:?}: {err}");
				None
			},
		}
	});

	if let Err(err) = tracing_subscriber::registry().with(term_layer).with(file_layer).try_init() {
		eprintln!("Unable to initialize logger: {err}");
		return;
	}

	pre_init::flush();
}

/// Creates an env filter from `var`, defaulting to `default` for all targets
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(default.into())
		.with_env_var(var)
		.from_env_lossy()
}

/// Logging before the logger is initialized
pub mod pre_init {
	// Imports
	use {super::*, tracing::Level};

	/// Messages waiting for the logger
	static MESSAGES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

	/// Queues a debug message
	pub fn debug(message: impl Into<String>) {
		self::push(Level::DEBUG, message.into());
	}

	fn push(level: Level, message: String) {
		MESSAGES
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push((level, message));
	}

	/// Emits all queued messages
	pub(super) fn flush() {
		let messages = std::mem::take(&mut *MESSAGES.lock().unwrap_or_else(PoisonError::into_inner));
		for (level, message) in messages {
			match level {
				Level::ERROR => tracing::error!("{message}"),
				Level::WARN => tracing::warn!("{message}"),
				Level::INFO => tracing::info!("{message}"),
				Level::DEBUG => tracing::debug!("{message}"),
				_ => tracing::trace!("{message}"),
			}
		}
	}
}
