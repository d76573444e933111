//! GUPS (giga-updates per second) random access benchmark
//!
//! Measures how fast a single thread can perform pseudo-random
//! read-modify-write updates on a large table of 64-bit words.

// Modules
pub mod bench;
pub mod clock;
pub mod config;
pub mod report;
pub mod rng;
pub mod table;
pub mod update;
pub mod util;
pub mod verify;

// Exports
pub use self::{
	bench::{Benchmark, RunOutput},
	clock::{Clock, WallClock},
	config::Config,
	table::Table,
};
