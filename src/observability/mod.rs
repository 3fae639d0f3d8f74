//! File-based logging for the catalog engine.
//!
//! Every layer logs through `tracing` spans and events. This module installs
//! the subscriber that filters them and writes them to a rotating log file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → catalog.log (+3 backups)
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
