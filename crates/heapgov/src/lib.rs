//! Background memory governance for garbage-collected host processes.
//!
//! This crate is intentionally lightweight and "best-effort":
//! - The host sets a resident-memory target (or a negative value to disable);
//!   a background monitor retunes the collector's grow-before-collect
//!   percentage toward 70% occupancy of that target every tick.
//! - When resident memory crosses the 70% hard threshold, the monitor forces
//!   a full collection and returns freed pages to the OS.
//! - The policy is a clamped proportional heuristic, not a model; a poorly
//!   chosen target can oscillate between the pacing floor and forced
//!   releases, which only shows up in the emitted tick reports.
//!
//! The collector itself is reached through the [`CollectorRuntime`] trait;
//! the governor owns no runtime of its own and never treats a statistics
//! query as fallible.

mod config;
mod governor;
pub mod pacing;
pub mod process;
mod report;
mod runtime;
mod target;

pub use config::GovernorConfig;
pub use governor::Governor;
pub use pacing::{PacingDecision, MIN_PACING_PERCENT, SOFT_LIMIT_RATIO};
pub use report::TickReport;
pub use runtime::{CollectorRuntime, MemoryStats};
pub use target::{TargetStore, TARGET_UNSET};
