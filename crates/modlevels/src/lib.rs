//! Per-logger level resolution for hierarchical, dot-separated logger names.
//!
//! A [`ModuleLevels`] engine holds a default level plus a set of overrides
//! activated from a compact textual spec such as
//! `gossip,ledger.=debug:core.comm=warn:info`. Lookups walk the logger name
//! toward the root and memoize the result, so repeated calls for the same
//! name only take a shared read lock.

mod cache;
mod config;
mod error;
mod level;
mod levels;
mod name;
mod resolve;
mod spec;

/// Settings used to build an engine.
pub use config::ModuleLevelsConfig;
/// Error types for spec activation and level parsing.
pub use error::{LevelParseError, ModuleLevelsError};
/// Severity scale and name conversions.
pub use level::{Level, is_valid_level, name_to_level};
/// The level engine.
pub use levels::ModuleLevels;
/// Logger-name syntax check.
pub use name::is_valid_logger_name;
/// Parsed spec representation.
pub use spec::Configuration;
