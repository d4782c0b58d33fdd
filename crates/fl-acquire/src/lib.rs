//! Per-step field acquisition for a running simulation.
//!
//! Provides:
//! - Log configuration (YAML) and its setup-time validation
//! - The field probe trait a host simulation implements
//! - `LoggingSession`, owning the sample store and plot grid, with the
//!   end-of-step and end-of-solve hooks

pub mod config;
pub mod error;
pub mod probe;
pub mod session;

pub use config::{ConfigError, LogConfig, LogPlan, load_yaml, save_yaml};
pub use error::{AcqError, AcqResult, ErrorClass};
pub use probe::{FieldProbe, FieldReading, ProbeError};
pub use session::LoggingSession;
