//! Reference host for field logging.
//!
//! Provides:
//! - `SteppedSimulation`, a probe-able simulation that advances in steps
//! - A run loop calling the session's end-of-step and end-of-solve hooks
//! - An analytic AC conductor simulation to drive the logger without an
//!   external solver

pub mod conductor;
pub mod error;
pub mod sim;

pub use conductor::{ConductorParams, ConductorSimulation};
pub use error::{HostError, HostResult};
pub use sim::{RunSummary, SimOptions, SteppedSimulation, run};
