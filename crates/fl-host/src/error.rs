//! Error types for host runs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Acquisition failed at step {step}: {source}")]
    Acquire {
        step: usize,
        #[source]
        source: fl_acquire::AcqError,
    },

    #[error("Finalization failed: {0}")]
    Finalize(#[source] fl_acquire::AcqError),
}

pub type HostResult<T> = Result<T, HostError>;
