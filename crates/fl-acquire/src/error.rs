//! Error types for acquisition.

use fl_fields::FieldError;
use fl_plot::PlotError;
use fl_results::ResultsError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::probe::ProbeError;

#[derive(Error, Debug)]
pub enum AcqError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Field query failed at point {point}: {source}")]
    Probe {
        point: usize,
        #[source]
        source: ProbeError,
    },

    #[error("Unexpected reply for {component} at point {point}: {reason}")]
    UnexpectedShape {
        point: usize,
        component: &'static str,
        reason: String,
    },

    #[error("Non-finite simulation time: {0}")]
    NonFiniteTime(f64),

    #[error("Quantity resolution failed: {0}")]
    Field(#[from] FieldError),

    #[error("Sample store error: {0}")]
    Results(#[from] ResultsError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),
}

pub type AcqResult<T> = Result<T, AcqError>;

/// Coarse grouping of failures by when they can happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rejected at setup, before the first step.
    Configuration,
    /// The current step failed and nothing was recorded for it.
    Acquisition,
    /// A contract violation by the caller.
    State,
}

impl AcqError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AcqError::Config(_) => ErrorClass::Configuration,
            AcqError::Plot(PlotError::InvalidState { .. })
            | AcqError::Results(ResultsError::RegressedTime { .. }) => ErrorClass::State,
            AcqError::Probe { .. }
            | AcqError::UnexpectedShape { .. }
            | AcqError::NonFiniteTime(_)
            | AcqError::Field(_)
            | AcqError::Results(_)
            | AcqError::Plot(_) => ErrorClass::Acquisition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_plot::GridState;

    #[test]
    fn classes() {
        assert_eq!(
            AcqError::from(ConfigError::NoPoints).class(),
            ErrorClass::Configuration
        );
        assert_eq!(
            AcqError::from(PlotError::InvalidState {
                op: "update",
                state: GridState::Finalized
            })
            .class(),
            ErrorClass::State
        );
        assert_eq!(AcqError::NonFiniteTime(f64::NAN).class(), ErrorClass::Acquisition);
    }
}
