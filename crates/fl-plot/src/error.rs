//! Error types for the plot grid.

use thiserror::Error;

use crate::grid::GridState;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("Grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyLayout { rows: usize, cols: usize },

    #[error("Panel ({quantity}, {point}) is outside a {rows}x{cols} grid")]
    PanelOob {
        quantity: usize,
        point: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Cannot {op} a grid in state {state:?}")]
    InvalidState { op: &'static str, state: GridState },

    #[error("Panel update mismatch: {reason}")]
    PanelMismatch { reason: String },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type PlotResult<T> = Result<T, PlotError>;
