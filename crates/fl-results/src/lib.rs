//! fl-results: append-only sample storage and export.

pub mod export;
pub mod series;
pub mod store;

pub use export::{table_file_name, write_jsonl, write_table};
pub use series::SampleSeries;
pub use store::{LogPoint, SampleStore, StepFrame};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error(
        "Time regressed at point {point}, quantity {quantity}: {time} is before last sample {last}"
    )]
    RegressedTime {
        point: usize,
        quantity: String,
        last: f64,
        time: f64,
    },

    #[error(
        "Step frame shape mismatch: expected {expected_points}x{expected_quantities}, got {points}x{quantities}"
    )]
    FrameShape {
        expected_points: usize,
        expected_quantities: usize,
        points: usize,
        quantities: usize,
    },

    #[error("Quantity not logged: {quantity}")]
    QuantityNotLogged { quantity: String },

    #[error(transparent)]
    Core(#[from] fl_core::FlError),

    #[error(transparent)]
    Field(#[from] fl_fields::FieldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
