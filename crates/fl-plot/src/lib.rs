//! Multi-panel live plot model.
//!
//! Provides:
//! - Uniform (quantity, point) panel addressing
//! - Per-panel labels and autoscaled axis bounds
//! - The Live -> Finalized grid state machine
//! - The backend seam that renders frames

pub mod backend;
pub mod error;
pub mod frame;
pub mod grid;
pub mod layout;

pub use backend::{GridBackend, HeadlessBackend, RecordingBackend};
pub use error::{PlotError, PlotResult};
pub use frame::{AxisBounds, GridFrame, Panel, PanelLabels};
pub use grid::{GridSpec, GridState, TIME_AXIS_LABEL, VisualizationGrid, figure_title};
pub use layout::{GridLayout, PanelCoord};
