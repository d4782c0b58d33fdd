//! fl-core: shared foundation for fieldlog.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - point (probe coordinates)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod point;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FlError, FlResult};
pub use numeric::*;
pub use point::SpatialPoint;
pub use units::*;
