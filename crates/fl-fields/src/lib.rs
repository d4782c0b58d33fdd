//! Derived field quantities.
//!
//! Provides:
//! - The closed set of base field components a host can report
//! - Logical quantities (axis pass-through and vector magnitude)
//! - The resolver computing a logical quantity from base component values
//! - Display unit lookup by physical dimension

pub mod component;
pub mod error;
pub mod quantity;
pub mod resolve;
pub mod units;

pub use component::{Axis, BaseComponent, ComponentValues, Family};
pub use error::{FieldError, FieldResult};
pub use quantity::{LogicalQuantity, QuantityKind, QuantitySpec};
pub use resolve::{resolve, resolve_named};
pub use units::{Dimension, UnitTable};
