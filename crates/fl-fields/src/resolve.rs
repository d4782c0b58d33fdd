//! Computes logical quantities from base component values.

use nalgebra::Vector3;

use crate::component::{Axis, BaseComponent, ComponentValues};
use crate::error::FieldResult;
use crate::quantity::{LogicalQuantity, QuantityKind};

/// Value of `quantity` given the base components sampled at one point.
pub fn resolve(quantity: LogicalQuantity, values: &ComponentValues) -> FieldResult<f64> {
    let family = quantity.family();
    match quantity.kind() {
        QuantityKind::Axis(axis) => values.require(BaseComponent::new(family, axis), quantity),
        QuantityKind::Magnitude => {
            let x = values.require(BaseComponent::new(family, Axis::X), quantity)?;
            let y = values.require(BaseComponent::new(family, Axis::Y), quantity)?;
            let z = values.require(BaseComponent::new(family, Axis::Z), quantity)?;
            Ok(Vector3::new(x, y, z).norm())
        }
    }
}

/// Resolve a quantity given by name (case-insensitive).
pub fn resolve_named(name: &str, values: &ComponentValues) -> FieldResult<f64> {
    resolve(LogicalQuantity::parse(name)?, values)
}
