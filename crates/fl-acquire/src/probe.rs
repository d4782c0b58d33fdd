//! The host-side field evaluation seam.

use std::collections::BTreeMap;

use fl_core::SpatialPoint;
use fl_fields::{BaseComponent, ComponentValues};
use thiserror::Error;

/// Failure reported by the host while evaluating fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("Point ({}, {}, {}) is outside the mesh", .point[0], .point[1], .point[2])]
    OutsideMesh { point: [f64; 3] },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

/// Raw reply to one field query: per-component value arrays keyed by the
/// upper-case component name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldReading {
    values: BTreeMap<String, Vec<f64>>,
}

impl FieldReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// One scalar per component, the usual reply shape.
    pub fn from_components(values: &ComponentValues) -> Self {
        let mut reading = Self::new();
        for (component, value) in values.iter() {
            reading.insert(component.name(), vec![value]);
        }
        reading
    }

    pub fn insert(&mut self, name: &str, values: Vec<f64>) {
        self.values.insert(name.to_ascii_uppercase(), values);
    }

    pub fn with(mut self, name: &str, values: Vec<f64>) -> Self {
        self.insert(name, values);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.values
            .get(&name.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Field evaluation offered by a running simulation.
///
/// Queries must not change simulation state; the session issues exactly one
/// per configured point per step.
pub trait FieldProbe {
    /// Current simulation time in seconds.
    fn current_time(&self) -> f64;

    /// Evaluate `components` at `point`.
    fn query_fields_at(
        &mut self,
        components: &[BaseComponent],
        point: &SpatialPoint,
    ) -> Result<FieldReading, ProbeError>;
}
