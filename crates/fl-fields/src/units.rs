//! Display units per physical dimension.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// Physical dimension tag, taken from the first letter of a quantity name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Current density.
    J,
    /// Magnetic flux density.
    B,
    /// Electric field strength.
    E,
    /// Magnetic field strength.
    H,
}

impl Dimension {
    pub fn from_quantity_name(name: &str) -> FieldResult<Self> {
        match name.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('J') => Ok(Dimension::J),
            Some('B') => Ok(Dimension::B),
            Some('E') => Ok(Dimension::E),
            Some('H') => Ok(Dimension::H),
            _ => Err(FieldError::UnknownQuantity {
                name: name.to_string(),
            }),
        }
    }
}

/// Unit strings shown on axis labels and panel titles.
///
/// These are labels only; values are plotted as the host reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitTable {
    pub current_density: String,
    pub flux_density: String,
    pub electric_field: String,
    pub magnetic_field: String,
    pub length: String,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            current_density: "A/m²".to_string(),
            flux_density: "T".to_string(),
            electric_field: "V/m".to_string(),
            magnetic_field: "A/m".to_string(),
            length: "m".to_string(),
        }
    }
}

impl UnitTable {
    pub fn unit(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::J => &self.current_density,
            Dimension::B => &self.flux_density,
            Dimension::E => &self.electric_field,
            Dimension::H => &self.magnetic_field,
        }
    }

    /// Unit for a quantity name, keyed on its first letter.
    pub fn unit_for(&self, name: &str) -> FieldResult<&str> {
        Ok(self.unit(Dimension::from_quantity_name(name)?))
    }

    /// `"<label> in <unit>"`, the y-axis label of a quantity row.
    pub fn axis_label(&self, label: &str) -> FieldResult<String> {
        Ok(format!("{} in {}", label, self.unit_for(label)?))
    }
}
