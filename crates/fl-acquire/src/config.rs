//! Log configuration and setup-time validation.

use std::collections::HashSet;
use std::path::Path;

use fl_core::{FlError, SpatialPoint};
use fl_fields::{BaseComponent, FieldError, QuantitySpec, UnitTable};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("No probe points configured")]
    NoPoints,

    #[error("No base components configured")]
    NoComponents,

    #[error("No quantities configured")]
    NoQuantities,

    #[error("Invalid point {index}: {source}")]
    InvalidPoint {
        index: usize,
        #[source]
        source: FlError,
    },

    #[error("Duplicate base component: {name}")]
    DuplicateComponent { name: String },

    #[error("Duplicate quantity: {name}")]
    DuplicateQuantity { name: String },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What to log, where, and how to label it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Probe coordinates in the host's length unit.
    pub points: Vec<[f64; 3]>,
    /// Base components queried at every point, e.g. `rjx`.
    pub components: Vec<String>,
    /// Logical quantities to plot, e.g. `Jmod`.
    pub quantities: Vec<String>,
    #[serde(default)]
    pub units: UnitTable,
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
    /// Emit per-point readings to the diagnostic log.
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_output_stem() -> String {
    "fieldlog".to_string()
}

fn default_window_title() -> String {
    "fieldlog".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            points: vec![[1.0, 1.0, 0.0]],
            components: ["rjx", "rjy", "rjz", "rbx", "rby", "rbz"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            quantities: vec!["Jmod".to_string(), "Bmod".to_string()],
            units: UnitTable::default(),
            output_stem: default_output_stem(),
            verbose: false,
            window_title: default_window_title(),
        }
    }
}

/// A configuration that passed validation, in typed form.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPlan {
    pub points: Vec<SpatialPoint>,
    pub components: Vec<BaseComponent>,
    pub quantities: Vec<QuantitySpec>,
    pub units: UnitTable,
    pub output_stem: String,
    pub verbose: bool,
    pub window_title: String,
}

impl LogConfig {
    /// Check everything that can be checked before the first step.
    pub fn validate(&self) -> ConfigResult<LogPlan> {
        if self.points.is_empty() {
            return Err(ConfigError::NoPoints);
        }
        if self.components.is_empty() {
            return Err(ConfigError::NoComponents);
        }
        if self.quantities.is_empty() {
            return Err(ConfigError::NoQuantities);
        }

        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(index, xyz)| {
                SpatialPoint::from_array(*xyz)
                    .map_err(|source| ConfigError::InvalidPoint { index, source })
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        let mut components = Vec::with_capacity(self.components.len());
        for name in &self.components {
            let component = BaseComponent::parse(name)?;
            if components.contains(&component) {
                return Err(ConfigError::DuplicateComponent { name: name.clone() });
            }
            components.push(component);
        }

        let mut seen = HashSet::new();
        let mut quantities = Vec::with_capacity(self.quantities.len());
        for name in &self.quantities {
            let spec = QuantitySpec::parse(name)?;
            if !seen.insert(spec.quantity()) {
                return Err(ConfigError::DuplicateQuantity { name: name.clone() });
            }
            if let Some(missing) = spec.quantity().first_missing(&components) {
                return Err(FieldError::MissingComponent {
                    component: missing.name(),
                    quantity: spec.label().to_string(),
                }
                .into());
            }
            self.units.unit_for(spec.label())?;
            quantities.push(spec);
        }

        Ok(LogPlan {
            points,
            components,
            quantities,
            units: self.units.clone(),
            output_stem: self.output_stem.clone(),
            verbose: self.verbose,
            window_title: self.window_title.clone(),
        })
    }
}

pub fn load_yaml(path: &Path) -> ConfigResult<LogConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: LogConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &LogConfig) -> ConfigResult<()> {
    config.validate()?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let plan = LogConfig::default().validate().unwrap();
        assert_eq!(plan.points.len(), 1);
        assert_eq!(plan.components.len(), 6);
        assert_eq!(plan.quantities[0].label(), "Jmod");
    }

    #[test]
    fn empty_point_list_is_rejected() {
        let config = LogConfig {
            points: vec![],
            ..LogConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoPoints)));
    }

    #[test]
    fn non_finite_point_is_rejected() {
        let config = LogConfig {
            points: vec![[0.0, 0.0, 0.0], [f64::NAN, 0.0, 0.0]],
            ..LogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPoint { index: 1, .. })
        ));
    }

    #[test]
    fn unknown_quantity_is_rejected() {
        let config = LogConfig {
            quantities: vec!["Qmod".to_string()],
            ..LogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Field(FieldError::UnknownQuantity { .. }))
        ));
    }

    #[test]
    fn quantity_without_its_components_is_rejected() {
        let config = LogConfig {
            components: vec!["rjx".to_string(), "rjy".to_string(), "rjz".to_string()],
            quantities: vec!["Jmod".to_string(), "Bx".to_string()],
            ..LogConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Field(FieldError::MissingComponent {
                component,
                quantity,
            })) => {
                assert_eq!(component, "RBX");
                assert_eq!(quantity, "Bx");
            }
            other => panic!("expected MissingComponent, got {other:?}"),
        }
    }

    #[test]
    fn duplicates_are_rejected() {
        let config = LogConfig {
            components: vec!["rjx".to_string(), "RJX".to_string()],
            quantities: vec!["Jx".to_string()],
            ..LogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateComponent { .. })
        ));

        let config = LogConfig {
            quantities: vec!["Jmod".to_string(), "JMOD".to_string()],
            ..LogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateQuantity { .. })
        ));
    }

    #[test]
    fn unknown_component_is_rejected() {
        let config = LogConfig {
            components: vec!["rex".to_string()],
            quantities: vec!["Jx".to_string()],
            ..LogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Field(FieldError::UnknownComponent { .. }))
        ));
    }

    #[test]
    fn yaml_round_trip() {
        let path = std::env::temp_dir().join("fl_acquire_config_roundtrip.yaml");
        let config = LogConfig {
            points: vec![[1.0, 1.0, 0.0], [0.0, 0.005, 0.0]],
            quantities: vec!["Jx".to_string(), "Bmod".to_string()],
            verbose: true,
            ..LogConfig::default()
        };
        save_yaml(&path, &config).unwrap();
        assert_eq!(load_yaml(&path).unwrap(), config);
    }

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = "points: [[1, 1, 0]]\ncomponents: [rbx, rby, rbz]\nquantities: [Bmod]\n";
        let config: LogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output_stem, "fieldlog");
        assert!(!config.verbose);
        assert_eq!(config.units, UnitTable::default());
        config.validate().unwrap();
    }
}
