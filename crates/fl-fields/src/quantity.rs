//! Logical quantities derivable from base components.

use core::fmt;

use crate::component::{Axis, BaseComponent, Family};
use crate::error::{FieldError, FieldResult};
use crate::units::Dimension;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuantityKind {
    /// Pass-through of one axis component.
    Axis(Axis),
    /// Euclidean norm of the three axis components.
    Magnitude,
}

/// A user-facing derived value such as `JMOD` or `BX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalQuantity {
    family: Family,
    kind: QuantityKind,
}

impl LogicalQuantity {
    pub const ALL: [LogicalQuantity; 8] = [
        LogicalQuantity::axis(Family::J, Axis::X),
        LogicalQuantity::axis(Family::J, Axis::Y),
        LogicalQuantity::axis(Family::J, Axis::Z),
        LogicalQuantity::magnitude(Family::J),
        LogicalQuantity::axis(Family::B, Axis::X),
        LogicalQuantity::axis(Family::B, Axis::Y),
        LogicalQuantity::axis(Family::B, Axis::Z),
        LogicalQuantity::magnitude(Family::B),
    ];

    pub const fn axis(family: Family, axis: Axis) -> Self {
        Self {
            family,
            kind: QuantityKind::Axis(axis),
        }
    }

    pub const fn magnitude(family: Family) -> Self {
        Self {
            family,
            kind: QuantityKind::Magnitude,
        }
    }

    pub fn family(self) -> Family {
        self.family
    }

    pub fn kind(self) -> QuantityKind {
        self.kind
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match (self.family, self.kind) {
            (Family::J, QuantityKind::Axis(Axis::X)) => "JX",
            (Family::J, QuantityKind::Axis(Axis::Y)) => "JY",
            (Family::J, QuantityKind::Axis(Axis::Z)) => "JZ",
            (Family::J, QuantityKind::Magnitude) => "JMOD",
            (Family::B, QuantityKind::Axis(Axis::X)) => "BX",
            (Family::B, QuantityKind::Axis(Axis::Y)) => "BY",
            (Family::B, QuantityKind::Axis(Axis::Z)) => "BZ",
            (Family::B, QuantityKind::Magnitude) => "BMOD",
        }
    }

    /// Case-insensitive parse (`"Jmod"`, `"bx"`).
    pub fn parse(name: &str) -> FieldResult<Self> {
        let upper = name.trim().to_ascii_uppercase();
        LogicalQuantity::ALL
            .into_iter()
            .find(|q| q.name() == upper)
            .ok_or_else(|| FieldError::UnknownQuantity {
                name: name.to_string(),
            })
    }

    pub fn dimension(self) -> Dimension {
        match self.family {
            Family::J => Dimension::J,
            Family::B => Dimension::B,
        }
    }

    /// Base components this quantity is computed from.
    pub fn required_components(self) -> Vec<BaseComponent> {
        match self.kind {
            QuantityKind::Axis(axis) => vec![BaseComponent::new(self.family, axis)],
            QuantityKind::Magnitude => Axis::ALL
                .into_iter()
                .map(|axis| BaseComponent::new(self.family, axis))
                .collect(),
        }
    }

    /// First required component absent from `available`, if any.
    pub fn first_missing(self, available: &[BaseComponent]) -> Option<BaseComponent> {
        self.required_components()
            .into_iter()
            .find(|c| !available.contains(c))
    }
}

impl fmt::Display for LogicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured quantity together with the label the user wrote for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantitySpec {
    label: String,
    quantity: LogicalQuantity,
}

impl QuantitySpec {
    pub fn parse(label: &str) -> FieldResult<Self> {
        Ok(Self {
            label: label.trim().to_string(),
            quantity: LogicalQuantity::parse(label)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn quantity(&self) -> LogicalQuantity {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_canonical_names() {
        for q in LogicalQuantity::ALL {
            assert_eq!(LogicalQuantity::parse(q.name()).unwrap(), q);
            assert_eq!(
                LogicalQuantity::parse(&q.name().to_ascii_lowercase()).unwrap(),
                q
            );
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        for name in ["QMOD", "", "J", "JW", "EMOD"] {
            assert!(matches!(
                LogicalQuantity::parse(name),
                Err(FieldError::UnknownQuantity { .. })
            ));
        }
    }

    #[test]
    fn magnitude_needs_three_components() {
        let q = LogicalQuantity::parse("Bmod").unwrap();
        assert_eq!(
            q.required_components(),
            vec![BaseComponent::Rbx, BaseComponent::Rby, BaseComponent::Rbz]
        );
        assert_eq!(
            q.first_missing(&[BaseComponent::Rbx, BaseComponent::Rbz]),
            Some(BaseComponent::Rby)
        );
    }

    #[test]
    fn spec_keeps_user_label() {
        let spec = QuantitySpec::parse("Jmod").unwrap();
        assert_eq!(spec.label(), "Jmod");
        assert_eq!(spec.quantity(), LogicalQuantity::magnitude(Family::J));
        assert_eq!(spec.quantity().dimension(), Dimension::J);
    }
}
