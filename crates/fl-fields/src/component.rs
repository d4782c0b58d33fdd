//! Base field components reported by the host.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::error::{FieldError, FieldResult};
use crate::quantity::LogicalQuantity;

/// Vector field family a component belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// Current density.
    J,
    /// Magnetic flux density.
    B,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::J, Family::B];

    pub fn letter(self) -> char {
        match self {
            Family::J => 'J',
            Family::B => 'B',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// One of the six raw components the host can evaluate at a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseComponent {
    Rjx,
    Rjy,
    Rjz,
    Rbx,
    Rby,
    Rbz,
}

impl BaseComponent {
    pub const ALL: [BaseComponent; 6] = [
        BaseComponent::Rjx,
        BaseComponent::Rjy,
        BaseComponent::Rjz,
        BaseComponent::Rbx,
        BaseComponent::Rby,
        BaseComponent::Rbz,
    ];

    pub const fn new(family: Family, axis: Axis) -> Self {
        match (family, axis) {
            (Family::J, Axis::X) => BaseComponent::Rjx,
            (Family::J, Axis::Y) => BaseComponent::Rjy,
            (Family::J, Axis::Z) => BaseComponent::Rjz,
            (Family::B, Axis::X) => BaseComponent::Rbx,
            (Family::B, Axis::Y) => BaseComponent::Rby,
            (Family::B, Axis::Z) => BaseComponent::Rbz,
        }
    }

    pub fn family(self) -> Family {
        match self {
            BaseComponent::Rjx | BaseComponent::Rjy | BaseComponent::Rjz => Family::J,
            BaseComponent::Rbx | BaseComponent::Rby | BaseComponent::Rbz => Family::B,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            BaseComponent::Rjx | BaseComponent::Rbx => Axis::X,
            BaseComponent::Rjy | BaseComponent::Rby => Axis::Y,
            BaseComponent::Rjz | BaseComponent::Rbz => Axis::Z,
        }
    }

    /// Upper-case canonical name, as the host keys its replies.
    pub fn name(self) -> &'static str {
        match self {
            BaseComponent::Rjx => "RJX",
            BaseComponent::Rjy => "RJY",
            BaseComponent::Rjz => "RJZ",
            BaseComponent::Rbx => "RBX",
            BaseComponent::Rby => "RBY",
            BaseComponent::Rbz => "RBZ",
        }
    }

    /// Case-insensitive parse (`"rjx"`, `"RJX"`).
    pub fn parse(name: &str) -> FieldResult<Self> {
        let upper = name.trim().to_ascii_uppercase();
        BaseComponent::ALL
            .into_iter()
            .find(|c| c.name() == upper)
            .ok_or_else(|| FieldError::UnknownComponent {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for BaseComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseComponent {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Base component values extracted for one point at one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentValues {
    values: BTreeMap<BaseComponent, f64>,
}

impl ComponentValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from upper-cased canonical names (`"RJX"`, `"RBY"`).
    pub fn from_named<I, S>(entries: I) -> FieldResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut values = Self::new();
        for (name, value) in entries {
            values.insert(BaseComponent::parse(name.as_ref())?, value);
        }
        Ok(values)
    }

    pub fn insert(&mut self, component: BaseComponent, value: f64) -> Option<f64> {
        self.values.insert(component, value)
    }

    pub fn get(&self, component: BaseComponent) -> Option<f64> {
        self.values.get(&component).copied()
    }

    pub fn contains(&self, component: BaseComponent) -> bool {
        self.values.contains_key(&component)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BaseComponent, f64)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }

    /// Value of `component`, or `MissingComponent` naming the quantity that needed it.
    pub fn require(&self, component: BaseComponent, quantity: LogicalQuantity) -> FieldResult<f64> {
        self.get(component)
            .ok_or_else(|| FieldError::MissingComponent {
                component: component.name(),
                quantity: quantity.name().to_string(),
            })
    }
}

impl FromIterator<(BaseComponent, f64)> for ComponentValues {
    fn from_iter<T: IntoIterator<Item = (BaseComponent, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(BaseComponent::parse("rjx").unwrap(), BaseComponent::Rjx);
        assert_eq!(BaseComponent::parse(" Rbz ").unwrap(), BaseComponent::Rbz);
        assert_eq!("RBY".parse::<BaseComponent>().unwrap(), BaseComponent::Rby);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = BaseComponent::parse("rex").unwrap_err();
        assert_eq!(
            err,
            FieldError::UnknownComponent {
                name: "rex".to_string()
            }
        );
    }

    #[test]
    fn family_axis_round_trip() {
        for c in BaseComponent::ALL {
            assert_eq!(BaseComponent::new(c.family(), c.axis()), c);
        }
    }

    #[test]
    fn from_named_maps_canonical_names() {
        let values = ComponentValues::from_named([("RJX", 3.0), ("rby", -1.0)]).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get(BaseComponent::Rjx), Some(3.0));
        assert_eq!(values.get(BaseComponent::Rby), Some(-1.0));
        assert!(!values.contains(BaseComponent::Rjz));
    }
}
