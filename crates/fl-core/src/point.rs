//! Probe coordinates.

use core::fmt;

use nalgebra::Point3;

use crate::{FlError, Real};

/// A fixed sampling location in the host's native length unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialPoint(Point3<Real>);

impl SpatialPoint {
    /// Build a point, rejecting NaN and infinite coordinates.
    pub fn new(x: Real, y: Real, z: Real) -> Result<Self, FlError> {
        for (v, what) in [(x, "point x"), (y, "point y"), (z, "point z")] {
            crate::ensure_finite(v, what)?;
        }
        Ok(Self(Point3::new(x, y, z)))
    }

    pub fn from_array(xyz: [Real; 3]) -> Result<Self, FlError> {
        Self::new(xyz[0], xyz[1], xyz[2])
    }

    pub fn x(&self) -> Real {
        self.0.x
    }

    pub fn y(&self) -> Real {
        self.0.y
    }

    pub fn z(&self) -> Real {
        self.0.z
    }

    pub fn to_array(&self) -> [Real; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    pub fn as_point3(&self) -> &Point3<Real> {
        &self.0
    }

    /// Distance from the z axis.
    pub fn radial_distance(&self) -> Real {
        self.0.x.hypot(self.0.y)
    }
}

impl fmt::Display for SpatialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:.2}, y={:.2}, z={:.2}",
            self.0.x, self.0.y, self.0.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        let p = SpatialPoint::new(1.0, 1.0, 0.0).unwrap();
        assert_eq!(p.to_string(), "x=1.00, y=1.00, z=0.00");
    }

    #[test]
    fn rejects_non_finite() {
        let err = SpatialPoint::new(0.0, f64::INFINITY, 0.0).unwrap_err();
        assert!(matches!(err, FlError::NonFinite { what: "point y", .. }));
    }

    #[test]
    fn radial_distance_ignores_z() {
        let p = SpatialPoint::from_array([3.0, 4.0, 12.0]).unwrap();
        assert_eq!(p.radial_distance(), 5.0);
    }
}
