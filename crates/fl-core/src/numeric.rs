use crate::FlError;

/// Scalar type for coordinates, times and field values.
pub type Real = f64;

/// Absolute/relative closeness bounds for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// `true` if `a` and `b` are within the absolute bound or, for large
/// magnitudes, within the relative bound.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through if finite; `what` names it in the error.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FlError> {
    match v.is_finite() {
        true => Ok(v),
        false => Err(FlError::NonFinite { what, value: v }),
    }
}

/// Check that `index` addresses one of `len` slots.
pub fn ensure_index(index: usize, len: usize, what: &'static str) -> Result<usize, FlError> {
    if index < len {
        Ok(index)
    } else {
        Err(FlError::IndexOob { what, index, len })
    }
}
