// fl-core/src/units.rs

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricCurrentDensity as UomElectricCurrentDensity,
    Frequency as UomFrequency, Length as UomLength,
    MagneticFluxDensity as UomMagneticFluxDensity, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
pub type CurrentDensity = UomElectricCurrentDensity;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type FluxDensity = UomMagneticFluxDensity;
pub type Time = UomTime;

#[inline]
pub fn amp(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn tesla(v: f64) -> FluxDensity {
    use uom::si::magnetic_flux_density::tesla;
    FluxDensity::new::<tesla>(v)
}

/// Current density in A/m².
#[inline]
pub fn a_per_m2(v: f64) -> CurrentDensity {
    use uom::si::electric_current_density::ampere_per_square_meter;
    CurrentDensity::new::<ampere_per_square_meter>(v)
}

pub mod constants {
    /// Vacuum permeability (H/m).
    pub const MU0: f64 = 1.256_637_062_12e-6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _i = amp(10.0);
        let _f = hz(50.0);
        let _l = m(2.0);
        let _dt = s(0.1);
        let _b = tesla(1.5);
        let _j = a_per_m2(1.0e6);
    }

    #[test]
    fn current_over_area_is_current_density() {
        use uom::si::electric_current_density::ampere_per_square_meter;
        let j: CurrentDensity = (amp(2.0) / (m(1.0) * m(0.5))).into();
        assert!((j.get::<ampere_per_square_meter>() - 4.0).abs() < 1e-12);
    }
}
