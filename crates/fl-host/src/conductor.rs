//! Analytic AC conductor.
//!
//! A straight round conductor along the z axis carries
//! `I(t) = I0 sin(2 pi f t)`, uniformly distributed over its cross-section.
//! Inside the conductor `J = I / (pi a^2)` along z and
//! `|B| = mu0 I r / (2 pi a^2)`; outside `J = 0` and `|B| = mu0 I / (2 pi r)`.
//! B is azimuthal. Coordinates are metres.

use std::f64::consts::PI;

use fl_acquire::{FieldProbe, FieldReading, ProbeError};
use fl_core::constants::MU0;
use fl_core::{
    Current, CurrentDensity, FluxDensity, Frequency, Length, SpatialPoint, Time, a_per_m2, amp, hz,
    m, s, tesla,
};
use fl_fields::{Axis, BaseComponent, Family};
use nalgebra::Vector3;
use uom::si::electric_current::ampere;
use uom::si::electric_current_density::ampere_per_square_meter;
use uom::si::length::meter;
use uom::si::magnetic_flux_density;
use uom::si::ratio::ratio;
use uom::si::time::second;

use crate::error::{HostError, HostResult};
use crate::sim::{SimOptions, SteppedSimulation};

#[derive(Clone, Debug)]
pub struct ConductorParams {
    pub radius: Length,
    pub peak_current: Current,
    pub frequency: Frequency,
    /// Mesh extent: points farther than this from the axis cannot be probed.
    pub domain_radius: Length,
}

impl Default for ConductorParams {
    fn default() -> Self {
        Self {
            radius: m(0.01),
            peak_current: amp(1000.0),
            frequency: hz(50.0),
            domain_radius: m(10.0),
        }
    }
}

pub struct ConductorSimulation {
    params: ConductorParams,
    opts: SimOptions,
    total_steps: usize,
    step: usize,
}

impl ConductorSimulation {
    pub fn new(params: ConductorParams, opts: SimOptions) -> HostResult<Self> {
        opts.validate()?;
        let a = params.radius.get::<meter>();
        if !a.is_finite() || a <= 0.0 {
            return Err(HostError::InvalidArg {
                what: "conductor radius must be positive",
            });
        }
        if params.domain_radius <= params.radius {
            return Err(HostError::InvalidArg {
                what: "domain radius must exceed conductor radius",
            });
        }
        Ok(Self {
            total_steps: opts.step_count(),
            params,
            opts,
            step: 0,
        })
    }

    pub fn params(&self) -> &ConductorParams {
        &self.params
    }

    pub fn time(&self) -> Time {
        s(self.step as f64 * self.opts.dt)
    }

    pub fn current_at(&self, t: Time) -> Current {
        let phase = (self.params.frequency * t).get::<ratio>() * 2.0 * PI;
        self.params.peak_current * phase.sin()
    }

    /// (J in A/m², B in T) at `point` at the current time.
    pub fn fields_at(
        &self,
        point: &SpatialPoint,
    ) -> Result<(Vector3<f64>, Vector3<f64>), ProbeError> {
        let r = m(point.radial_distance());
        if r > self.params.domain_radius {
            return Err(ProbeError::OutsideMesh {
                point: point.to_array(),
            });
        }

        let i = self.current_at(self.time());
        let a = self.params.radius;
        let inside = r <= a;

        let j: CurrentDensity = if inside {
            (i / (a * a * PI)).into()
        } else {
            a_per_m2(0.0)
        };

        let r_m = r.get::<meter>();
        let b_mag: FluxDensity = if r_m == 0.0 {
            tesla(0.0)
        } else if inside {
            let a_m = a.get::<meter>();
            tesla(MU0 * i.get::<ampere>() * r_m / (2.0 * PI * a_m * a_m))
        } else {
            tesla(MU0 * i.get::<ampere>() / (2.0 * PI * r_m))
        };

        let azimuth = if r_m == 0.0 {
            Vector3::zeros()
        } else {
            Vector3::new(-point.y() / r_m, point.x() / r_m, 0.0)
        };

        let j = j.get::<ampere_per_square_meter>();
        let b_mag = b_mag.get::<magnetic_flux_density::tesla>();
        Ok((Vector3::new(0.0, 0.0, j), azimuth * b_mag))
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

impl FieldProbe for ConductorSimulation {
    fn current_time(&self) -> f64 {
        self.time().get::<second>()
    }

    fn query_fields_at(
        &mut self,
        components: &[BaseComponent],
        point: &SpatialPoint,
    ) -> Result<FieldReading, ProbeError> {
        let (j, b) = self.fields_at(point)?;
        let mut reading = FieldReading::new();
        for c in components {
            let field = match c.family() {
                Family::J => &j,
                Family::B => &b,
            };
            reading.insert(c.name(), vec![field[axis_index(c.axis())]]);
        }
        Ok(reading)
    }
}

impl SteppedSimulation for ConductorSimulation {
    fn advance(&mut self) -> HostResult<bool> {
        if self.step >= self.total_steps {
            return Ok(false);
        }
        self.step += 1;
        Ok(true)
    }
}
