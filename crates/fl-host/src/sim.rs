//! Step loop driving a logging session.

use fl_acquire::{FieldProbe, LoggingSession};
use fl_plot::GridBackend;
use tracing::info;

use crate::error::{HostError, HostResult};

/// Options for fixed-step runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 0.04,
            max_steps: 100_000,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> HostResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(HostError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !self.t_end.is_finite() || self.t_end < 0.0 {
            return Err(HostError::InvalidArg {
                what: "t_end must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(HostError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        Ok(())
    }

    /// Steps needed to reach `t_end`, capped by `max_steps`.
    pub fn step_count(&self) -> usize {
        let n = (self.t_end / self.dt - 1e-9).ceil().max(0.0) as usize;
        n.min(self.max_steps)
    }
}

/// A simulation that can be probed and advanced one step at a time.
pub trait SteppedSimulation: FieldProbe {
    /// Complete one time step. Returns `false` once the run is over and no
    /// step was taken.
    fn advance(&mut self) -> HostResult<bool>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub final_time: f64,
}

/// Advance `sim` to its end, sampling after every step, then finalize the
/// session's view.
pub fn run<S, B>(sim: &mut S, session: &mut LoggingSession<B>) -> HostResult<RunSummary>
where
    S: SteppedSimulation,
    B: GridBackend,
{
    let mut steps = 0;
    while sim.advance()? {
        steps += 1;
        session
            .on_time_step_end(&mut *sim)
            .map_err(|source| HostError::Acquire {
                step: steps,
                source,
            })?;
    }

    let final_time = sim.current_time();
    info!(steps, final_time, "run complete");
    session.on_solver_end().map_err(HostError::Finalize)?;

    Ok(RunSummary { steps, final_time })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.dt, 1e-3);
        assert_eq!(opts.t_end, 0.04);
        assert_eq!(opts.max_steps, 100_000);
        assert_eq!(opts.step_count(), 40);
    }

    #[test]
    fn sim_options_invalid() {
        let bad_dt = SimOptions {
            dt: 0.0,
            ..SimOptions::default()
        };
        assert!(bad_dt.validate().is_err());

        let bad_end = SimOptions {
            t_end: f64::NAN,
            ..SimOptions::default()
        };
        assert!(bad_end.validate().is_err());

        let no_steps = SimOptions {
            max_steps: 0,
            ..SimOptions::default()
        };
        assert!(no_steps.validate().is_err());
    }

    #[test]
    fn step_count_is_capped() {
        let opts = SimOptions {
            dt: 0.1,
            t_end: 0.25,
            max_steps: 2,
        };
        assert_eq!(opts.step_count(), 2);
        let opts = SimOptions {
            max_steps: 10,
            ..opts
        };
        assert_eq!(opts.step_count(), 3);
    }
}
