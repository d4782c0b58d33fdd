//! The logging session: acquisition step and lifecycle hooks.

use fl_core::ensure_finite;
use fl_fields::{BaseComponent, ComponentValues, FieldResult, UnitTable, resolve};
use fl_plot::{
    GridBackend, GridSpec, GridState, PanelCoord, PlotError, VisualizationGrid, figure_title,
};
use fl_results::{SampleStore, StepFrame};
use tracing::{debug, info};

use crate::config::{LogConfig, LogPlan};
use crate::error::{AcqError, AcqResult};
use crate::probe::{FieldProbe, FieldReading};

/// Owns the sample store and the plot grid for one simulation run.
///
/// The host calls [`on_time_step_end`](Self::on_time_step_end) after every
/// completed step and [`on_solver_end`](Self::on_solver_end) once at the end.
pub struct LoggingSession<B: GridBackend> {
    components: Vec<BaseComponent>,
    units: UnitTable,
    output_stem: String,
    verbose: bool,
    store: SampleStore,
    grid: VisualizationGrid<B>,
}

impl<B: GridBackend> LoggingSession<B> {
    pub fn new(config: &LogConfig, backend: B) -> AcqResult<Self> {
        let plan = config.validate()?;
        Self::from_plan(plan, backend)
    }

    pub fn from_plan(plan: LogPlan, backend: B) -> AcqResult<Self> {
        let point_titles = plan
            .points
            .iter()
            .map(|p| format!("Point ({}): {}", plan.units.length, p))
            .collect();
        let quantity_labels = plan
            .quantities
            .iter()
            .map(|q| plan.units.axis_label(q.label()))
            .collect::<FieldResult<Vec<_>>>()?;

        let grid = VisualizationGrid::new(
            GridSpec {
                title: figure_title(&plan.output_stem),
                window_title: plan.window_title.clone(),
                point_titles,
                quantity_labels,
            },
            backend,
        )?;

        info!(
            points = plan.points.len(),
            quantities = plan.quantities.len(),
            "field logging ready (length unit: {})",
            plan.units.length
        );

        Ok(Self {
            store: SampleStore::new(&plan.points, plan.quantities),
            components: plan.components,
            units: plan.units,
            output_stem: plan.output_stem,
            verbose: plan.verbose,
            grid,
        })
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn grid(&self) -> &VisualizationGrid<B> {
        &self.grid
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn output_stem(&self) -> &str {
        &self.output_stem
    }

    pub fn step_count(&self) -> usize {
        self.store.step_count()
    }

    pub fn is_finished(&self) -> bool {
        self.grid.state() == GridState::Finalized
    }

    pub fn into_parts(self) -> (SampleStore, B) {
        (self.store, self.grid.into_backend())
    }

    /// Sample every point at the current simulation time and redraw.
    ///
    /// Either every (point, quantity) pair gets a sample for this step or
    /// none does. The samples are committed before the redraw, so a failing
    /// backend (`AcqError::Plot`) still leaves the step recorded.
    pub fn on_time_step_end<P: FieldProbe + ?Sized>(&mut self, probe: &mut P) -> AcqResult<()> {
        if self.is_finished() {
            return Err(PlotError::InvalidState {
                op: "acquire",
                state: self.grid.state(),
            }
            .into());
        }

        let step = self.store.step_count() + 1;
        info!(step, "data extraction at end of time step");

        let time = probe.current_time();
        let time =
            ensure_finite(time, "simulation time").map_err(|_| AcqError::NonFiniteTime(time))?;

        if self.verbose {
            let names: Vec<&str> = self.components.iter().map(|c| c.name()).collect();
            debug!(time, "querying {}", names.join(", "));
        }

        let frame = self.acquire(probe)?;
        self.store.commit_step(time, &frame)?;
        info!(step, time, "data extraction complete");

        let curves = self.panel_curves();
        self.grid.update(curves)?;
        Ok(())
    }

    /// Freeze the plots into their final view; blocks until dismissed.
    pub fn on_solver_end(&mut self) -> AcqResult<()> {
        info!(steps = self.store.step_count(), "solver finished, showing final view");
        self.grid.finalize()?;
        Ok(())
    }

    fn acquire<P: FieldProbe + ?Sized>(&self, probe: &mut P) -> AcqResult<StepFrame> {
        let mut frame = StepFrame::with_capacity(self.store.point_count());
        for (index, log_point) in self.store.points().iter().enumerate() {
            let reading = probe
                .query_fields_at(&self.components, log_point.point())
                .map_err(|source| AcqError::Probe {
                    point: index,
                    source,
                })?;
            if self.verbose {
                debug!(point = index, "reading {:?}", reading);
            }

            let values = extract(&reading, &self.components, index)?;
            if self.verbose {
                debug!(point = index, "components {:?}", values);
            }

            let row = self
                .store
                .quantities()
                .iter()
                .map(|q| resolve(q.quantity(), &values))
                .collect::<FieldResult<Vec<_>>>()?;
            frame.push_point(row);
        }
        Ok(frame)
    }

    fn panel_curves(&self) -> Vec<(PanelCoord, Vec<[f64; 2]>)> {
        self.store
            .points()
            .iter()
            .enumerate()
            .flat_map(|(p, log_point)| {
                log_point
                    .series()
                    .iter()
                    .enumerate()
                    .map(move |(q, series)| (PanelCoord::new(q, p), series.points()))
            })
            .collect()
    }
}

/// Take the single value the host returned for each requested component.
fn extract(
    reading: &FieldReading,
    components: &[BaseComponent],
    point: usize,
) -> AcqResult<ComponentValues> {
    let mut values = ComponentValues::new();
    for &component in components {
        let returned = reading
            .get(component.name())
            .ok_or_else(|| AcqError::UnexpectedShape {
                point,
                component: component.name(),
                reason: "missing from reply".to_string(),
            })?;
        match returned {
            [value] => {
                values.insert(component, *value);
            }
            other => {
                return Err(AcqError::UnexpectedShape {
                    point,
                    component: component.name(),
                    reason: format!("expected 1 value, got {}", other.len()),
                });
            }
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_takes_single_values() {
        let reading = FieldReading::new()
            .with("RJX", vec![3.0])
            .with("RJY", vec![4.0]);
        let values = extract(&reading, &[BaseComponent::Rjx, BaseComponent::Rjy], 0).unwrap();
        assert_eq!(values.get(BaseComponent::Rjx), Some(3.0));
        assert_eq!(values.get(BaseComponent::Rjy), Some(4.0));
    }

    #[test]
    fn extract_rejects_multi_valued_reply() {
        let reading = FieldReading::new().with("RJX", vec![3.0, 1.0]);
        let err = extract(&reading, &[BaseComponent::Rjx], 2).unwrap_err();
        assert!(matches!(
            err,
            AcqError::UnexpectedShape {
                point: 2,
                component: "RJX",
                ..
            }
        ));
    }

    #[test]
    fn extract_rejects_empty_or_missing() {
        let reading = FieldReading::new().with("RJX", vec![]);
        assert!(extract(&reading, &[BaseComponent::Rjx], 0).is_err());
        assert!(extract(&reading, &[BaseComponent::Rbz], 0).is_err());
    }
}
