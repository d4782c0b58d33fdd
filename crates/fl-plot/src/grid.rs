//! The panel grid and its Live -> Finalized lifecycle.

use chrono::Local;

use crate::backend::GridBackend;
use crate::error::{PlotError, PlotResult};
use crate::frame::{AxisBounds, GridFrame, Panel, PanelLabels};
use crate::layout::{GridLayout, PanelCoord};

pub const TIME_AXIS_LABEL: &str = "Time in s";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    /// Accepting updates; redraws never block.
    Live,
    /// Terminal. The last frame stays on screen until dismissed.
    Finalized,
}

/// Titles and labels fixed at setup.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub title: String,
    pub window_title: String,
    /// One per column.
    pub point_titles: Vec<String>,
    /// One per row, already joined with the unit.
    pub quantity_labels: Vec<String>,
}

/// `Logfile: <stem>, Output: <local time>`
pub fn figure_title(stem: &str) -> String {
    format!("Logfile: {}, Output: {}", stem, Local::now().format("%c"))
}

pub struct VisualizationGrid<B: GridBackend> {
    frame: GridFrame,
    backend: B,
}

impl<B: GridBackend> VisualizationGrid<B> {
    pub fn new(spec: GridSpec, backend: B) -> PlotResult<Self> {
        let layout = GridLayout::new(spec.quantity_labels.len(), spec.point_titles.len())?;
        let panels = layout
            .coords()
            .map(|coord| Panel {
                coord,
                labels: PanelLabels {
                    title: layout
                        .is_top_row(coord)
                        .then(|| spec.point_titles[coord.point].clone()),
                    y_label: layout
                        .is_left_column(coord)
                        .then(|| spec.quantity_labels[coord.quantity].clone()),
                    x_label: layout
                        .is_bottom_row(coord)
                        .then(|| TIME_AXIS_LABEL.to_string()),
                },
                points: Vec::new(),
                bounds: None,
            })
            .collect();

        Ok(Self {
            frame: GridFrame {
                title: spec.title,
                window_title: spec.window_title,
                layout,
                panels,
                state: GridState::Live,
                revision: 0,
            },
            backend,
        })
    }

    pub fn layout(&self) -> GridLayout {
        self.frame.layout
    }

    pub fn state(&self) -> GridState {
        self.frame.state
    }

    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Replace every panel's curve with its full current series and rescale.
    ///
    /// `curves` must name each panel exactly once; on mismatch no panel changes.
    pub fn update(&mut self, curves: Vec<(PanelCoord, Vec<[f64; 2]>)>) -> PlotResult<()> {
        if self.frame.state != GridState::Live {
            return Err(PlotError::InvalidState {
                op: "update",
                state: self.frame.state,
            });
        }

        let layout = self.frame.layout;
        if curves.len() != layout.panel_count() {
            return Err(PlotError::PanelMismatch {
                reason: format!(
                    "expected {} curves, got {}",
                    layout.panel_count(),
                    curves.len()
                ),
            });
        }

        let mut staged: Vec<Option<Vec<[f64; 2]>>> = vec![None; layout.panel_count()];
        for (coord, points) in curves {
            let slot = &mut staged[layout.index(coord)?];
            if slot.is_some() {
                return Err(PlotError::PanelMismatch {
                    reason: format!(
                        "panel ({}, {}) given twice",
                        coord.quantity, coord.point
                    ),
                });
            }
            *slot = Some(points);
        }

        // Length matched and no duplicates, so every slot is filled.
        for (panel, points) in self.frame.panels.iter_mut().zip(staged) {
            let points = points.unwrap_or_default();
            panel.bounds = AxisBounds::fit(&points);
            panel.points = points;
        }
        self.frame.revision += 1;

        self.backend.redraw(&self.frame)
    }

    /// Switch to the final view and block until the backend reports dismissal.
    pub fn finalize(&mut self) -> PlotResult<()> {
        if self.frame.state != GridState::Live {
            return Err(PlotError::InvalidState {
                op: "finalize",
                state: self.frame.state,
            });
        }
        self.frame.state = GridState::Finalized;
        self.backend.show_blocking(&self.frame)
    }
}
