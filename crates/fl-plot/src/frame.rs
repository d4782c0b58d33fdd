//! Render-ready snapshot of the grid.

use fl_core::{Tolerances, nearly_equal};

use crate::grid::GridState;
use crate::layout::{GridLayout, PanelCoord};

/// Fraction of the data span added on each side of a panel's axes.
const MARGIN: f64 = 0.05;

/// Data extent of one panel, padded for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Bounds enclosing every finite point, or `None` if there are none.
    pub fn fit(points: &[[f64; 2]]) -> Option<Self> {
        let mut finite = points
            .iter()
            .filter(|[x, y]| x.is_finite() && y.is_finite());
        let &[x0, y0] = finite.next()?;
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
        for &[x, y] in finite {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        let (x_min, x_max) = pad(x_min, x_max);
        let (y_min, y_max) = pad(y_min, y_max);
        Some(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn contains(&self, [x, y]: [f64; 2]) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    if nearly_equal(lo, hi, Tolerances::default()) {
        // flat data: open a window around the value
        let half = (lo.abs() * MARGIN).max(0.5);
        return (lo - half, hi + half);
    }
    let m = (hi - lo) * MARGIN;
    (lo - m, hi + m)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelLabels {
    /// Per-point title, top row only.
    pub title: Option<String>,
    /// Quantity and unit, left column only.
    pub y_label: Option<String>,
    /// Shared time axis label, bottom row only.
    pub x_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub coord: PanelCoord,
    pub labels: PanelLabels,
    pub points: Vec<[f64; 2]>,
    pub bounds: Option<AxisBounds>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridFrame {
    pub title: String,
    pub window_title: String,
    pub layout: GridLayout,
    /// Row-major, see [`GridLayout::index`].
    pub panels: Vec<Panel>,
    pub state: GridState,
    /// Number of updates applied so far.
    pub revision: u64,
}

impl GridFrame {
    pub fn panel(&self, coord: PanelCoord) -> Option<&Panel> {
        self.layout
            .index(coord)
            .ok()
            .and_then(|i| self.panels.get(i))
    }

    /// Panels of one quantity row, left to right.
    pub fn row(&self, quantity: usize) -> &[Panel] {
        let cols = self.layout.cols();
        let start = (quantity * cols).min(self.panels.len());
        let end = (start + cols).min(self.panels.len());
        &self.panels[start..end]
    }
}
