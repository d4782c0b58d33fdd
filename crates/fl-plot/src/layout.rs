//! Panel addressing.

use crate::error::{PlotError, PlotResult};

/// Panel address: row = quantity, column = point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelCoord {
    pub quantity: usize,
    pub point: usize,
}

impl PanelCoord {
    pub fn new(quantity: usize, point: usize) -> Self {
        Self { quantity, point }
    }
}

/// Rows x columns of the grid. A single row or column is laid out the same
/// way as any other shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
}

impl GridLayout {
    pub fn new(quantities: usize, points: usize) -> PlotResult<Self> {
        if quantities == 0 || points == 0 {
            return Err(PlotError::EmptyLayout {
                rows: quantities,
                cols: points,
            });
        }
        Ok(Self {
            rows: quantities,
            cols: points,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn panel_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major storage index of a panel.
    pub fn index(&self, coord: PanelCoord) -> PlotResult<usize> {
        if coord.quantity >= self.rows || coord.point >= self.cols {
            return Err(PlotError::PanelOob {
                quantity: coord.quantity,
                point: coord.point,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(coord.quantity * self.cols + coord.point)
    }

    pub fn coord(&self, index: usize) -> PlotResult<PanelCoord> {
        if index >= self.panel_count() {
            return Err(PlotError::PanelOob {
                quantity: index / self.cols,
                point: index % self.cols,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(PanelCoord::new(index / self.cols, index % self.cols))
    }

    /// Every panel in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = PanelCoord> + '_ {
        (0..self.rows).flat_map(move |q| (0..self.cols).map(move |p| PanelCoord::new(q, p)))
    }

    pub fn is_top_row(&self, coord: PanelCoord) -> bool {
        coord.quantity == 0
    }

    pub fn is_bottom_row(&self, coord: PanelCoord) -> bool {
        coord.quantity + 1 == self.rows
    }

    pub fn is_left_column(&self, coord: PanelCoord) -> bool {
        coord.point == 0
    }
}
