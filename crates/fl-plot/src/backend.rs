//! Rendering seam.

use tracing::{debug, info};

use crate::error::PlotResult;
use crate::frame::GridFrame;

/// Something that can put a [`GridFrame`] on screen.
pub trait GridBackend {
    /// Show the latest frame. Must not wait for user input.
    fn redraw(&mut self, frame: &GridFrame) -> PlotResult<()>;

    /// Show the final frame and return once the operator dismisses it.
    fn show_blocking(&mut self, frame: &GridFrame) -> PlotResult<()>;
}

impl<B: GridBackend + ?Sized> GridBackend for Box<B> {
    fn redraw(&mut self, frame: &GridFrame) -> PlotResult<()> {
        (**self).redraw(frame)
    }

    fn show_blocking(&mut self, frame: &GridFrame) -> PlotResult<()> {
        (**self).show_blocking(frame)
    }
}

/// Backend without a display: frames go to the log.
///
/// The final view is written as a summary of each panel's last sample and
/// returns immediately, as there is nobody to dismiss it.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    redraws: u64,
}

impl HeadlessBackend {
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl GridBackend for HeadlessBackend {
    fn redraw(&mut self, frame: &GridFrame) -> PlotResult<()> {
        self.redraws += 1;
        for panel in &frame.panels {
            if let Some(b) = panel.bounds {
                debug!(
                    quantity = panel.coord.quantity,
                    point = panel.coord.point,
                    samples = panel.points.len(),
                    "panel x=[{:.4}, {:.4}] y=[{:.4e}, {:.4e}]",
                    b.x_min,
                    b.x_max,
                    b.y_min,
                    b.y_max
                );
            }
        }
        Ok(())
    }

    fn show_blocking(&mut self, frame: &GridFrame) -> PlotResult<()> {
        info!("{}", frame.title);
        for q in 0..frame.layout.rows() {
            let row = frame.row(q);
            let label = row
                .first()
                .and_then(|p| p.labels.y_label.clone())
                .unwrap_or_default();
            for panel in row {
                let title = frame
                    .panel(crate::layout::PanelCoord::new(0, panel.coord.point))
                    .and_then(|p| p.labels.title.clone())
                    .unwrap_or_default();
                match panel.points.last() {
                    Some([t, v]) => info!(
                        "{label} @ {title}: {v:.6e} (t = {t} s, {} samples)",
                        panel.points.len()
                    ),
                    None => info!("{label} @ {title}: no samples"),
                }
            }
        }
        Ok(())
    }
}

/// Keeps every frame it is handed. Used to observe the grid in tests.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub frames: Vec<GridFrame>,
    pub blocking_shows: usize,
}

impl GridBackend for RecordingBackend {
    fn redraw(&mut self, frame: &GridFrame) -> PlotResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn show_blocking(&mut self, frame: &GridFrame) -> PlotResult<()> {
        self.blocking_shows += 1;
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridSpec, VisualizationGrid};
    use crate::layout::PanelCoord;

    #[test]
    fn headless_counts_redraws_and_finishes() {
        let spec = GridSpec {
            title: "t".to_string(),
            window_title: "w".to_string(),
            point_titles: vec!["P0".to_string()],
            quantity_labels: vec!["Jmod in A/m²".to_string()],
        };
        let mut grid = VisualizationGrid::new(spec, HeadlessBackend::default()).unwrap();
        grid.update(vec![(PanelCoord::new(0, 0), vec![[0.0, 1.0]])])
            .unwrap();
        grid.finalize().unwrap();
        assert_eq!(grid.backend().redraws(), 1);
    }

    #[test]
    fn boxed_backend_forwards() {
        let spec = GridSpec {
            title: "t".to_string(),
            window_title: "w".to_string(),
            point_titles: vec!["P0".to_string()],
            quantity_labels: vec!["Bmod in T".to_string()],
        };
        let backend: Box<dyn GridBackend> = Box::new(HeadlessBackend::default());
        let mut grid = VisualizationGrid::new(spec, backend).unwrap();
        grid.update(vec![(PanelCoord::new(0, 0), vec![])]).unwrap();
        assert_eq!(grid.frame().revision, 1);
    }
}
