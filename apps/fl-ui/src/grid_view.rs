use egui_plot::{Line, Plot, PlotPoints};
use fl_plot::{GridFrame, GridState, Panel};

const TITLE_HEIGHT: f32 = 18.0;

/// Draw the whole (quantity x point) grid into the available space.
pub fn show_grid(ui: &mut egui::Ui, frame: &GridFrame) {
    let rows = frame.layout.rows();
    let cols = frame.layout.cols();
    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let width = (available.x - spacing.x * (cols as f32 - 1.0)) / cols as f32;
    let height = (available.y - spacing.y * (rows as f32 - 1.0)) / rows as f32 - TITLE_HEIGHT;
    let size = egui::vec2(width.max(80.0), height.max(60.0));
    let interactive = frame.state == GridState::Finalized;

    egui::Grid::new("panel_grid")
        .spacing(spacing)
        .show(ui, |ui| {
            for q in 0..rows {
                for panel in frame.row(q) {
                    ui.vertical(|ui| show_panel(ui, panel, size, interactive));
                }
                ui.end_row();
            }
        });
}

fn show_panel(ui: &mut egui::Ui, panel: &Panel, size: egui::Vec2, interactive: bool) {
    match &panel.labels.title {
        Some(title) => {
            ui.label(egui::RichText::new(title).strong());
        }
        None => {
            ui.add_space(TITLE_HEIGHT);
        }
    }

    let mut plot = Plot::new(("panel", panel.coord.quantity, panel.coord.point))
        .width(size.x)
        .height(size.y)
        .allow_drag(interactive)
        .allow_zoom(interactive)
        .allow_scroll(interactive)
        .allow_boxed_zoom(interactive);
    if let Some(label) = &panel.labels.y_label {
        plot = plot.y_axis_label(label.clone());
    }
    if let Some(label) = &panel.labels.x_label {
        plot = plot.x_axis_label(label.clone());
    }
    // Live panels follow the autoscaled bounds; the final view starts there
    // and is then free to pan.
    if let Some(b) = panel.bounds {
        plot = plot
            .include_x(b.x_min)
            .include_x(b.x_max)
            .include_y(b.y_min)
            .include_y(b.y_max);
    }

    let points = PlotPoints::from(panel.points.clone());
    plot.show(ui, |plot_ui| {
        plot_ui.line(Line::new(points));
    });
}
