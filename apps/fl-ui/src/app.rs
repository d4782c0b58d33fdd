use fl_acquire::LogConfig;
use fl_host::{ConductorParams, SimOptions};
use fl_plot::{GridFrame, GridState};

use crate::grid_view::show_grid;
use crate::run_worker::{RunWorker, WorkerMessage};

pub struct FieldLogApp {
    worker: RunWorker,
    frame: Option<GridFrame>,
    error: Option<String>,
}

impl FieldLogApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: LogConfig,
        params: ConductorParams,
        opts: SimOptions,
    ) -> Self {
        let worker = RunWorker::start(config, params, opts, cc.egui_ctx.clone());
        Self {
            worker,
            frame: None,
            error: None,
        }
    }

    fn poll_worker(&mut self) {
        while let Ok(msg) = self.worker.rx.try_recv() {
            match msg {
                WorkerMessage::Frame(frame) => self.frame = Some(frame),
                WorkerMessage::Error { message } => self.error = Some(message),
            }
        }
    }

    fn is_finalized(&self) -> bool {
        self.frame
            .as_ref()
            .is_some_and(|f| f.state == GridState::Finalized)
    }

    /// The window may close once the run has ended, either finalized or failed.
    fn can_close(&self) -> bool {
        self.is_finalized() || self.error.is_some()
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.can_close() {
            self.worker.dismiss();
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let can_close = self.can_close();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.frame {
                    Some(frame) => {
                        ui.heading(&frame.title);
                        ui.separator();
                        let status = match frame.state {
                            GridState::Live => format!("live, redraw {}", frame.revision),
                            GridState::Finalized => "finished".to_string(),
                        };
                        ui.label(status);
                    }
                    None => {
                        ui.label("waiting for first step...");
                    }
                }

                if can_close {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.worker.dismiss();
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                }
            });
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    }
}

impl eframe::App for FieldLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.handle_close_request(ctx);
        self.show_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(frame) = &self.frame {
                show_grid(ui, frame);
            }
        });
    }
}

impl Drop for FieldLogApp {
    fn drop(&mut self) {
        self.worker.dismiss();
    }
}
