use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use fl_acquire::{LogConfig, LoggingSession};
use fl_host::{ConductorParams, ConductorSimulation, SimOptions};
use fl_plot::{GridBackend, GridFrame, PlotError, PlotResult};

/// Pause after each live redraw so the run is watchable.
const STEP_PACING: Duration = Duration::from_millis(25);

#[derive(Debug)]
pub enum WorkerMessage {
    Frame(GridFrame),
    Error { message: String },
}

/// Sends frames to the UI thread; the final view blocks until the UI
/// dismisses it (or goes away).
struct ChannelBackend {
    tx: Sender<WorkerMessage>,
    dismiss_rx: Receiver<()>,
    ctx: egui::Context,
    pacing: Duration,
}

impl ChannelBackend {
    fn send(&self, frame: &GridFrame) -> PlotResult<()> {
        self.tx
            .send(WorkerMessage::Frame(frame.clone()))
            .map_err(|_| PlotError::Backend {
                message: "viewer closed".to_string(),
            })?;
        self.ctx.request_repaint();
        Ok(())
    }
}

impl GridBackend for ChannelBackend {
    fn redraw(&mut self, frame: &GridFrame) -> PlotResult<()> {
        self.send(frame)?;
        thread::sleep(self.pacing);
        Ok(())
    }

    fn show_blocking(&mut self, frame: &GridFrame) -> PlotResult<()> {
        self.send(frame)?;
        // A dropped sender counts as dismissal.
        let _ = self.dismiss_rx.recv();
        Ok(())
    }
}

pub struct RunWorker {
    pub rx: Receiver<WorkerMessage>,
    dismiss_tx: Option<Sender<()>>,
    _handle: JoinHandle<()>,
}

impl RunWorker {
    pub fn start(
        config: LogConfig,
        params: ConductorParams,
        opts: SimOptions,
        ctx: egui::Context,
    ) -> Self {
        let (tx, rx) = channel();
        let (dismiss_tx, dismiss_rx) = channel();

        let handle = thread::spawn(move || {
            let backend = ChannelBackend {
                tx: tx.clone(),
                dismiss_rx,
                ctx: ctx.clone(),
                pacing: STEP_PACING,
            };
            if let Err(message) = Self::run_simulation(&config, params, opts, backend) {
                tracing::error!("{message}");
                let _ = tx.send(WorkerMessage::Error { message });
                ctx.request_repaint();
            }
        });

        Self {
            rx,
            dismiss_tx: Some(dismiss_tx),
            _handle: handle,
        }
    }

    fn run_simulation(
        config: &LogConfig,
        params: ConductorParams,
        opts: SimOptions,
        backend: ChannelBackend,
    ) -> Result<(), String> {
        let mut session =
            LoggingSession::new(config, backend).map_err(|e| format!("Setup failed: {e}"))?;
        let mut sim =
            ConductorSimulation::new(params, opts).map_err(|e| format!("Setup failed: {e}"))?;
        let summary = fl_host::run(&mut sim, &mut session).map_err(|e| e.to_string())?;
        tracing::info!(steps = summary.steps, "viewer dismissed");
        Ok(())
    }

    /// Release the blocked final view. Idempotent.
    pub fn dismiss(&mut self) {
        if let Some(tx) = self.dismiss_tx.take() {
            let _ = tx.send(());
        }
    }
}
