//! Runs the analytic conductor through a full logging session.

use std::f64::consts::PI;

use fl_acquire::{AcqError, LogConfig, LoggingSession, ProbeError};
use fl_core::constants::MU0;
use fl_host::{ConductorParams, ConductorSimulation, HostError, SimOptions, run};
use fl_plot::{GridState, PanelCoord, RecordingBackend};

fn config(points: Vec<[f64; 3]>) -> LogConfig {
    LogConfig {
        points,
        ..LogConfig::default()
    }
}

fn opts() -> SimOptions {
    SimOptions {
        dt: 1e-3,
        t_end: 0.02,
        max_steps: 1000,
    }
}

#[test]
fn full_period_logs_every_step() {
    let mut sim = ConductorSimulation::new(ConductorParams::default(), opts()).unwrap();
    let mut session = LoggingSession::new(
        &config(vec![[0.1, 0.0, 0.0], [0.0, 0.005, 0.0]]),
        RecordingBackend::default(),
    )
    .unwrap();

    let summary = run(&mut sim, &mut session).unwrap();
    assert_eq!(summary.steps, 20);
    assert!((summary.final_time - 0.02).abs() < 1e-12);
    assert!(session.is_finished());

    let store = session.store();
    assert_eq!(store.step_count(), 20);

    // Bmod outside the conductor follows mu0 |I| / (2 pi r).
    let bmod = store.series(0, 1).unwrap();
    for (&t, &b) in bmod.times().iter().zip(bmod.values()) {
        let i = 1000.0 * (2.0 * PI * 50.0 * t).sin();
        let expected = MU0 * i.abs() / (2.0 * PI * 0.1);
        assert!((b - expected).abs() < 1e-12, "t={t}: {b} vs {expected}");
    }

    // Jmod is zero outside and |I| / (pi a^2) inside.
    let jmod_outside = store.series(0, 0).unwrap();
    assert!(jmod_outside.values().iter().all(|&j| j == 0.0));
    let jmod_inside = store.series(1, 0).unwrap();
    let peak = jmod_inside
        .values()
        .iter()
        .cloned()
        .fold(0.0_f64, f64::max);
    assert!((peak - 1000.0 / (PI * 1e-4)).abs() / peak < 1e-9);

    let (_, backend) = session.into_parts();
    assert_eq!(backend.blocking_shows, 1);
    // one redraw per step plus the final view
    assert_eq!(backend.frames.len(), 21);
    let last = backend.frames.last().unwrap();
    assert_eq!(last.state, GridState::Finalized);
    assert_eq!(last.panel(PanelCoord::new(1, 1)).unwrap().points.len(), 20);
}

#[test]
fn point_outside_domain_fails_without_samples() {
    let mut sim = ConductorSimulation::new(ConductorParams::default(), opts()).unwrap();
    let mut session = LoggingSession::new(
        &config(vec![[0.1, 0.0, 0.0], [50.0, 0.0, 0.0]]),
        RecordingBackend::default(),
    )
    .unwrap();

    let err = run(&mut sim, &mut session).unwrap_err();
    match err {
        HostError::Acquire {
            step,
            source:
                AcqError::Probe {
                    point,
                    source: ProbeError::OutsideMesh { .. },
                },
        } => {
            assert_eq!(step, 1);
            assert_eq!(point, 1);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(session.store().step_count(), 0);
    assert!(session.store().series(0, 0).unwrap().is_empty());
    assert!(!session.is_finished());
}

#[test]
fn zero_length_run_still_finalizes() {
    let mut sim = ConductorSimulation::new(
        ConductorParams::default(),
        SimOptions {
            t_end: 0.0,
            ..opts()
        },
    )
    .unwrap();
    let mut session =
        LoggingSession::new(&config(vec![[0.1, 0.0, 0.0]]), RecordingBackend::default()).unwrap();

    let summary = run(&mut sim, &mut session).unwrap();
    assert_eq!(summary.steps, 0);
    assert!(session.is_finished());
    let (_, backend) = session.into_parts();
    assert_eq!(backend.blocking_shows, 1);
}
