use clap::{Args, Parser, Subcommand};
use fl_acquire::{AcqError, ConfigError, LogConfig, LoggingSession, load_yaml, save_yaml};
use fl_core::{amp, hz, m};
use fl_fields::{LogicalQuantity, UnitTable};
use fl_host::{ConductorParams, ConductorSimulation, HostError, SimOptions, run};
use fl_plot::HeadlessBackend;
use fl_results::{ResultsError, SampleStore, table_file_name, write_jsonl, write_table};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Acquire(#[from] AcqError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Results(#[from] ResultsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "fl-cli")]
#[command(about = "fieldlog CLI - log field quantities at probe points", long_about = None)]
struct Cli {
    /// Emit debug-level diagnostics (readings, component lists)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a log configuration file
    Check {
        /// Path to the log configuration YAML file
        config_path: PathBuf,
    },
    /// List the loggable quantities and the components each one needs
    Quantities,
    /// Write the default log configuration
    Init {
        /// Destination YAML file
        config_path: PathBuf,
    },
    /// Log fields from the analytic conductor simulation
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to the log configuration YAML file
    #[arg(short, long)]
    config: PathBuf,
    /// Time step in seconds
    #[arg(long, default_value_t = 1e-3)]
    dt: f64,
    /// End time in seconds
    #[arg(long, default_value_t = 0.04)]
    t_end: f64,
    /// Peak conductor current in amperes
    #[arg(long, default_value_t = 1000.0)]
    current: f64,
    /// Current frequency in hertz
    #[arg(long, default_value_t = 50.0)]
    frequency: f64,
    /// Conductor radius in metres
    #[arg(long, default_value_t = 0.01)]
    radius: f64,
    /// Write `<stem>_fields.txt` and `<stem>_fields.jsonl` after the run
    #[arg(long)]
    export: bool,
    /// Directory for exported files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Check { config_path } => cmd_check(&config_path),
        Commands::Quantities => {
            cmd_quantities();
            Ok(())
        }
        Commands::Init { config_path } => cmd_init(&config_path),
        Commands::Run(args) => cmd_run(&args, cli.verbose),
    }
}

fn cmd_check(config_path: &Path) -> CliResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = load_yaml(config_path)?;
    let plan = config.validate()?;
    println!("✓ Config is valid");
    println!("  Points: {}", plan.points.len());
    for (i, p) in plan.points.iter().enumerate() {
        println!("    [{i}] {p}");
    }
    let components: Vec<&str> = plan.components.iter().map(|c| c.name()).collect();
    println!("  Components: {}", components.join(", "));
    let quantities: Vec<&str> = plan.quantities.iter().map(|q| q.label()).collect();
    println!("  Quantities: {}", quantities.join(", "));
    println!("  Output stem: {}", plan.output_stem);
    Ok(())
}

fn cmd_quantities() {
    let units = UnitTable::default();
    println!("Loggable quantities:");
    for q in LogicalQuantity::ALL {
        let needs: Vec<&str> = q.required_components().iter().map(|c| c.name()).collect();
        println!(
            "  {:<5} [{}]  needs {}",
            q.name(),
            units.unit(q.dimension()),
            needs.join(", ")
        );
    }
}

fn cmd_init(config_path: &Path) -> CliResult<()> {
    save_yaml(config_path, &LogConfig::default())?;
    println!("✓ Wrote default config to {}", config_path.display());
    Ok(())
}

fn cmd_run(args: &RunArgs, verbose: bool) -> CliResult<()> {
    let mut config = load_yaml(&args.config)?;
    config.verbose |= verbose;

    let params = ConductorParams {
        radius: m(args.radius),
        peak_current: amp(args.current),
        frequency: hz(args.frequency),
        ..ConductorParams::default()
    };
    let opts = SimOptions {
        dt: args.dt,
        t_end: args.t_end,
        ..SimOptions::default()
    };

    println!("Running conductor simulation");
    println!("  dt = {:.3e} s, t_end = {:.3e} s", args.dt, args.t_end);

    let mut sim = ConductorSimulation::new(params, opts)?;
    let mut session = LoggingSession::new(&config, HeadlessBackend::default())?;

    let started = Instant::now();
    let summary = run(&mut sim, &mut session)?;
    let elapsed = started.elapsed().as_secs_f64();

    println!("✓ Logged {} steps in {:.3}s", summary.steps, elapsed);
    println!("  Final time: {:.4e} s", summary.final_time);

    let stem = session.output_stem().to_string();
    let units = session.units().clone();
    let (store, backend) = session.into_parts();
    println!("  Redraws: {}", backend.redraws());
    print_last_values(&store);

    if args.export {
        export(&store, &units, &args.out_dir, &stem)?;
    }
    Ok(())
}

fn print_last_values(store: &SampleStore) {
    if store.step_count() == 0 {
        return;
    }
    println!("\nLast sample:");
    for (i, log_point) in store.points().iter().enumerate() {
        let values: Vec<String> = store
            .quantities()
            .iter()
            .zip(log_point.series())
            .filter_map(|(spec, s)| {
                s.values()
                    .last()
                    .map(|v| format!("{}={:.4e}", spec.label(), v))
            })
            .collect();
        println!("  [{i}] {}  {}", log_point.point(), values.join("  "));
    }
}

fn export(store: &SampleStore, units: &UnitTable, dir: &Path, stem: &str) -> CliResult<()> {
    let table_path = dir.join(table_file_name(stem));
    write_table(store, units, BufWriter::new(File::create(&table_path)?))?;
    println!("✓ Wrote {}", table_path.display());

    let jsonl_path = dir.join(format!("{stem}_fields.jsonl"));
    write_jsonl(store, BufWriter::new(File::create(&jsonl_path)?))?;
    println!("✓ Wrote {}", jsonl_path.display());
    Ok(())
}
