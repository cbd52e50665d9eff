use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use scenario_core::project;
use tracing::{debug, info};

use scenario_ui::{
    app::Session,
    config::{self, AppConfig},
    csv_loader, export, logging,
    models::ScenarioForm,
    report,
    tui::TuiManager,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Real estate scenario comparator.
///
/// Compares keeping money invested, renovating an apartment to live in or to
/// rent out, and staying in the current home, over one shared horizon.
/// Starts the interactive terminal UI unless `--report` or `--batch` is given.
#[derive(Debug, Parser)]
#[command(name = "scenario-compare", version)]
struct Cli {
    /// TOML configuration file (logging and fallback defaults).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// TOML file of `[scenario] field = "value"` entries to pre-fill the form.
    #[arg(long, value_name = "FILE")]
    inputs: Option<PathBuf>,

    /// Pre-fill one form field, e.g. `investment.initial_amount=150000`.
    /// Repeatable; applied after `--inputs`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<String>,

    /// Print the comparison as text instead of starting the terminal UI.
    #[arg(long, conflicts_with = "batch")]
    report: bool,

    /// Project every row of a CSV file and write the results as CSV.
    #[arg(long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Destination for `--batch` results; stdout when omitted.
    #[arg(long, value_name = "FILE", requires = "batch")]
    out: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `scenario_ui=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Whether results go to stdout, in which case logs move to stderr.
    fn writes_stdout(&self) -> bool {
        self.report || (self.batch.is_some() && self.out.is_none())
    }
}

// ─── setup ───────────────────────────────────────────────────────────────────

/// Precedence: `--log-level`, then `RUST_LOG`, then the config file.
fn apply_logging(
    cli: &Cli,
    config: &AppConfig,
) -> Result<()> {
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    } else if !logging::env_filter_present() {
        logging::set_log_level(&config.logging.level)?;
    }

    if let Some(path) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        logging::enable_file_logging(path)?;
    }

    logging::set_stdout_enabled(config.logging.stdout)
}

fn build_form(cli: &Cli) -> Result<ScenarioForm> {
    let mut form = ScenarioForm::new();

    if let Some(path) = &cli.inputs {
        form = config::load_preset(&form, path)?;
        debug!(path = %path.display(), "applied input preset");
    }
    for assignment in &cli.assignments {
        form = config::apply_assignment(&form, assignment)?;
    }

    Ok(form)
}

// ─── modes ───────────────────────────────────────────────────────────────────

fn run_batch(
    path: &Path,
    out: Option<&Path>,
    config: &AppConfig,
) -> Result<()> {
    let rows = csv_loader::load_from_file(path)
        .with_context(|| format!("loading batch file '{}'", path.display()))?;

    let results: Vec<_> = rows
        .iter()
        .map(|row| (row.label.clone(), row.project(&config.defaults)))
        .collect();
    info!(rows = results.len(), "projected batch");

    match out {
        Some(out) => {
            let file = File::create(out)
                .with_context(|| format!("creating output file '{}'", out.display()))?;
            export::write_results(file, &results)?;
            info!(path = %out.display(), "wrote batch results");
        }
        None => export::write_results(io::stdout().lock(), &results)?,
    }

    Ok(())
}

fn run_report(
    form: &ScenarioForm,
    config: &AppConfig,
) {
    let results = project(&form.resolve(&config.defaults));
    print!("{}", report::render_report(&results));
}

fn run_interactive(
    form: ScenarioForm,
    config: &AppConfig,
) -> Result<()> {
    let mut tui = TuiManager::new(Session::new(form, config.defaults.clone()))?;
    tui.run()?;
    drop(tui);

    logging::set_stdout_enabled(config.logging.stdout)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_default_logging(cli.writes_stdout());

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    apply_logging(&cli, &config)?;

    let form = build_form(&cli)?;

    if let Some(path) = &cli.batch {
        return run_batch(path, cli.out.as_deref(), &config);
    }
    if cli.report {
        run_report(&form, &config);
        return Ok(());
    }
    run_interactive(form, &config)
}
