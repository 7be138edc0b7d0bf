//! Shared helpers for CLI commands.

use std::fs;

use anyhow::{Context, Result};
use console::style;

use muninn_ir::QubitId;
use muninn_otoc::{CorrelatorMethod, DriftPolicy, OtocReport, RunConfig};

/// Simulation knobs shared by the `run` and `sweep` commands.
#[derive(clap::Args, Debug, Clone)]
pub struct SimArgs {
    /// Number of qubits in the register
    #[arg(short = 'n', long, default_value = "4")]
    pub qubits: u32,

    /// OTOC order k
    #[arg(short = 'k', long, default_value = "1")]
    pub order: usize,

    /// Measurement qubit m
    #[arg(long, default_value = "0")]
    pub target: u32,

    /// Perturbation qubit b (defaults to the last qubit)
    #[arg(long)]
    pub perturb: Option<u32>,

    /// Number of random circuit instances
    #[arg(short, long, default_value = "1000")]
    pub samples: usize,

    /// Master random seed
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Comma-separated discrete theta choices in radians
    #[arg(long, value_delimiter = ',')]
    pub theta_choices: Option<Vec<f64>>,

    /// Ceiling on state-vector memory in bytes
    #[arg(long, default_value = "268435456")]
    pub max_state_bytes: u64,

    /// Allowed norm deviation after a word application
    #[arg(long, default_value = "1e-9")]
    pub tolerance: f64,

    /// Behaviour when a sample's norm drifts (fail, discard)
    #[arg(long, default_value = "fail")]
    pub on_drift: String,

    /// Correlator extraction method (expectation, overlap)
    #[arg(long, default_value = "expectation")]
    pub method: String,

    /// Run samples sequentially instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,
}

/// Translate parsed arguments into a validated run configuration.
pub fn build_config(args: &SimArgs, cycles: u32) -> Result<RunConfig> {
    let mut config = RunConfig::new(args.qubits, cycles, args.order);
    config.target = QubitId(args.target);
    config.perturb = QubitId(args.perturb.unwrap_or(args.qubits.saturating_sub(1)));
    if let Some(choices) = &args.theta_choices {
        config.theta_choices = choices.clone();
    }
    config.samples = args.samples;
    config.seed = args.seed;
    config.max_state_bytes = args.max_state_bytes;
    config.norm_tolerance = args.tolerance;
    config.drift_policy = parse_drift_policy(&args.on_drift)?;
    config.method = parse_method(&args.method)?;
    config.parallel = !args.sequential;
    config.validate()?;
    Ok(config)
}

/// Parse the `--on-drift` flag.
pub fn parse_drift_policy(value: &str) -> Result<DriftPolicy> {
    match value.to_lowercase().as_str() {
        "fail" | "fail-fast" => Ok(DriftPolicy::FailFast),
        "discard" => Ok(DriftPolicy::Discard),
        other => anyhow::bail!("Unknown drift policy: '{other}'. Available: fail, discard"),
    }
}

/// Parse the `--method` flag.
pub fn parse_method(value: &str) -> Result<CorrelatorMethod> {
    match value.to_lowercase().as_str() {
        "expectation" => Ok(CorrelatorMethod::Expectation),
        "overlap" => Ok(CorrelatorMethod::Overlap),
        other => anyhow::bail!("Unknown method: '{other}'. Available: expectation, overlap"),
    }
}

/// Print one report as a styled key/value table.
pub fn print_report(report: &OtocReport) {
    println!(
        "{} OTOC^({}) over {} samples",
        style("→").cyan().bold(),
        report.order,
        report.samples
    );
    println!("  qubits:      {}", report.num_qubits);
    println!("  cycles:      {}", report.cycles);
    println!(
        "  mean:        {:+.6} {:+.6}i",
        report.mean_real, report.mean_imag
    );
    println!("  std error:   {:.6}", report.std_error);
    if report.discarded_samples > 0 {
        println!(
            "  {} {} sample(s) discarded after norm drift",
            style("!").yellow().bold(),
            report.discarded_samples
        );
    }
    println!("  seed:        {}", report.seed);
    println!("  elapsed:     {:.3}s", report.elapsed_seconds);
}

/// Write a JSON payload to a file.
pub fn export_json(path: &str, payload: &str) -> Result<()> {
    fs::write(path, payload).with_context(|| format!("Failed to write report to {path}"))?;
    println!(
        "{} Report written to {}",
        style("→").cyan().bold(),
        style(path).dim()
    );
    Ok(())
}
