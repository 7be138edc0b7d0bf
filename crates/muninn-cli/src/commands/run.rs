//! Run command implementation.
//!
//! Estimate OTOC^(k) at a fixed circuit depth and print or export the
//! aggregated report.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use muninn_otoc::OtocEstimator;

use super::common::{self, SimArgs};

/// Execute the run command.
pub fn execute(args: &SimArgs, cycles: u32, format: &str, export: Option<&str>) -> Result<()> {
    let config = common::build_config(args, cycles)?;

    let mut estimator = OtocEstimator::new(config);
    let progress = if format == "json" {
        None
    } else {
        let bar = ProgressBar::new(args.samples as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} samples")?
                .progress_chars("=> "),
        );
        estimator = estimator.with_progress({
            let bar = bar.clone();
            move || bar.inc(1)
        });
        Some(bar)
    };

    let report = estimator.estimate()?;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => common::print_report(&report),
    }

    if let Some(path) = export {
        common::export_json(path, &serde_json::to_string_pretty(&report)?)?;
    }

    Ok(())
}
