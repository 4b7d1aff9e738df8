use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use idverify_lib::ingestion::cases::load_cases;
use idverify_lib::matching::manager::VerificationEngine;
use idverify_lib::models::core::MatchMode;
use idverify_lib::models::report::VerificationReport;
use idverify_lib::utils::env::init_logging;
use idverify_lib::utils::progress_bars::logging::{log_batch_complete, log_batch_start};
use idverify_lib::utils::progress_bars::progress_config::ProgressConfig;
use idverify_lib::utils::verify_config::VerifyConfig;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Verify identity claims against document extractions", long_about = None)]
struct Args {
    /// JSON array of verification cases
    #[arg(short, long)]
    input: PathBuf,

    /// pass or score (overrides VERIFY_MODE)
    #[arg(short, long)]
    mode: Option<MatchMode>,

    /// Address cutoff on the 0-100 scale (overrides ADDRESS_CUTOFF)
    #[arg(long)]
    cutoff: Option<f64>,

    /// Include the address component breakdown in score mode
    #[arg(long)]
    breakdown: bool,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    info!("Starting identity verification run");
    let args = Args::parse();

    let mut config = VerifyConfig::from_env();
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(cutoff) = args.cutoff {
        if cutoff.is_finite() {
            config.address_cutoff = cutoff;
        } else {
            warn!("Ignoring --cutoff {}: not a finite number", cutoff);
        }
    }
    config.include_breakdown |= args.breakdown;
    config.log_config();

    let progress_config = ProgressConfig::from_env();

    let cases = load_cases(&args.input)
        .with_context(|| format!("Failed to load cases from {}", args.input.display()))?;

    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let start_time = Instant::now();
    log_batch_start(
        &run_id.to_string(),
        cases.len(),
        config.mode.as_str(),
        config.address_cutoff,
    );

    let engine = VerificationEngine::new(config.mode)
        .with_cutoff(config.address_cutoff)
        .with_breakdown(config.include_breakdown);

    let pb = progress_config.create_bar(cases.len() as u64);
    let (reports, summary) = engine.evaluate_batch_with(&cases, |report| {
        if let Some(pb) = &pb {
            pb.set_message(format!("Verified {}", report.case_id));
            pb.inc(1);
        }
    });
    if let Some(pb) = &pb {
        pb.finish_with_message(format!("{}/{} matched", summary.matched, summary.total));
    }

    log_batch_complete(
        &run_id.to_string(),
        &summary,
        start_time.elapsed().as_secs_f64(),
    );

    let report = VerificationReport::new(
        run_id,
        started_at,
        config.mode,
        config.address_cutoff,
        reports,
        summary,
    );
    let json = report
        .to_json_pretty()
        .context("Failed to serialize verification report")?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("📝 Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
