// src/bin/address_breakdown.rs
//
// Prints how one claimed/extracted address pair is scored: the eight
// weighted components used in score mode, then the token similarity and
// pincode gate used in pass mode. Handy when picking an address cutoff.

use anyhow::{bail, Result};
use clap::Parser;
use idverify_lib::matching::address::{normalize_address, AddressMatcher};
use idverify_lib::utils::constants::DEFAULT_ADDRESS_CUTOFF;
use idverify_lib::utils::env::init_logging;
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address as declared by the applicant
    #[arg(long)]
    claimed: String,

    /// Address as read off the document
    #[arg(long)]
    extracted: String,

    /// Pass-mode cutoff on the 0-100 scale
    #[arg(long, default_value_t = DEFAULT_ADDRESS_CUTOFF)]
    cutoff: f64,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    if !args.cutoff.is_finite() {
        bail!("--cutoff must be a finite number, got {}", args.cutoff);
    }

    info!("Scoring address pair with cutoff {:.1}", args.cutoff);
    let matcher = AddressMatcher::new(args.cutoff);

    println!("Claimed:   {}", args.claimed);
    println!("Extracted: {}", args.extracted);
    println!();
    println!("{:<18} {:>8} {:>8} {:>10}", "Component", "Score", "Weight", "Weighted");
    let scores = matcher.component_scores(&args.claimed, &args.extracted);
    for field in &scores {
        println!(
            "{:<18} {:>8.2} {:>8.3} {:>10.2}",
            field.component.label(),
            field.value,
            field.component.weight(),
            field.weighted()
        );
    }
    println!(
        "{:<18} {:>8} {:>8} {:>10.2}",
        "Total",
        "",
        "",
        matcher.score(&args.claimed, &args.extracted)
    );

    println!();
    println!("Normalized claimed:   {}", normalize_address(&args.claimed));
    println!("Normalized extracted: {}", normalize_address(&args.extracted));
    let pass = matcher.evaluate_pass(&args.claimed, &args.extracted);
    println!("Token similarity: {:.2}", pass.token_score);
    println!(
        "Pincode gate:     {}",
        if pass.pincode_match { "match" } else { "mismatch" }
    );
    println!(
        "Verdict:          {}",
        if pass.passed { "✅ pass" } else { "❌ fail" }
    );

    Ok(())
}
