//! Command line interface for the mortgage quote engine
//!
//! Single quotes from flags, batch runs over scenario CSVs, and
//! rate/deposit sensitivity sweeps.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use mortgage_engine::quote::{
    InvalidInput, Quote, QuoteEngine, QuoteRequest, DEFAULT_ANNUAL_RATE_PCT,
    DEFAULT_DEPOSIT_PCT, DEFAULT_PROPERTY_VALUE, DEFAULT_TERM_YEARS,
};
use mortgage_engine::scenario::{load_scenarios, SweepParams};
use mortgage_engine::schedules::{loader::load_schedule, SdltAssumptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the standard band table with a CSV file
    #[arg(long, global = true)]
    standard_bands: Option<PathBuf>,

    /// Override the first-time buyer band table with a CSV file
    #[arg(long, global = true)]
    ftb_bands: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a single quote and print the breakdown
    Quote {
        /// Purchase price in pounds
        #[arg(long)]
        property_value: f64,

        /// Cash deposit in pounds
        #[arg(long)]
        deposit: f64,

        /// Annual interest rate (percent)
        #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE_PCT)]
        rate: f64,

        /// Repayment term in years
        #[arg(long, default_value_t = DEFAULT_TERM_YEARS)]
        term: u32,

        /// Apply first-time buyer stamp duty relief where eligible
        #[arg(long)]
        first_time_buyer: bool,
    },

    /// Quote every scenario in a CSV file
    Batch {
        /// Input scenarios CSV
        input: PathBuf,

        /// Output CSV path
        #[arg(long, default_value = "quote_results.csv")]
        output: PathBuf,
    },

    /// Quote a rate/deposit sensitivity grid around a base case
    Sweep {
        #[arg(long, default_value_t = DEFAULT_PROPERTY_VALUE)]
        property_value: f64,

        /// Base deposit as a percentage of the purchase price
        #[arg(long, default_value_t = DEFAULT_DEPOSIT_PCT)]
        deposit_pct: f64,

        #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE_PCT)]
        rate: f64,

        #[arg(long, default_value_t = DEFAULT_TERM_YEARS)]
        term: u32,

        #[arg(long)]
        first_time_buyer: bool,

        /// Rate varies across base ± span (percentage points)
        #[arg(long, default_value_t = 1.0)]
        rate_span: f64,

        #[arg(long, default_value_t = 0.1)]
        rate_step: f64,

        /// Deposit percentage varies across base ± span
        #[arg(long, default_value_t = 5.0)]
        deposit_pct_span: f64,

        #[arg(long, default_value_t = 1.0)]
        deposit_pct_step: f64,

        #[arg(long, default_value = "sweep_results.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let engine = build_engine(&cli)?;

    match cli.command {
        Command::Quote {
            property_value,
            deposit,
            rate,
            term,
            first_time_buyer,
        } => run_quote(
            &engine,
            &QuoteRequest {
                property_value,
                deposit,
                annual_rate_pct: rate,
                term_years: term,
                first_time_buyer,
            },
        ),
        Command::Batch { input, output } => run_batch(&engine, &input, &output),
        Command::Sweep {
            property_value,
            deposit_pct,
            rate,
            term,
            first_time_buyer,
            rate_span,
            rate_step,
            deposit_pct_span,
            deposit_pct_step,
            output,
        } => {
            let params = SweepParams {
                property_value,
                deposit_pct,
                annual_rate_pct: rate,
                term_years: term,
                first_time_buyer,
                rate_span,
                rate_step,
                deposit_pct_span,
                deposit_pct_step,
            };
            run_sweep(&engine, &params, &output)
        }
    }
}

/// Default April 2025 tables, with either table replaceable from CSV
fn build_engine(cli: &Cli) -> Result<QuoteEngine> {
    let mut sdlt = SdltAssumptions::default();

    if let Some(path) = &cli.standard_bands {
        sdlt.standard = load_schedule(path, "standard", sdlt.standard.effective_from)?;
    }
    if let Some(path) = &cli.ftb_bands {
        sdlt.first_time_buyer =
            load_schedule(path, "first_time_buyer", sdlt.first_time_buyer.effective_from)?;
    }

    Ok(QuoteEngine::new(sdlt))
}

fn run_quote(engine: &QuoteEngine, request: &QuoteRequest) -> Result<()> {
    let quote = engine
        .quote(request)
        .with_context(|| "quote request rejected")?;

    println!("Quote for a £{:.0} purchase", request.property_value);
    println!("  Loan amount:      £{:.2}", quote.loan_amount);
    println!("  Loan to value:    {:.1}%", quote.ltv_pct);
    println!("  Deposit:          £{:.2} ({:.1}%)", request.deposit, quote.deposit_pct);
    println!("  Monthly payment:  £{:.2}", quote.monthly_payment);
    println!("  Total interest:   £{:.2}", quote.total_interest);
    println!("  Total cost:       £{:.2}", quote.total_cost);
    if quote.ftb_relief_applied {
        println!("  Stamp duty:       £{:.2} (first-time buyer relief)", quote.stamp_duty);
    } else {
        println!("  Stamp duty:       £{:.2}", quote.stamp_duty);
    }

    Ok(())
}

fn run_batch(engine: &QuoteEngine, input: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();
    println!("Loading scenarios from {}...", input.display());

    let scenarios = load_scenarios(input)?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let quote_start = Instant::now();
    let results: Vec<Result<Quote, InvalidInput>> =
        scenarios.par_iter().map(|s| engine.quote(s)).collect();
    println!("Quoted {} scenarios in {:?}", results.len(), quote_start.elapsed());

    write_results(output, &scenarios, &results)?;
    println!("Output written to {}", output.display());

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

fn run_sweep(engine: &QuoteEngine, params: &SweepParams, output: &Path) -> Result<()> {
    let start = Instant::now();
    let requests = params.generate();
    println!("Generated {} sweep points", requests.len());

    let results: Vec<Result<Quote, InvalidInput>> =
        requests.par_iter().map(|r| engine.quote(r)).collect();

    write_results(output, &requests, &results)?;
    println!("Output written to {}", output.display());

    // Payment range across the grid
    let payments: Vec<f64> = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|q| q.monthly_payment)
        .collect();
    if let (Some(min), Some(max)) = (
        payments.iter().cloned().reduce(f64::min),
        payments.iter().cloned().reduce(f64::max),
    ) {
        println!("\nSweep Summary:");
        println!("  Monthly payment: £{:.2} to £{:.2}", min, max);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

fn write_results(
    output: &Path,
    requests: &[QuoteRequest],
    results: &[Result<Quote, InvalidInput>],
) -> Result<()> {
    let mut file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;

    writeln!(
        file,
        "PropertyValue,Deposit,RatePct,TermYears,FirstTimeBuyer,LoanAmount,LtvPct,MonthlyPayment,TotalInterest,TotalCost,StampDuty,FtbReliefApplied"
    )?;

    let mut rejected = 0usize;
    for (request, result) in requests.iter().zip(results) {
        match result {
            Ok(quote) => {
                writeln!(
                    file,
                    "{:.2},{:.2},{},{},{},{:.2},{:.4},{:.2},{:.2},{:.2},{:.2},{}",
                    request.property_value,
                    request.deposit,
                    request.annual_rate_pct,
                    request.term_years,
                    request.first_time_buyer,
                    quote.loan_amount,
                    quote.ltv_pct,
                    quote.monthly_payment,
                    quote.total_interest,
                    quote.total_cost,
                    quote.stamp_duty,
                    quote.ftb_relief_applied,
                )?;
            }
            Err(e) => {
                rejected += 1;
                log::warn!(
                    "skipping scenario (value £{}, deposit £{}): {}",
                    request.property_value,
                    request.deposit,
                    e
                );
            }
        }
    }

    if rejected > 0 {
        println!("Skipped {} invalid scenarios (see warnings)", rejected);
    }
    Ok(())
}
