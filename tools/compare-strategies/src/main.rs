// Print the direct DCT-II next to every FFT-based strategy and fail on disagreement

use anyhow::{bail, Context, Result};
use clap::Parser;
use dctfft::consts::{DEFAULT_DIGITS, DEFAULT_INPUT, DEFAULT_TOLERANCE};
use dctfft::{compare_strategies, sweep, CompareOptions, FftBackend, Sequence};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "compare-strategies", version, about)]
struct Args {
    /// Input samples (defaults to 1 2 3 4 5 6 7 8)
    #[arg(allow_negative_numbers = true, conflicts_with_all = ["ramp", "sweep"])]
    values: Vec<f64>,

    /// Use the ramp 1..=N as input
    #[arg(long, value_name = "N", conflicts_with = "sweep")]
    ramp: Option<usize>,

    /// Compare ramps of each listed length in parallel and print a summary
    #[arg(long, value_name = "N,...", value_delimiter = ',')]
    sweep: Option<Vec<usize>>,

    /// Decimal digits shown for each coefficient
    #[arg(long, default_value_t = DEFAULT_DIGITS)]
    digits: u32,

    /// Absolute per-element tolerance
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// FFT implementation: rustfft or naive
    #[arg(long, default_value = "rustfft")]
    backend: FftBackend,

    /// Only compare each strategy against the direct result
    #[arg(long)]
    no_cross_validate: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = CompareOptions::new()
        .digits(args.digits)
        .tolerance(args.tolerance)
        .backend(args.backend)
        .cross_validate(!args.no_cross_validate);
    options.validate().context("invalid options")?;
    tracing::debug!(?options, "comparing strategies");

    if let Some(lengths) = &args.sweep {
        return run_sweep(lengths, &options);
    }

    let input = match args.ramp {
        Some(len) => Sequence::<f64>::ramp(len)
            .context("invalid ramp length")?
            .into_inner(),
        None if args.values.is_empty() => DEFAULT_INPUT.to_vec(),
        None => args.values,
    };

    let comparison = compare_strategies(&input, &options).context("comparison failed")?;
    println!("{comparison}");
    comparison
        .verify()
        .context("FFT-based strategies disagree with the direct DCT-II")?;
    println!("\nall strategies agree within {:e}", options.tolerance);
    Ok(())
}

fn run_sweep(lengths: &[usize], options: &CompareOptions) -> Result<()> {
    let comparisons = sweep(lengths, options).context("sweep failed")?;

    println!("{:>8}  {:>12}  result", "N", "worst err");
    let mut failures = 0;
    for comparison in &comparisons {
        let status = match comparison.verify() {
            Ok(()) => "ok".to_string(),
            Err(e) => {
                failures += 1;
                e.to_string()
            }
        };
        println!(
            "{:>8}  {:>12.3e}  {}",
            comparison.len(),
            comparison.worst_error(),
            status
        );
    }

    if failures > 0 {
        bail!("{failures} of {} lengths failed", comparisons.len());
    }
    Ok(())
}
