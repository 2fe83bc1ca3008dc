//! curvefit CLI - Command Line Operations for Interpolation and Signal Repair
//!
//! This is the operational entry point for the curvefit libraries.
//!
//! # Commands
//!
//! - `curvefit eval --expr <e> --x <v>...` - Evaluate an expression
//! - `curvefit sample --expr <e> ...` - Sample an expression on a grid
//! - `curvefit fit --expr <e> ... --method all` - Compare interpolation methods
//! - `curvefit interpolate --input <points.csv> --method all` - Fit user data
//! - `curvefit optimise --expr <e> --target <t>` - Find the smallest sample count
//! - `curvefit denoise --input <in.csv> --output <out.csv>` - Repair a signal
//! - `curvefit generate --signal clicks --output <out.csv>` - Synthetic signal
//! - `curvefit check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate orchestrates `curvefit_core`,
//! `curvefit_optimiser` and `curvefit_denoise` behind one command line.

use anyhow::Context;
use clap::{Parser, Subcommand};
use curvefit_core::math::interpolators::InterpolatorKind;
use curvefit_core::sampling::SpacingMode;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod io;
mod output;

pub use error::{CliError, Result};

use commands::generate::{GenerateArgs, SignalKind};
use commands::optimise::OptimiseArgs;
use config::CliConfig;
use output::OutputFormat;

/// Interpolation, sampling and signal repair CLI
#[derive(Parser)]
#[command(name = "curvefit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "curvefit.toml")]
    config: PathBuf,

    /// Output format (table, json); overrides the configuration
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression at one or more points
    Eval {
        /// Expression in x, e.g. "sin(x) + x^2"
        #[arg(short, long)]
        expr: String,

        /// Points to evaluate at
        #[arg(short, long, num_args = 1.., required = true, allow_negative_numbers = true)]
        x: Vec<f64>,
    },

    /// Sample an expression on a grid
    Sample {
        /// Expression in x
        #[arg(short, long)]
        expr: String,

        /// Interval start
        #[arg(long, allow_negative_numbers = true)]
        x_min: f64,

        /// Interval end
        #[arg(long, allow_negative_numbers = true)]
        x_max: f64,

        /// Number of samples
        #[arg(short)]
        n: usize,

        /// Sample spacing (uniform, chebyshev)
        #[arg(short, long, default_value = "uniform")]
        spacing: SpacingMode,

        /// Write x,y rows to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fit interpolation methods to samples of an expression
    Fit {
        /// Expression in x
        #[arg(short, long)]
        expr: String,

        /// Interval start
        #[arg(long, allow_negative_numbers = true)]
        x_min: f64,

        /// Interval end
        #[arg(long, allow_negative_numbers = true)]
        x_max: f64,

        /// Number of samples
        #[arg(short)]
        n: usize,

        /// Sample spacing (uniform, chebyshev)
        #[arg(short, long, default_value = "uniform")]
        spacing: SpacingMode,

        /// Method name or "all"
        #[arg(short, long, default_value = "all")]
        method: String,

        /// Error-measurement grid size
        #[arg(short, long)]
        test_points: Option<usize>,
    },

    /// Fit interpolation methods to x,y points from a CSV file
    Interpolate {
        /// Input CSV with x and y columns
        #[arg(short, long)]
        input: PathBuf,

        /// Method name or "all"
        #[arg(short, long, default_value = "all")]
        method: String,

        /// Resampled curve size
        #[arg(short, long, default_value = "200")]
        points: usize,

        /// Also evaluate every method at this x
        #[arg(long, allow_negative_numbers = true)]
        at: Option<f64>,

        /// Write the resampled curve of the first method as x,y CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the method comparison as JSON
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Find the smallest Chebyshev sample count meeting an error target
    Optimise {
        /// Expression in x
        #[arg(short, long)]
        expr: String,

        /// Interval start
        #[arg(long, allow_negative_numbers = true)]
        x_min: f64,

        /// Interval end
        #[arg(long, allow_negative_numbers = true)]
        x_max: f64,

        /// Largest acceptable max error
        #[arg(long, default_value = "1e-4")]
        target: f64,

        /// Smallest sample count tried
        #[arg(long, default_value = "2")]
        min_n: usize,

        /// Largest sample count tried
        #[arg(long, default_value = "30")]
        max_n: usize,

        /// Interpolation method
        #[arg(short, long)]
        method: Option<InterpolatorKind>,

        /// Error-measurement grid size
        #[arg(short, long)]
        test_points: Option<usize>,

        /// Tabulate every count instead of stopping at the target
        #[arg(long)]
        analyse: bool,
    },

    /// Detect and repair outliers in a CSV signal
    Denoise {
        /// Input CSV with a value column
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV
        #[arg(short, long)]
        output: PathBuf,

        /// Interpolation method used for repair
        #[arg(short, long)]
        method: Option<InterpolatorKind>,

        /// Outlier threshold multiplier
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Repair window size in samples
        #[arg(short, long)]
        window: Option<usize>,

        /// Fit windows in parallel (true, false)
        #[arg(short, long)]
        parallel: Option<bool>,
    },

    /// Write a synthetic test signal to CSV
    Generate {
        /// Signal kind (sine, noise, clicks, gaps)
        #[arg(short, long, default_value = "clicks")]
        signal: SignalKind,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "44100")]
        samples: usize,

        /// Sample rate in Hz
        #[arg(short, long, default_value = "44100")]
        rate: u32,

        /// Sine frequency in Hz
        #[arg(long, default_value = "440")]
        frequency: f64,

        /// Sine amplitude
        #[arg(short, long, default_value = "0.5")]
        amplitude: f64,

        /// Uniform noise level
        #[arg(long, default_value = "0.01")]
        noise: f64,

        /// Number of clicks or gaps
        #[arg(long, default_value = "5")]
        count: usize,

        /// Output CSV
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Check system configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(&cli.config)
        .map(CliConfig::with_env_override)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config
        .validate()
        .with_context(|| format!("validating {}", cli.config.display()))?;

    // RUST_LOG wins over --verbose, which wins over the configured level
    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "Configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    dispatch(cli.command, &config, format)?;
    Ok(())
}

fn dispatch(command: Commands, config: &CliConfig, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Eval { expr, x } => commands::eval::run(&expr, &x, format),
        Commands::Sample {
            expr,
            x_min,
            x_max,
            n,
            spacing,
            output,
        } => commands::sample::run(&expr, x_min, x_max, n, spacing, output.as_deref(), format),
        Commands::Fit {
            expr,
            x_min,
            x_max,
            n,
            spacing,
            method,
            test_points,
        } => commands::fit::run(
            &expr,
            x_min,
            x_max,
            n,
            spacing,
            &method,
            test_points.unwrap_or(config.optimiser.test_points),
            format,
        ),
        Commands::Interpolate {
            input,
            method,
            points,
            at,
            output,
            report,
        } => commands::interpolate::run(
            &input,
            &method,
            points,
            at,
            output.as_deref(),
            report.as_deref(),
            format,
        ),
        Commands::Optimise {
            expr,
            x_min,
            x_max,
            target,
            min_n,
            max_n,
            method,
            test_points,
            analyse,
        } => {
            let args = OptimiseArgs {
                expr,
                x_min,
                x_max,
                target,
                min_n,
                max_n,
                method: method.unwrap_or(config.optimiser.method),
                test_points: test_points.unwrap_or(config.optimiser.test_points),
                analyse,
            };
            commands::optimise::run(&args, format)
        }
        Commands::Denoise {
            input,
            output,
            method,
            threshold,
            window,
            parallel,
        } => {
            let mut section = config.denoise.clone();
            section.threshold = threshold.unwrap_or(section.threshold);
            section.window = window.unwrap_or(section.window);
            commands::denoise::run(
                &input,
                &output,
                section.to_config(),
                method.unwrap_or(section.method),
                parallel.unwrap_or(section.parallel),
                format,
            )
        }
        Commands::Generate {
            signal,
            seed,
            samples,
            rate,
            frequency,
            amplitude,
            noise,
            count,
            output,
        } => {
            let args = GenerateArgs {
                signal,
                seed,
                samples,
                sample_rate: rate,
                frequency,
                amplitude,
                noise,
                count,
            };
            commands::generate::run(&args, &output)
        }
        Commands::Check => commands::check::run(config, format),
    }
}
