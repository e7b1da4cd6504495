//! Framegen Code Generator
//!
//! Generates Terraform plugin framework schemas, models, wrapper types, and
//! conversion functions from a JSON specification.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use framegen_gen::diff::{CheckOutcome, check_specifications};
use framegen_gen::errors::GeneratorError;
use framegen_gen::output::{GenerateOptions, generate_all, load_specification};
use framegen_gen::render::GoRenderer;

/// Framegen code generator - turns schema specifications into framework Go code
#[derive(Parser, Debug)]
#[command(name = "framegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one Go file per provider, resource, and data source
    Generate {
        /// Specification JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for generated packages
        #[arg(short, long, default_value = "internal")]
        output: PathBuf,

        /// Print generated code without writing files
        #[arg(long)]
        dry_run: bool,

        /// Only generate one item, e.g. "resource/thing"
        #[arg(long)]
        only: Option<String>,
    },
    /// Report whether regenerating from a specification would change output
    Check {
        /// Fresh specification JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Baseline specification JSON file
        #[arg(short, long)]
        baseline: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn generate(
    input: PathBuf,
    output: PathBuf,
    options: GenerateOptions,
) -> Result<ExitCode, GeneratorError> {
    let spec = load_specification(&input)?;
    let report = generate_all(&spec, &output, &options, &GoRenderer::new());

    for file in &report.generated {
        if options.dry_run {
            eprintln!("{} {}", "checked".cyan(), file.item);
        } else {
            eprintln!("{} {} -> {}", "wrote".green(), file.item, file.path.display());
        }
    }
    for failure in &report.failures {
        eprintln!("{} {}: {}", "failed".red().bold(), failure.item, failure.error);
    }

    if let Some(only) = &options.only
        && report.generated.is_empty()
        && report.failures.is_empty()
    {
        return Err(GeneratorError::ConfigError(format!(
            "No item matches '{}'",
            only
        )));
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn check(input: PathBuf, baseline: PathBuf) -> Result<ExitCode, GeneratorError> {
    let fresh = load_specification(&input)?;
    let baseline = load_specification(&baseline)?;

    let mut failed = false;
    for check in check_specifications(&baseline, &fresh) {
        match &check.outcome {
            CheckOutcome::Unchanged => println!("{} {}", "unchanged".dimmed(), check.item),
            CheckOutcome::Added => println!("{} {}", "added".green(), check.item),
            CheckOutcome::Removed => println!("{} {}", "removed".red(), check.item),
            CheckOutcome::Changed(changes) => {
                println!("{} {}", "changed".yellow(), check.item);
                for change in changes {
                    println!("    {}", change);
                }
            }
            CheckOutcome::Failed(error) => {
                failed = true;
                eprintln!("{} {}: {}", "failed".red().bold(), check.item, error);
            }
        }
    }

    if failed {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> Result<ExitCode, GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            input,
            output,
            dry_run,
            only,
        } => generate(input, output, GenerateOptions { dry_run, only }),
        Command::Check { input, baseline } => check(input, baseline),
    }
}
