//! # coupon-gen CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

/// Generate and validate short, typo-resistant coupon codes.
#[derive(Parser, Debug)]
#[command(name = "coupon-gen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Issue a batch of distinct codes.
    Generate(coupon_cli::generate::GenerateArgs),
    /// Check codes and print their normalized form.
    Validate(coupon_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate(args) => {
            let issued = coupon_cli::generate::run(&args, &mut out)?;
            out.flush()?;
            eprintln!("{} generated", issued);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate(args) => {
            let all_valid = coupon_cli::validate::run(&args, &mut out)?;
            out.flush()?;
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
