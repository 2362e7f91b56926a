mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{PaymentArgs, ScheduleArgs};
use commands::compare::CompareArgs;
use commands::offers::OffersArgs;

/// Loan offer comparison with decimal precision
#[derive(Parser)]
#[command(
    name = "loanscope",
    version,
    about = "Compare loan offers and compute amortization schedules",
    long_about = "A CLI for comparing loan offers with decimal precision. \
                  Computes annuity monthly payments, total cost and interest, \
                  full amortization schedules, and ranked comparisons across \
                  a catalog of offers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment, total cost and interest for a single loan
    Payment(PaymentArgs),
    /// Full month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Rank a catalog of offers for a requested amount and duration
    Compare(CompareArgs),
    /// Print the built-in demo offer catalog
    Offers(OffersArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Offers(args) => commands::offers::run_offers(args),
        Commands::Version => {
            println!("loanscope {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
