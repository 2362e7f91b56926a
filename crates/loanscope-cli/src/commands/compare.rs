use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loanscope_core::catalog;
use loanscope_core::comparison::{self, ComparisonInput};

use crate::input;

/// Arguments for a loan offer comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON ComparisonInput (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Requested loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Requested duration in months
    #[arg(long)]
    pub duration: Option<u32>,

    /// Include the month-by-month amortization schedule per offer
    #[arg(long)]
    pub schedule: bool,

    /// Path to a JSON array of offers; defaults to the demo catalog
    #[arg(long)]
    pub offers: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison_input: ComparisonInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let offers = match args.offers {
            Some(ref path) => input::file::read_json(path)?,
            None => catalog::sample_offers(),
        };
        ComparisonInput {
            offers,
            loan_amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            duration_months: args
                .duration
                .ok_or("--duration is required (or provide --input)")?,
            include_schedule: args.schedule,
            borrower: None,
        }
    };

    let result = comparison::compare_loan_offers(&comparison_input)?;
    Ok(serde_json::to_value(result)?)
}
