use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loanscope_core::amortization;

/// Arguments for a single-loan payment breakdown
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan amount in currency units
    #[arg(long)]
    pub amount: Decimal,

    /// Annual interest rate as a percentage (5.99 = 5.99%)
    #[arg(long)]
    pub rate: Decimal,

    /// Duration in months
    #[arg(long)]
    pub duration: u32,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan amount in currency units
    #[arg(long)]
    pub amount: Decimal,

    /// Annual interest rate as a percentage (5.99 = 5.99%)
    #[arg(long)]
    pub rate: Decimal,

    /// Duration in months
    #[arg(long)]
    pub duration: u32,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let monthly = amortization::calculate_monthly_payment(args.amount, args.rate, args.duration)?;
    let total = amortization::calculate_total_payment(monthly, args.duration);
    let interest = amortization::calculate_total_interest(total, args.amount);

    Ok(serde_json::json!({
        "result": {
            "monthly_payment": monthly.round_dp(2),
            "total_payment": total.round_dp(2),
            "total_interest": interest.round_dp(2),
        },
        "assumptions": {
            "amount": args.amount.to_string(),
            "annual_rate_percent": args.rate.to_string(),
            "duration_months": args.duration,
        },
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule =
        amortization::generate_amortization_schedule(args.amount, args.rate, args.duration)?;
    Ok(serde_json::to_value(schedule)?)
}
