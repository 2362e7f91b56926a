use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanscopeError;
use crate::types::{AmortizationEntry, LoanCalculation, LoanOffer, Money, Rate};
use crate::LoanscopeResult;

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

fn check_loan_parameters(
    amount: Money,
    annual_rate_percent: Rate,
    duration_months: u32,
) -> LoanscopeResult<()> {
    if amount <= Decimal::ZERO {
        return Err(LoanscopeError::InvalidInput {
            field: "amount".into(),
            reason: "Loan amount must be positive".into(),
        });
    }
    if duration_months == 0 {
        return Err(LoanscopeError::InvalidInput {
            field: "duration_months".into(),
            reason: "Duration must be at least 1 month".into(),
        });
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(LoanscopeError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate must not be negative".into(),
        });
    }
    Ok(())
}

/// Annual percentage rate to monthly decimal rate (5.99 -> 0.0049916...)
fn monthly_rate(annual_rate_percent: Rate) -> Rate {
    annual_rate_percent / HUNDRED / MONTHS_PER_YEAR
}

/// Fixed monthly payment under the annuity formula:
/// `payment = amount * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly
/// decimal rate and `n` the number of months.
///
/// A zero rate degenerates the formula to 0/0, so it is special-cased as
/// straight-line repayment `amount / n`.
pub fn calculate_monthly_payment(
    amount: Money,
    annual_rate_percent: Rate,
    duration_months: u32,
) -> LoanscopeResult<Money> {
    check_loan_parameters(amount, annual_rate_percent, duration_months)?;

    let n = Decimal::from(duration_months);
    let r = monthly_rate(annual_rate_percent);
    if r.is_zero() {
        return Ok(amount / n);
    }

    // checked_powi: the growth factor overflows Decimal for extreme
    // rate/term combinations, which must surface as a typed error
    let growth = (Decimal::ONE + r)
        .checked_powi(duration_months as i64)
        .ok_or_else(|| LoanscopeError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: format!(
                "Rate {annual_rate_percent}% over {duration_months} months overflows the annuity formula"
            ),
        })?;
    Ok(amount * r * growth / (growth - Decimal::ONE))
}

/// Total paid over the full term. Unrounded.
pub fn calculate_total_payment(monthly_payment: Money, duration_months: u32) -> Money {
    monthly_payment * Decimal::from(duration_months)
}

/// Interest component of the total payment.
pub fn calculate_total_interest(total_payment: Money, loan_amount: Money) -> Money {
    total_payment - loan_amount
}

/// Month-by-month annuity schedule: the payment is fixed up front from
/// the full term, each month splits it into interest on the outstanding
/// balance and principal. The stored balance is floored at zero to absorb
/// rounding drift in the final month.
pub fn generate_amortization_schedule(
    loan_amount: Money,
    annual_rate_percent: Rate,
    duration_months: u32,
) -> LoanscopeResult<Vec<AmortizationEntry>> {
    let rate = monthly_rate(annual_rate_percent);
    let payment = calculate_monthly_payment(loan_amount, annual_rate_percent, duration_months)?;

    let mut schedule = Vec::with_capacity(duration_months as usize);
    let mut balance = loan_amount;

    for month in 1..=duration_months {
        let interest = balance * rate;
        let principal = payment - interest;
        balance -= principal;

        schedule.push(AmortizationEntry {
            month,
            payment,
            principal,
            interest,
            remaining_balance: balance.max(Decimal::ZERO),
        });
    }

    Ok(schedule)
}

/// Full set of derived figures for one offer. The schedule is the only
/// O(duration) part, so it is opt-in.
pub fn calculate_loan_details(
    offer: &LoanOffer,
    loan_amount: Money,
    duration_months: u32,
    include_schedule: bool,
) -> LoanscopeResult<LoanCalculation> {
    let monthly_payment =
        calculate_monthly_payment(loan_amount, offer.interest_rate, duration_months)?;
    let total_payment = calculate_total_payment(monthly_payment, duration_months);
    let total_interest = calculate_total_interest(total_payment, loan_amount);

    let amortization_schedule = if include_schedule {
        Some(generate_amortization_schedule(
            loan_amount,
            offer.interest_rate,
            duration_months,
        )?)
    } else {
        None
    };

    Ok(LoanCalculation {
        monthly_payment,
        total_payment,
        total_interest,
        amortization_schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_payment_standard_case() {
        // 10k at 6% over 36 months: r = 0.005, (1.005)^36 ≈ 1.19668
        let payment = calculate_monthly_payment(dec!(10000), dec!(6), 36).unwrap();
        assert_eq!(payment.round_dp(2), dec!(304.22));

        let total = calculate_total_payment(payment, 36);
        assert!((total - dec!(10951.90)).abs() < dec!(0.01));

        let interest = calculate_total_interest(total, dec!(10000));
        assert!((interest - dec!(951.90)).abs() < dec!(0.01));
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        let payment = calculate_monthly_payment(dec!(12000), Decimal::ZERO, 24).unwrap();
        assert_eq!(payment, dec!(500));

        let total = calculate_total_payment(payment, 24);
        assert_eq!(calculate_total_interest(total, dec!(12000)), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_payment_single_month() {
        // One payment repays principal plus one month of interest
        let payment = calculate_monthly_payment(dec!(1200), dec!(12), 1).unwrap();
        assert_eq!(payment, dec!(1212));
    }

    #[test]
    fn test_total_payment_covers_principal() {
        let payment = calculate_monthly_payment(dec!(25000), dec!(8.5), 48).unwrap();
        let total = calculate_total_payment(payment, 48);
        assert!(total >= dec!(25000));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(calculate_monthly_payment(Decimal::ZERO, dec!(5), 12).is_err());
        assert!(calculate_monthly_payment(dec!(-100), dec!(5), 12).is_err());
        assert!(calculate_monthly_payment(dec!(1000), dec!(5), 0).is_err());
        assert!(calculate_monthly_payment(dec!(1000), dec!(-1), 12).is_err());
    }

    #[test]
    fn test_extreme_rate_and_term_is_error_not_overflow() {
        // 1000% over 100 years: the growth factor exceeds Decimal's range
        let result = calculate_monthly_payment(dec!(10000), dec!(1000), 1200);
        assert!(matches!(result, Err(LoanscopeError::InvalidInput { .. })));

        let result = generate_amortization_schedule(dec!(10000), dec!(1000), 1200);
        assert!(matches!(result, Err(LoanscopeError::InvalidInput { .. })));
    }

    #[test]
    fn test_schedule_length_and_final_balance() {
        let schedule = generate_amortization_schedule(dec!(10000), dec!(6), 36).unwrap();
        assert_eq!(schedule.len(), 36);

        let last = schedule.last().unwrap();
        assert_eq!(last.month, 36);
        assert!(last.remaining_balance < dec!(0.01));
    }

    #[test]
    fn test_schedule_principal_sums_to_amount() {
        let schedule = generate_amortization_schedule(dec!(15000), dec!(7.25), 24).unwrap();
        let principal_total: Decimal = schedule.iter().map(|e| e.principal).sum();
        assert!((principal_total - dec!(15000)).abs() < dec!(0.01));
    }

    #[test]
    fn test_schedule_interest_declines() {
        let schedule = generate_amortization_schedule(dec!(10000), dec!(6), 12).unwrap();
        for pair in schedule.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
            assert!(pair[1].principal > pair[0].principal);
        }
    }

    #[test]
    fn test_schedule_zero_rate() {
        let schedule = generate_amortization_schedule(dec!(2400), Decimal::ZERO, 24).unwrap();
        assert_eq!(schedule.len(), 24);
        for entry in &schedule {
            assert_eq!(entry.payment, dec!(100));
            assert_eq!(entry.interest, Decimal::ZERO);
        }
        assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }
}
