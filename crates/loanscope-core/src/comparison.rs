use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::calculate_loan_details;
use crate::eligibility::{is_eligible, meets_requirements, validate_offer};
use crate::error::LoanscopeError;
use crate::types::*;
use crate::LoanscopeResult;

/// Input for a loan offer comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub offers: Vec<LoanOffer>,
    pub loan_amount: Money,
    pub duration_months: u32,
    /// Schedules are O(duration) per offer, so off by default
    #[serde(default)]
    pub include_schedule: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower: Option<BorrowerProfile>,
}

/// Rank a catalog of offers for a requested amount and duration.
///
/// Malformed catalog entries are a typed error. Offers whose ranges do
/// not contain the request are dropped silently; an empty result is a
/// valid outcome, not an error. Borrower screening exclusions are
/// surfaced as warnings. Ties in monthly payment keep catalog order.
pub fn compare_loan_offers(
    input: &ComparisonInput,
) -> LoanscopeResult<ComputationOutput<LoanComparisonResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.loan_amount <= Decimal::ZERO {
        return Err(LoanscopeError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount must be positive".into(),
        });
    }
    if input.duration_months == 0 {
        return Err(LoanscopeError::InvalidInput {
            field: "duration_months".into(),
            reason: "Duration must be at least 1 month".into(),
        });
    }

    for offer in &input.offers {
        validate_offer(offer)?;
    }

    let mut ranked: Vec<RankedOffer> = Vec::new();
    for offer in &input.offers {
        if !is_eligible(offer, input.loan_amount, input.duration_months) {
            continue;
        }
        if let Some(ref profile) = input.borrower {
            if !meets_requirements(offer, profile) {
                warnings.push(format!(
                    "Offer '{}' excluded: borrower does not meet lender requirements",
                    offer.id
                ));
                continue;
            }
        }

        let calculation = calculate_loan_details(
            offer,
            input.loan_amount,
            input.duration_months,
            input.include_schedule,
        )?;
        ranked.push(RankedOffer {
            offer: offer.clone(),
            calculation,
        });
    }

    // Vec::sort_by is stable, so equal payments keep catalog order
    ranked.sort_by(|a, b| {
        a.calculation
            .monthly_payment
            .cmp(&b.calculation.monthly_payment)
    });

    if ranked.is_empty() {
        warnings.push("No offers can service the requested amount and duration".into());
    }

    let output = LoanComparisonResult {
        loan_amount: input.loan_amount,
        duration: input.duration_months,
        offers: ranked,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity Loan Comparison",
        &serde_json::json!({
            "loan_amount": input.loan_amount.to_string(),
            "duration_months": input.duration_months,
            "include_schedule": input.include_schedule,
            "catalog_size": input.offers.len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
