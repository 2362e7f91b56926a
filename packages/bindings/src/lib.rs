use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Single-loan request shape shared by the payment and schedule bindings.
#[derive(Deserialize)]
struct LoanRequest {
    loan_amount: Decimal,
    annual_rate_percent: Decimal,
    duration_months: u32,
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_loan_offers(input_json: String) -> NapiResult<String> {
    let input: loanscope_core::comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loanscope_core::comparison::compare_loan_offers(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let monthly = loanscope_core::amortization::calculate_monthly_payment(
        input.loan_amount,
        input.annual_rate_percent,
        input.duration_months,
    )
    .map_err(to_napi_error)?;
    let total =
        loanscope_core::amortization::calculate_total_payment(monthly, input.duration_months);
    let interest =
        loanscope_core::amortization::calculate_total_interest(total, input.loan_amount);

    serde_json::to_string(&serde_json::json!({
        "monthly_payment": monthly,
        "total_payment": total,
        "total_interest": interest,
    }))
    .map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule = loanscope_core::amortization::generate_amortization_schedule(
        input.loan_amount,
        input.annual_rate_percent,
        input.duration_months,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn sample_offers() -> NapiResult<String> {
    serde_json::to_string(&loanscope_core::catalog::sample_offers()).map_err(to_napi_error)
}
