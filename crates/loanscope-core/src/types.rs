use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest rates expressed as annual percentages (5.99 = 5.99% p.a.).
pub type Rate = Decimal;

/// Fees attached to a loan offer. All components are optional; a missing
/// component means the lender does not charge it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeStructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_repayment: Option<Money>,
}

/// Borrower-side requirements a lender attaches to an offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_income: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_credit_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_statuses: Option<Vec<String>>,
}

/// A single catalog entry as produced by the offer source.
/// Immutable for the duration of one comparison call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: String,
    pub bank_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Annual rate as a percentage (5.99 means 5.99%)
    pub interest_rate: Rate,
    pub min_amount: Money,
    pub max_amount: Money,
    /// Whole months
    pub min_duration: u32,
    pub max_duration: u32,
    #[serde(default)]
    pub fees: FeeStructure,
    #[serde(default)]
    pub requirements: OfferRequirements,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// What the caller knows about the borrower. Used for optional
/// requirement screening; absent fields never exclude an offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BorrowerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
}

/// One row of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based month index
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub remaining_balance: Money,
}

/// Derived figures for one offer at a requested amount and duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanCalculation {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortization_schedule: Option<Vec<AmortizationEntry>>,
}

/// An offer paired with its calculation, as ranked by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedOffer {
    pub offer: LoanOffer,
    pub calculation: LoanCalculation,
}

/// Final output of a comparison: the request echoed back plus the
/// eligible offers sorted ascending by monthly payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanComparisonResult {
    pub loan_amount: Money,
    pub duration: u32,
    pub offers: Vec<RankedOffer>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
