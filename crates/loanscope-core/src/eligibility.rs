use rust_decimal::Decimal;

use crate::error::LoanscopeError;
use crate::types::{BorrowerProfile, LoanOffer, Money};
use crate::LoanscopeResult;

/// Can this offer service the requested amount and duration?
/// Boundary-inclusive on all four range comparisons.
pub fn is_eligible(offer: &LoanOffer, amount: Money, duration_months: u32) -> bool {
    amount >= offer.min_amount
        && amount <= offer.max_amount
        && duration_months >= offer.min_duration
        && duration_months <= offer.max_duration
}

/// Reject malformed catalog entries before they reach the calculation.
pub fn validate_offer(offer: &LoanOffer) -> LoanscopeResult<()> {
    let fail = |reason: &str| {
        Err(LoanscopeError::InvalidOffer {
            offer_id: offer.id.clone(),
            reason: reason.into(),
        })
    };

    if offer.id.trim().is_empty() {
        return Err(LoanscopeError::InvalidOffer {
            offer_id: "<unknown>".into(),
            reason: "Offer id must not be empty".into(),
        });
    }
    if offer.bank_name.trim().is_empty() {
        return fail("Bank name must not be empty");
    }
    if offer.interest_rate < Decimal::ZERO {
        return fail("Interest rate must not be negative");
    }
    if offer.min_amount < Decimal::ZERO {
        return fail("Minimum amount must not be negative");
    }
    if offer.min_amount > offer.max_amount {
        return fail("Minimum amount exceeds maximum amount");
    }
    if offer.min_duration > offer.max_duration {
        return fail("Minimum duration exceeds maximum duration");
    }
    if offer.max_duration == 0 {
        return fail("Maximum duration must be at least 1 month");
    }

    Ok(())
}

/// Screen an offer's borrower requirements against a profile. A check
/// applies only when the offer states the requirement AND the profile
/// provides the value; unknown data on either side never excludes. Only
/// a provided value that falls short does.
pub fn meets_requirements(offer: &LoanOffer, profile: &BorrowerProfile) -> bool {
    let req = &offer.requirements;

    if let (Some(min_score), Some(score)) = (req.min_credit_score, profile.credit_score) {
        if score < min_score {
            return false;
        }
    }

    if let (Some(min_income), Some(income)) = (req.min_income, profile.annual_income) {
        if income < min_income {
            return false;
        }
    }

    if let (Some(statuses), Some(status)) =
        (&req.employment_statuses, &profile.employment_status)
    {
        if !statuses.iter().any(|s| s.eq_ignore_ascii_case(status)) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeeStructure, OfferRequirements};
    use rust_decimal_macros::dec;

    fn offer() -> LoanOffer {
        LoanOffer {
            id: "test-bank".into(),
            bank_name: "Test Bank".into(),
            logo_url: None,
            interest_rate: dec!(5.99),
            min_amount: dec!(1000),
            max_amount: dec!(5000),
            min_duration: 12,
            max_duration: 60,
            fees: FeeStructure::default(),
            requirements: OfferRequirements::default(),
            affiliate_link: None,
            featured: None,
        }
    }

    #[test]
    fn test_amount_bounds_inclusive() {
        let o = offer();
        assert!(is_eligible(&o, dec!(1000), 36));
        assert!(is_eligible(&o, dec!(5000), 36));
        assert!(!is_eligible(&o, dec!(999), 36));
        assert!(!is_eligible(&o, dec!(5001), 36));
    }

    #[test]
    fn test_duration_bounds_inclusive() {
        let o = offer();
        assert!(is_eligible(&o, dec!(2000), 12));
        assert!(is_eligible(&o, dec!(2000), 60));
        assert!(!is_eligible(&o, dec!(2000), 11));
        assert!(!is_eligible(&o, dec!(2000), 61));
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let mut o = offer();
        o.min_amount = dec!(10000);
        assert!(validate_offer(&o).is_err());

        let mut o = offer();
        o.min_duration = 72;
        assert!(validate_offer(&o).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_identity() {
        let mut o = offer();
        o.id = "  ".into();
        assert!(validate_offer(&o).is_err());

        let mut o = offer();
        o.bank_name = String::new();
        assert!(validate_offer(&o).is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_offer() {
        assert!(validate_offer(&offer()).is_ok());
    }

    #[test]
    fn test_requirements_absent_never_exclude() {
        let o = offer();
        assert!(meets_requirements(&o, &BorrowerProfile::default()));
    }

    #[test]
    fn test_credit_score_requirement() {
        let mut o = offer();
        o.requirements.min_credit_score = Some(650);

        let strong = BorrowerProfile {
            credit_score: Some(700),
            ..Default::default()
        };
        let weak = BorrowerProfile {
            credit_score: Some(600),
            ..Default::default()
        };
        assert!(meets_requirements(&o, &strong));
        assert!(!meets_requirements(&o, &weak));
    }

    #[test]
    fn test_unanswered_profile_fields_never_exclude() {
        // Requirements only screen values the borrower actually provided
        let mut o = offer();
        o.requirements.min_credit_score = Some(650);
        o.requirements.min_income = Some(dec!(30000));
        o.requirements.employment_statuses = Some(vec!["Full-time".into()]);

        assert!(meets_requirements(&o, &BorrowerProfile::default()));

        // A provided field is still screened even when the others are unknown
        let p = BorrowerProfile {
            credit_score: Some(500),
            ..Default::default()
        };
        assert!(!meets_requirements(&o, &p));

        let p = BorrowerProfile {
            annual_income: Some(dec!(40000)),
            ..Default::default()
        };
        assert!(meets_requirements(&o, &p));
    }

    #[test]
    fn test_employment_status_case_insensitive() {
        let mut o = offer();
        o.requirements.employment_statuses = Some(vec!["Full-time".into(), "Part-time".into()]);

        let p = BorrowerProfile {
            employment_status: Some("full-time".into()),
            ..Default::default()
        };
        assert!(meets_requirements(&o, &p));

        let p = BorrowerProfile {
            employment_status: Some("Retired".into()),
            ..Default::default()
        };
        assert!(!meets_requirements(&o, &p));
    }
}
