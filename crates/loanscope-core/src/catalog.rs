//! Shim around the external offer source. The engine itself never
//! touches this module; callers fetch (or mock) a catalog here and pass
//! plain offer slices into the comparison.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use std::time::{Duration, Instant};

use crate::types::{FeeStructure, LoanOffer, OfferRequirements};

/// How long a fetched catalog stays usable before callers should refetch.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// The demo catalog the offer source produces when no live data is wired
/// up. Mirrors the mock bank configurations of the scraping collaborator.
pub fn sample_offers() -> Vec<LoanOffer> {
    vec![
        LoanOffer {
            id: "first-national-bank".into(),
            bank_name: "First National Bank".into(),
            logo_url: Some("https://placehold.co/100x50/4F46E5/FFFFFF?text=FNB".into()),
            interest_rate: dec!(5.99),
            min_amount: dec!(5000),
            max_amount: dec!(50000),
            min_duration: 12,
            max_duration: 60,
            fees: FeeStructure {
                establishment: Some(dec!(150)),
                monthly: Some(dec!(10)),
                early_repayment: Some(dec!(0)),
            },
            requirements: OfferRequirements {
                min_income: Some(dec!(30000)),
                min_credit_score: Some(650),
                employment_statuses: Some(vec![
                    "Full-time".into(),
                    "Part-time".into(),
                    "Self-employed".into(),
                ]),
            },
            affiliate_link: Some("https://example.com/fnb".into()),
            featured: Some(true),
        },
        LoanOffer {
            id: "city-credit-union".into(),
            bank_name: "City Credit Union".into(),
            logo_url: Some("https://placehold.co/100x50/10B981/FFFFFF?text=CCU".into()),
            interest_rate: dec!(6.49),
            min_amount: dec!(2000),
            max_amount: dec!(30000),
            min_duration: 6,
            max_duration: 48,
            fees: FeeStructure {
                establishment: Some(dec!(100)),
                monthly: Some(dec!(5)),
                early_repayment: Some(dec!(1)),
            },
            requirements: OfferRequirements {
                min_income: Some(dec!(25000)),
                min_credit_score: Some(600),
                employment_statuses: Some(vec!["Full-time".into(), "Part-time".into()]),
            },
            affiliate_link: Some("https://example.com/ccu".into()),
            featured: None,
        },
    ]
}

/// An explicit, caller-owned cache of fetched offers with a fixed TTL.
/// Deliberately a plain value: sharing across threads is the caller's
/// concern, and the comparison engine never sees it.
#[derive(Debug, Clone)]
pub struct OfferCache {
    offers: Vec<LoanOffer>,
    fetched_at: Option<Instant>,
    last_updated: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl OfferCache {
    pub fn new(ttl: Duration) -> Self {
        OfferCache {
            offers: Vec::new(),
            fetched_at: None,
            last_updated: None,
            ttl,
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }

    /// Replace the cached catalog and restart the TTL clock.
    pub fn store(&mut self, offers: Vec<LoanOffer>) {
        self.offers = offers;
        self.fetched_at = Some(Instant::now());
        self.last_updated = Some(Utc::now());
    }

    /// The cached offers, or None when never filled or past the TTL.
    pub fn get(&self) -> Option<&[LoanOffer]> {
        if self.is_fresh() {
            Some(&self.offers)
        } else {
            None
        }
    }

    pub fn is_fresh(&self) -> bool {
        match self.fetched_at {
            Some(at) => at.elapsed() < self.ttl,
            None => false,
        }
    }

    /// Wall-clock time of the last store, for surfacing to callers.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}

impl Default for OfferCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}
