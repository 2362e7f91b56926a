pub mod amortization;
pub mod comparison;
pub mod eligibility;
pub mod error;
pub mod types;

#[cfg(feature = "catalog")]
pub mod catalog;

pub use error::LoanscopeError;
pub use types::*;

/// Standard result type for all loanscope operations
pub type LoanscopeResult<T> = Result<T, LoanscopeError>;
