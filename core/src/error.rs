use thiserror::Error;

use crate::types::{Money, Months};

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Loan term of {requested} months exceeds the maximum of {max} months")]
    LoanTermTooLong { requested: Months, max: Months },

    #[error("Loan term must be at least one month, got {requested}")]
    InvalidLoanTerm { requested: Months },

    #[error("Loan amount must be positive, got {amount}")]
    InvalidLoanAmount { amount: Money },

    #[error("Debt may not exceed {ceiling:.2} (existing {existing:.2} + requested {requested:.2})")]
    DebtCeilingExceeded {
        requested: Money,
        existing: Money,
        ceiling: Money,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// True for the recoverable rejections a loan request can produce.
    /// The caller reports these to the player and carries on.
    pub fn is_loan_rejection(&self) -> bool {
        matches!(
            self,
            Self::LoanTermTooLong { .. }
                | Self::InvalidLoanTerm { .. }
                | Self::InvalidLoanAmount { .. }
                | Self::DebtCeilingExceeded { .. }
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
