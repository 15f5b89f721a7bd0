//! Loan book: origination, installments and monthly amortization.
//!
//! Installment per loan, recomputed every month from the CURRENT
//! remaining principal:
//!   installment = amount / term + amount × rate / term
//!
//! Amortization runs once per turn, for every active loan:
//!   1. installment is computed before any principal moves
//!   2. principal drops by amount / term (straight line)
//!   3. term drops by one; term 0 or amount ≤ 0 clamps amount to 0
//!   4. loans at amount 0 are removed; installments are summed for the caller

use crate::{
    config::{BASE_INTEREST_RATE, INTEREST_RATE_PER_MONTH, MAX_DEBT_MULTIPLIER, MAX_LOAN_TERM_MONTHS},
    error::{SimError, SimResult},
    types::{LoanId, Money, Months},
};
use serde::{Deserialize, Serialize};

/// Interest rate fixed at origination for a loan of `term_months`.
pub fn interest_rate_for_term(term_months: Months) -> f64 {
    BASE_INTEREST_RATE + INTEREST_RATE_PER_MONTH * term_months as f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub amount: Money,
    pub term_months: Months,
    pub interest_rate: f64,
}

impl Loan {
    /// This month's installment. Zero once the term has run out.
    pub fn installment(&self) -> Money {
        if self.term_months <= 0 {
            return 0.0;
        }
        let term = self.term_months as f64;
        self.amount / term + self.amount * self.interest_rate / term
    }

    fn is_settled(&self) -> bool {
        self.amount <= 0.0 || self.term_months <= 0
    }

    /// Apply one month of repayment. Returns the installment owed.
    fn amortize(&mut self) -> Money {
        if self.term_months <= 0 {
            self.amount = 0.0;
            return 0.0;
        }
        let installment = self.installment();
        self.amount -= self.amount / self.term_months as f64;
        self.term_months -= 1;
        if self.term_months == 0 || self.amount <= 0.0 {
            self.amount = 0.0;
        }
        installment
    }
}

/// One loan's share of a month's repayment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    pub loan_id: LoanId,
    pub installment: Money,
    pub remaining_amount: Money,
    pub remaining_months: Months,
    pub retired: bool,
}

/// Outcome of a full amortization pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSummary {
    pub total_installment: Money,
    pub payments: Vec<LoanPayment>,
}

impl RepaymentSummary {
    pub fn retired_count(&self) -> usize {
        self.payments.iter().filter(|p| p.retired).count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanBook {
    loans: Vec<Loan>,
    next_id: LoanId,
}

impl LoanBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ceiling on total principal for a given valuation.
    pub fn debt_ceiling(valuation: Money) -> Money {
        valuation * MAX_DEBT_MULTIPLIER
    }

    /// Validate and book a new loan. The first failing check rejects the
    /// request and leaves the book untouched.
    pub fn originate(
        &mut self,
        amount: Money,
        term_months: Months,
        valuation: Money,
    ) -> SimResult<&Loan> {
        if term_months > MAX_LOAN_TERM_MONTHS {
            return Err(SimError::LoanTermTooLong {
                requested: term_months,
                max: MAX_LOAN_TERM_MONTHS,
            });
        }
        if term_months < 1 {
            return Err(SimError::InvalidLoanTerm { requested: term_months });
        }
        // Also catches NaN and infinity.
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(SimError::InvalidLoanAmount { amount });
        }

        let existing = self.total_debt();
        let ceiling = Self::debt_ceiling(valuation);
        if existing + amount > ceiling {
            return Err(SimError::DebtCeilingExceeded {
                requested: amount,
                existing,
                ceiling,
            });
        }

        self.next_id += 1;
        self.loans.push(Loan {
            id: self.next_id,
            amount,
            term_months,
            interest_rate: interest_rate_for_term(term_months),
        });
        Ok(&self.loans[self.loans.len() - 1])
    }

    /// Run one month of repayment across every loan and drop settled ones.
    pub fn amortize(&mut self) -> RepaymentSummary {
        let mut summary = RepaymentSummary::default();
        for loan in &mut self.loans {
            let installment = loan.amortize();
            summary.total_installment += installment;
            summary.payments.push(LoanPayment {
                loan_id: loan.id,
                installment,
                remaining_amount: loan.amount,
                remaining_months: loan.term_months,
                retired: loan.is_settled(),
            });
        }
        self.loans.retain(|l| !l.is_settled());
        summary
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn total_debt(&self) -> Money {
        self.loans.iter().fold(0.0, |acc, l| acc + l.amount)
    }

    pub fn total_installment(&self) -> Money {
        self.loans.iter().fold(0.0, |acc, l| acc + l.installment())
    }

    /// Longest remaining term, 0 when no loans are open.
    pub fn max_remaining_months(&self) -> Months {
        self.loans.iter().map(|l| l.term_months).max().unwrap_or(0).max(0)
    }
}
