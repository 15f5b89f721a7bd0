//! In-memory event log of every state change the company makes.
//!
//! Nothing here is persisted. The log lives as long as the session's
//! `Company` and grows by a handful of entries per command, so it is
//! not capped. The runner can dump it as JSON lines when a session ends.

use crate::{
    error::SimResult,
    staff::RoleKind,
    types::{LoanId, Money, Months, StaffId, Turn},
};
use serde::{Deserialize, Serialize};

/// Every event emitted during a session.
/// Variants are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Lifecycle ──────────────────────────────────
    Bootstrapped {
        turn: Turn,
        income: Money,
        production: f64,
        valuation: Money,
    },
    TurnCompleted {
        turn: Turn,
        bank_balance: Money,
        valuation: Money,
    },

    // ── Staff ──────────────────────────────────────
    StaffHired {
        turn: Turn,
        staff_id: StaffId,
        name: String,
        role: RoleKind,
    },
    SalariesPaid {
        turn: Turn,
        total: Money,
    },

    // ── Income ─────────────────────────────────────
    IncomeBooked {
        turn: Turn,
        production: f64,
        sales: f64,
        income: Money,
    },
    ValuationUpdated {
        turn: Turn,
        valuation: Money,
        window: usize,
    },

    // ── Loans ──────────────────────────────────────
    LoanApproved {
        turn: Turn,
        loan_id: LoanId,
        amount: Money,
        term_months: Months,
        interest_rate: f64,
    },
    LoanRejected {
        turn: Turn,
        amount: Money,
        term_months: Months,
        reason: String,
    },
    LoanInstallmentPaid {
        turn: Turn,
        loan_id: LoanId,
        installment: Money,
        remaining_amount: Money,
        remaining_months: Months,
    },
    LoanRetired {
        turn: Turn,
        loan_id: LoanId,
    },
}

impl SimEvent {
    /// Stable string name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bootstrapped { .. }        => "bootstrapped",
            Self::TurnCompleted { .. }       => "turn_completed",
            Self::StaffHired { .. }          => "staff_hired",
            Self::SalariesPaid { .. }        => "salaries_paid",
            Self::IncomeBooked { .. }        => "income_booked",
            Self::ValuationUpdated { .. }    => "valuation_updated",
            Self::LoanApproved { .. }        => "loan_approved",
            Self::LoanRejected { .. }        => "loan_rejected",
            Self::LoanInstallmentPaid { .. } => "loan_installment_paid",
            Self::LoanRetired { .. }         => "loan_retired",
        }
    }

    pub fn turn(&self) -> Turn {
        match self {
            Self::Bootstrapped { turn, .. }
            | Self::TurnCompleted { turn, .. }
            | Self::StaffHired { turn, .. }
            | Self::SalariesPaid { turn, .. }
            | Self::IncomeBooked { turn, .. }
            | Self::ValuationUpdated { turn, .. }
            | Self::LoanApproved { turn, .. }
            | Self::LoanRejected { turn, .. }
            | Self::LoanInstallmentPaid { turn, .. }
            | Self::LoanRetired { turn, .. } => *turn,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        log::trace!("turn={} event: {}", event.turn(), event.type_name());
        self.entries.push(event);
    }

    pub fn entries(&self) -> &[SimEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_turn(&self, turn: Turn) -> impl Iterator<Item = &SimEvent> + '_ {
        self.entries.iter().filter(move |e| e.turn() == turn)
    }

    /// One JSON object per line, in emission order.
    pub fn to_json_lines(&self) -> SimResult<String> {
        let mut out = String::new();
        for event in &self.entries {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}
