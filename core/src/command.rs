use serde::{Deserialize, Serialize};

use crate::{
    company::TurnReport,
    loan::Loan,
    staff::Role,
    types::{Months, Money, StaffId},
};

/// All player-issued commands.
/// Variants are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    Hire {
        name: String,
        role: Role,
    },
    TakeLoan {
        amount: Money,
        term_months: Months,
    },
    ListStaff,
    EndTurn,
}

impl PlayerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hire { .. }     => "hire",
            Self::TakeLoan { .. } => "take_loan",
            Self::ListStaff       => "list_staff",
            Self::EndTurn         => "end_turn",
        }
    }
}

/// What a command did, for the shell to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Hired { staff_id: StaffId },
    LoanApproved { loan: Loan },
    LoanRejected { reason: String },
    Staff { lines: Vec<String> },
    TurnEnded { report: TurnReport },
}
