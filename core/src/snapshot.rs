//! Read-only view of every metric the shell displays.

use crate::types::{Money, Months, Turn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub turn: Turn,
    pub initialized: bool,
    pub bank_balance: Money,
    // Last computed turn
    pub last_income: Money,
    pub last_production: f64,
    pub last_sales: f64,
    pub potential_sales: f64,
    pub warehouse_capacity: f64,
    // Valuation
    pub valuation: Money,
    pub income_history: Vec<Money>,
    // Debt
    pub total_debt: Money,
    pub total_installment: Money,
    pub max_remaining_months: Months,
    pub open_loans: usize,
    // Staff
    pub headcount: usize,
    pub monthly_salary: Money,
    pub bankrupt: bool,
}
