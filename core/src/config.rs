//! Design-time economic constants.
//!
//! These are fixed when the game is built. Nothing reads them from
//! disk or the environment; change them here and rebuild.

use crate::types::{Money, Months};

/// Bank balance of a freshly founded company.
pub const STARTING_BALANCE: Money = 20_000.0;

// ── Loans ───────────────────────────────────────────────────────

/// Longest repayment term a new loan may have.
pub const MAX_LOAN_TERM_MONTHS: Months = 24;

/// Total principal may not exceed valuation × this at origination.
pub const MAX_DEBT_MULTIPLIER: f64 = 3.0;

/// Interest rate = BASE_INTEREST_RATE + INTEREST_RATE_PER_MONTH × term.
pub const BASE_INTEREST_RATE: f64 = 0.05;
pub const INTEREST_RATE_PER_MONTH: f64 = 0.01;

// ── Valuation ───────────────────────────────────────────────────

/// Number of trailing monthly incomes averaged into the valuation.
pub const VALUATION_WINDOW: usize = 3;

// ── Staff (monthly salary, per-head coefficient) ────────────────

pub const ENGINEER_SALARY: Money = 6_000.0;
pub const ENGINEER_UNIT_PRICE: f64 = 50.0;

pub const WAREHOUSE_WORKER_SALARY: Money = 4_000.0;
pub const WAREHOUSE_WORKER_CAPACITY: f64 = 500.0;

pub const MARKETER_SALARY: Money = 5_000.0;
pub const MARKETER_DEMAND: f64 = 1_000.0;

pub const WORKER_SALARY: Money = 4_500.0;
pub const WORKER_CAPACITY: f64 = 500.0;

// ── Session defaults (used by the runner) ───────────────────────

/// Valuation at which the player wins.
pub const DEFAULT_TARGET_VALUATION: Money = 5_000_000.0;
