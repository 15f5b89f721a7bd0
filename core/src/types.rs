//! Shared primitive types used across the entire simulation.

/// A monetary amount. The bank balance may go negative.
pub type Money = f64;

/// A loan term, in months. Signed so that degenerate input can be
/// represented and rejected rather than wrapped.
pub type Months = i32;

/// A completed-turn counter. One turn = one in-game month.
pub type Turn = u64;

/// A stable, sequential identifier for a hired staff member.
pub type StaffId = u32;

/// A stable, sequential identifier for an originated loan.
pub type LoanId = u32;
