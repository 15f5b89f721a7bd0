//! Turn-based company simulation.
//!
//! A [`company::Company`] hires staff, produces and sells goods, borrows
//! and repays money, and is valued on its trailing income. The shell
//! drives it with [`command::PlayerCommand`]s and reads it back through
//! queries or a [`snapshot::CompanySnapshot`].

pub mod clock;
pub mod command;
pub mod company;
pub mod config;
pub mod error;
pub mod event;
pub mod loan;
pub mod production;
pub mod snapshot;
pub mod staff;
pub mod types;
pub mod valuation;

pub use company::{Company, GameOutcome, TurnReport};
pub use error::{SimError, SimResult};
