//! Income and production model.
//!
//! One pass per turn:
//!   production = sales = min(capacity, demand)
//!   income     = sales × unit_price
//!
//! `unit_price` is the SUM of every engineer's contribution, not an
//! average. Nothing carries over between turns: no inventory, no
//! backlog of unsold goods.

use crate::{
    config::ENGINEER_UNIT_PRICE,
    staff::Contributions,
    types::Money,
};
use serde::{Deserialize, Serialize};

/// Last-computed production figures, cached on the company so the shell
/// can read them after the turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionReport {
    pub production: f64,
    pub sales: f64,
    pub income: Money,
}

impl ProductionReport {
    pub fn compute(c: &Contributions) -> Self {
        let production = c.capacity.min(c.demand);
        let sales = c.demand.min(c.capacity);
        Self {
            production,
            sales,
            income: sales * c.unit_price,
        }
    }

    /// First-turn estimate: back-solve production from income using a
    /// single engineer's unit price and assume all of it sold.
    pub fn bootstrap_estimate(income: Money) -> Self {
        let production = income / ENGINEER_UNIT_PRICE;
        Self {
            production,
            sales: production,
            income,
        }
    }

    /// The lesser of production and sales.
    pub fn potential_sales(&self) -> f64 {
        self.production.min(self.sales)
    }
}
