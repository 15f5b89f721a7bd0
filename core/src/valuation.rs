//! Trailing income history and the company valuation derived from it.

use crate::{config::VALUATION_WINDOW, types::Money};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// FIFO window of the most recent monthly incomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeHistory {
    incomes: VecDeque<Money>,
}

impl IncomeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an income, evicting the oldest entry once the window is full.
    /// Returns the evicted income, if any.
    pub fn record(&mut self, income: Money) -> Option<Money> {
        self.incomes.push_back(income);
        if self.incomes.len() > VALUATION_WINDOW {
            self.incomes.pop_front()
        } else {
            None
        }
    }

    /// Arithmetic mean of the window; 0 while empty.
    pub fn valuation(&self) -> Money {
        if self.incomes.is_empty() {
            return 0.0;
        }
        self.incomes.iter().fold(0.0, |acc, i| acc + i) / self.incomes.len() as f64
    }

    pub fn len(&self) -> usize {
        self.incomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
    }

    /// Oldest first.
    pub fn incomes(&self) -> impl Iterator<Item = Money> + '_ {
        self.incomes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_values_at_zero() {
        assert_eq!(IncomeHistory::new().valuation(), 0.0);
    }

    #[test]
    fn window_evicts_oldest_first() {
        let mut h = IncomeHistory::new();
        assert_eq!(h.record(10.0), None);
        assert_eq!(h.record(20.0), None);
        assert_eq!(h.record(30.0), None);
        assert_eq!(h.record(40.0), Some(10.0));

        assert_eq!(h.len(), VALUATION_WINDOW);
        assert_eq!(h.incomes().collect::<Vec<_>>(), vec![20.0, 30.0, 40.0]);
        assert!((h.valuation() - 30.0).abs() < 1e-9);
    }
}
