//! Summary statistics for the stats cards.

use crate::domain::operation::Operation;
use std::collections::HashSet;

pub fn total_profit<'a, I>(operations: I) -> f64
where
    I: IntoIterator<Item = &'a Operation>,
{
    operations.into_iter().map(|op| op.profit).sum()
}

pub fn unique_days<'a, I>(operations: I) -> usize
where
    I: IntoIterator<Item = &'a Operation>,
{
    operations
        .into_iter()
        .map(|op| op.date)
        .collect::<HashSet<_>>()
        .len()
}

/// Total profit spread over the distinct trading days; 0 when there are none.
pub fn profit_per_day<'a, I>(operations: I) -> f64
where
    I: IntoIterator<Item = &'a Operation> + Clone,
{
    let days = unique_days(operations.clone());
    if days == 0 {
        return 0.0;
    }
    total_profit(operations) / days as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_profit: f64,
    pub unique_days: usize,
    pub profit_per_day: f64,
    pub operation_count: usize,
}

impl Summary {
    pub fn compute(operations: &[&Operation]) -> Self {
        let ops = operations.iter().copied();
        Self {
            total_profit: total_profit(ops.clone()),
            unique_days: unique_days(ops.clone()),
            profit_per_day: profit_per_day(ops),
            operation_count: operations.len(),
        }
    }
}
