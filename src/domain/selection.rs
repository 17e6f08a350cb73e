//! Two-bucket selection of earnings candidates under a capacity limit.
//!
//! Every reference company sits in exactly one bucket while a date is active.
//! Buckets hold borrowed records, so moving a company never copies it.

use crate::domain::company::Company;
use crate::domain::error::SelectionError;

#[derive(Debug, Clone)]
pub struct SelectionState<'a> {
    universe: &'a [Company],
    available: Vec<&'a Company>,
    selected: Vec<&'a Company>,
    capacity: usize,
}

impl<'a> SelectionState<'a> {
    /// Starts inactive: no date context, both buckets empty.
    pub fn new(universe: &'a [Company], capacity: usize) -> Self {
        Self {
            universe,
            available: Vec::new(),
            selected: Vec::new(),
            capacity,
        }
    }

    pub fn available(&self) -> &[&'a Company] {
        &self.available
    }

    pub fn selected(&self) -> &[&'a Company] {
        &self.selected
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Refills the candidate pool in reference order, skipping anything
    /// already selected. Without a date context the pool is emptied.
    pub fn activate(&mut self, active: bool) {
        if !active {
            self.available.clear();
            return;
        }
        let selected = &self.selected;
        self.available = self
            .universe
            .iter()
            .filter(|c| !selected.iter().any(|s| s.ticker == c.ticker))
            .collect();
    }

    /// Moves `ticker` from the pool to the end of the selection.
    ///
    /// The capacity check comes first and blocks at `selected >= capacity`.
    pub fn select(&mut self, ticker: &str) -> Result<&'a Company, SelectionError> {
        if self.selected.len() >= self.capacity {
            return Err(SelectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let pos = self
            .available
            .iter()
            .position(|c| c.has_ticker(ticker))
            .ok_or_else(|| SelectionError::NotAvailable {
                ticker: ticker.trim().to_uppercase(),
            })?;
        let company = self.available.remove(pos);
        self.selected.push(company);
        Ok(company)
    }

    /// Moves `ticker` back to the end of the pool. When the pool is inactive
    /// the company simply leaves the selection.
    pub fn deselect(&mut self, ticker: &str, active: bool) -> Result<&'a Company, SelectionError> {
        let pos = self
            .selected
            .iter()
            .position(|c| c.has_ticker(ticker))
            .ok_or_else(|| SelectionError::NotSelected {
                ticker: ticker.trim().to_uppercase(),
            })?;
        let company = self.selected.remove(pos);
        if active {
            self.available.push(company);
        }
        Ok(company)
    }

    /// Display condition that disables submission. Uses a strict bound,
    /// unlike the `>=` gate in [`select`](Self::select).
    pub fn capacity_exceeded(&self) -> bool {
        self.selected.len() > self.capacity
    }

    /// Snapshot of the selection for export; leaves state untouched.
    pub fn submit(&self) -> Vec<&'a Company> {
        self.selected.clone()
    }
}
