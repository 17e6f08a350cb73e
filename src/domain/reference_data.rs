//! Immutable reference data: the operation sample and the earnings universe.
//!
//! Both lists are fixed for the lifetime of a session. Sessions borrow them,
//! so company records are never copied between selection buckets.

use crate::domain::company::{Company, ReportTime};
use crate::domain::error::DashboardError;
use crate::domain::operation::{Operation, SellType};
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    operations: Vec<Operation>,
    companies: Vec<Company>,
}

impl ReferenceData {
    /// Builds the store, rejecting duplicate tickers in the company list.
    pub fn new(
        operations: Vec<Operation>,
        companies: Vec<Company>,
    ) -> Result<Self, DashboardError> {
        let mut seen = HashSet::new();
        for company in &companies {
            if !seen.insert(company.ticker.to_uppercase()) {
                return Err(DashboardError::DuplicateTicker(company.ticker.clone()));
            }
        }
        Ok(Self {
            operations,
            companies,
        })
    }

    /// The built-in sample shipped with the dashboard.
    pub fn sample() -> Self {
        Self {
            operations: sample_operations(),
            companies: sample_companies(),
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }
}

fn op(
    date: (i32, u32, u32),
    symbol: &str,
    buy_price: f64,
    sell_price: f64,
    shares: u32,
    profit: f64,
    return_pct: f64,
    sell_type: SellType,
) -> Operation {
    Operation {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        symbol: symbol.to_string(),
        buy_price,
        sell_price,
        shares,
        profit,
        return_pct,
        sell_type,
    }
}

fn sample_operations() -> Vec<Operation> {
    use SellType::*;
    vec![
        op((2025, 11, 28), "AAPL", 180.0, 187.0, 10, 70.0, 3.8, TakeProfit),
        op((2025, 11, 27), "TSLA", 200.0, 190.0, 5, -50.0, -5.0, StopLoss),
        op((2025, 11, 25), "GOOG", 120.0, 125.0, 8, 40.0, 4.2, TakeProfit),
    ]
}

fn sample_companies() -> Vec<Company> {
    use ReportTime::{AfterMarketClose as Amc, BeforeMarketOpen as Bmo};
    [
        ("Apple Inc.", "AAPL", Amc),
        ("Tesla Inc.", "TSLA", Bmo),
        ("Google LLC", "GOOG", Amc),
        ("Microsoft Corp.", "MSFT", Amc),
        ("Amazon.com Inc.", "AMZN", Bmo),
        ("Meta Platforms", "META", Amc),
        ("Nvidia Corp.", "NVDA", Bmo),
        ("Intel Corp.", "INTC", Amc),
        ("Netflix Inc.", "NFLX", Amc),
        ("Adobe Inc.", "ADBE", Bmo),
        ("Salesforce.com", "CRM", Amc),
        ("PayPal Holdings", "PYPL", Amc),
        ("Cisco Systems", "CSCO", Bmo),
        ("Oracle Corp.", "ORCL", Amc),
        ("AMD", "AMD", Bmo),
        ("IBM", "IBM", Amc),
        ("Shopify Inc.", "SHOP", Amc),
        ("Square Inc.", "SQ", Bmo),
        ("Uber Technologies", "UBER", Amc),
        ("Lyft Inc.", "LYFT", Bmo),
    ]
    .into_iter()
    .map(|(name, ticker, time)| Company::new(name, ticker, time))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_expected_sizes() {
        let data = ReferenceData::sample();
        assert_eq!(data.operations().len(), 3);
        assert_eq!(data.companies().len(), 20);
    }

    #[test]
    fn sample_tickers_are_unique() {
        let data = ReferenceData::sample();
        let rebuilt = ReferenceData::new(
            data.operations().to_vec(),
            data.companies().to_vec(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn new_rejects_duplicate_ticker() {
        let companies = vec![
            Company::new("Apple Inc.", "AAPL", ReportTime::AfterMarketClose),
            Company::new("Apple again", "aapl", ReportTime::BeforeMarketOpen),
        ];
        let result = ReferenceData::new(vec![], companies);
        assert!(matches!(result, Err(DashboardError::DuplicateTicker(t)) if t == "AAPL"));
    }

    #[test]
    fn sample_operations_keep_recorded_profit() {
        let data = ReferenceData::sample();
        let profits: Vec<f64> = data.operations().iter().map(|o| o.profit).collect();
        assert_eq!(profits, vec![70.0, -50.0, 40.0]);
    }
}
