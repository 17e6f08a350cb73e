//! CSV file reference data adapter.
//!
//! `operations.csv`: `date,symbol,buy_price,sell_price,shares,profit,return_pct,sell_type`
//! `companies.csv`:  `name,ticker,report_time`
//!
//! A list without a configured path falls back to the built-in sample.

use crate::domain::company::{Company, ReportTime};
use crate::domain::error::DashboardError;
use crate::domain::operation::{Operation, SellType};
use crate::domain::reference_data::ReferenceData;
use crate::ports::reference_port::ReferencePort;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct CsvAdapter {
    operations_path: Option<PathBuf>,
    companies_path: Option<PathBuf>,
}

impl CsvAdapter {
    pub fn new(operations_path: Option<PathBuf>, companies_path: Option<PathBuf>) -> Self {
        Self {
            operations_path,
            companies_path,
        }
    }
}

fn reference_error(reason: String) -> DashboardError {
    DashboardError::ReferenceData { reason }
}

/// Error tagged with the file line the record came from.
fn row_error(record: &csv::StringRecord, reason: String) -> DashboardError {
    match record.position() {
        Some(pos) => reference_error(format!("line {}: {}", pos.line(), reason)),
        None => reference_error(reason),
    }
}

fn read_records(path: &Path) -> Result<Vec<csv::StringRecord>, DashboardError> {
    let content = fs::read_to_string(path)
        .map_err(|e| reference_error(format!("failed to read {}: {}", path.display(), e)))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            reference_error(format!("CSV parse error in {}: {}", path.display(), e))
        })?;
        records.push(record);
    }
    Ok(records)
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize, name: &str) -> Result<&'r str, DashboardError> {
    record
        .get(idx)
        .ok_or_else(|| row_error(record, format!("missing {name} column")))
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    name: &str,
) -> Result<T, DashboardError>
where
    T::Err: std::fmt::Display,
{
    let raw = field(record, idx, name)?;
    raw.parse::<T>()
        .map_err(|e| row_error(record, format!("invalid {name} value '{raw}': {e}")))
}

fn parse_operation(record: &csv::StringRecord) -> Result<Operation, DashboardError> {
    let date_str = field(record, 0, "date")?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| row_error(record, format!("invalid date format: {}", e)))?;

    Ok(Operation {
        date,
        symbol: field(record, 1, "symbol")?.to_uppercase(),
        buy_price: parse_field(record, 2, "buy_price")?,
        sell_price: parse_field(record, 3, "sell_price")?,
        shares: parse_field(record, 4, "shares")?,
        profit: parse_field(record, 5, "profit")?,
        return_pct: parse_field(record, 6, "return_pct")?,
        sell_type: parse_field::<SellType>(record, 7, "sell_type")?,
    })
}

fn parse_company(record: &csv::StringRecord) -> Result<Company, DashboardError> {
    let name = field(record, 0, "name")?;
    let ticker = field(record, 1, "ticker")?;
    if ticker.is_empty() {
        return Err(row_error(record, format!("empty ticker for {name}")));
    }
    let report_time = parse_field::<ReportTime>(record, 2, "report_time")?;
    Ok(Company::new(name, ticker, report_time))
}

impl ReferencePort for CsvAdapter {
    fn load_operations(&self) -> Result<Vec<Operation>, DashboardError> {
        match &self.operations_path {
            Some(path) => read_records(path)?.iter().map(parse_operation).collect(),
            None => Ok(ReferenceData::sample().operations().to_vec()),
        }
    }

    fn load_companies(&self) -> Result<Vec<Company>, DashboardError> {
        match &self.companies_path {
            Some(path) => read_records(path)?.iter().map(parse_company).collect(),
            None => Ok(ReferenceData::sample().companies().to_vec()),
        }
    }
}
