#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use tradeboard::domain::error::DashboardError;
use tradeboard::domain::session::SelectionSubmission;
use tradeboard::domain::settings::TradingSettings;
use tradeboard::ports::submission_port::SubmissionPort;

/// Captures submissions in memory so tests can inspect them.
pub struct RecordingSink {
    pub selections: Vec<(Option<NaiveDate>, Vec<String>)>,
    pub settings: Vec<TradingSettings>,
    pub fail_with: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
            settings: Vec::new(),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::new()
        }
    }

    fn check(&self) -> Result<(), DashboardError> {
        match &self.fail_with {
            Some(reason) => Err(DashboardError::Io(std::io::Error::other(reason.clone()))),
            None => Ok(()),
        }
    }
}

impl SubmissionPort for RecordingSink {
    fn submit_selection(&mut self, submission: &SelectionSubmission<'_>) -> Result<(), DashboardError> {
        self.check()?;
        self.selections.push((
            submission.date,
            submission.companies.iter().map(|c| c.ticker.clone()).collect(),
        ));
        Ok(())
    }

    fn submit_settings(&mut self, settings: &TradingSettings) -> Result<(), DashboardError> {
        self.check()?;
        self.settings.push(settings.clone());
        Ok(())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const OPERATIONS_CSV: &str = "\
date,symbol,buy_price,sell_price,shares,profit,return_pct,sell_type
2025-12-01,MSFT,400,412,5,60,3.0,TP
2025-12-01,AMD,150,147,10,-30,-2.0,SL
2025-12-03,NVDA,120,126,10,60,5.0,TP
";

pub const COMPANIES_CSV: &str = "\
name,ticker,report_time
Microsoft Corp.,MSFT,AMC
AMD,AMD,BMO
Nvidia Corp.,NVDA,BMO
";
