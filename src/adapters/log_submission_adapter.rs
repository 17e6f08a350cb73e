//! Submission sink that writes one line per submission.
//!
//! Stands in for the eventual API call: each submission is logged and
//! echoed to the wrapped writer.

use crate::domain::error::DashboardError;
use crate::domain::session::SelectionSubmission;
use crate::domain::settings::TradingSettings;
use crate::ports::submission_port::SubmissionPort;
use log::info;
use std::io::Write;

pub struct LogSubmissionAdapter<W: Write> {
    out: W,
    count: usize,
}

impl<W: Write> LogSubmissionAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Number of submissions written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_selection(submission: &SelectionSubmission<'_>) -> String {
    let date = submission
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let tickers: Vec<&str> = submission
        .companies
        .iter()
        .map(|c| c.ticker.as_str())
        .collect();
    format!(
        "selection date={} count={} tickers={}",
        date,
        tickers.len(),
        tickers.join(",")
    )
}

pub fn format_settings(settings: &TradingSettings) -> String {
    format!(
        "settings stop_loss={} take_profit={} investment_per_trade={} trades_per_day={}",
        settings.stop_loss_pct,
        settings.take_profit_pct,
        settings.investment_per_trade,
        settings.trades_per_day
    )
}

impl<W: Write> SubmissionPort for LogSubmissionAdapter<W> {
    fn submit_selection(&mut self, submission: &SelectionSubmission<'_>) -> Result<(), DashboardError> {
        let line = format_selection(submission);
        info!("submitted {line}");
        writeln!(self.out, "{line}")?;
        self.count += 1;
        Ok(())
    }

    fn submit_settings(&mut self, settings: &TradingSettings) -> Result<(), DashboardError> {
        let line = format_settings(settings);
        info!("submitted {line}");
        writeln!(self.out, "{line}")?;
        self.count += 1;
        Ok(())
    }
}
