//! Companies on the earnings calendar.

use std::fmt;
use std::str::FromStr;

/// When the company publishes relative to the trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTime {
    BeforeMarketOpen,
    AfterMarketClose,
}

impl ReportTime {
    pub fn code(&self) -> &'static str {
        match self {
            ReportTime::BeforeMarketOpen => "BMO",
            ReportTime::AfterMarketClose => "AMC",
        }
    }
}

impl fmt::Display for ReportTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for ReportTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BMO" => Ok(ReportTime::BeforeMarketOpen),
            "AMC" => Ok(ReportTime::AfterMarketClose),
            other => Err(format!("unknown report time '{other}' (expected BMO or AMC)")),
        }
    }
}

/// Reference record; the ticker is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub ticker: String,
    pub report_time: ReportTime,
}

impl Company {
    pub fn new(name: &str, ticker: &str, report_time: ReportTime) -> Self {
        Self {
            name: name.to_string(),
            ticker: ticker.to_uppercase(),
            report_time,
        }
    }

    /// Case-insensitive ticker comparison.
    pub fn has_ticker(&self, ticker: &str) -> bool {
        self.ticker.eq_ignore_ascii_case(ticker.trim())
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ticker, self.report_time)
    }
}
