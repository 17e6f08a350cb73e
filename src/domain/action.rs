//! User actions and their line-oriented script form.
//!
//! Grammar, one action per line (keywords are case-insensitive, `#` starts a
//! comment):
//!
//! ```text
//! date 2025-11-28 | date none
//! capacity 3
//! select AAPL
//! deselect AAPL
//! page earnings 2 | page selected 1
//! submit selection
//! submit settings <stop_loss> <take_profit> <investment> <trades_per_day>
//! ```

use crate::domain::error::DashboardError;
use crate::domain::pager::ListView;
use crate::domain::settings::TradingSettings;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetDate(Option<NaiveDate>),
    SetCapacity(usize),
    Select(String),
    Deselect(String),
    SetPage(ListView, usize),
    SubmitSelection,
    SubmitSettings(TradingSettings),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetDate(Some(d)) => write!(f, "date {}", d.format("%Y-%m-%d")),
            Action::SetDate(None) => write!(f, "date none"),
            Action::SetCapacity(n) => write!(f, "capacity {n}"),
            Action::Select(t) => write!(f, "select {t}"),
            Action::Deselect(t) => write!(f, "deselect {t}"),
            Action::SetPage(ListView::Earnings, i) => write!(f, "page earnings {i}"),
            Action::SetPage(ListView::Selected, i) => write!(f, "page selected {i}"),
            Action::SubmitSelection => write!(f, "submit selection"),
            Action::SubmitSettings(s) => write!(
                f,
                "submit settings {} {} {} {}",
                s.stop_loss_pct, s.take_profit_pct, s.investment_per_trade, s.trades_per_day
            ),
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value.trim()))
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>, what: &str) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("missing {what}"))?;
    raw.parse::<T>()
        .map_err(|_| format!("invalid {what} '{raw}'"))
}

fn expect_end<'s>(mut rest: impl Iterator<Item = &'s str>) -> Result<(), String> {
    match rest.next() {
        Some(extra) => Err(format!("unexpected trailing token '{extra}'")),
        None => Ok(()),
    }
}

/// Parses a single non-empty, comment-free line.
pub fn parse_action(line: &str) -> Result<Action, String> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens
        .next()
        .ok_or_else(|| "empty action".to_string())?
        .to_lowercase();

    let action = match keyword.as_str() {
        "date" => {
            let value = tokens.next().ok_or_else(|| "missing date".to_string())?;
            if value.eq_ignore_ascii_case("none") {
                Action::SetDate(None)
            } else {
                Action::SetDate(Some(parse_date(value)?))
            }
        }
        "capacity" => Action::SetCapacity(parse_number(tokens.next(), "capacity")?),
        "select" | "deselect" => {
            let ticker = tokens
                .next()
                .ok_or_else(|| format!("missing ticker for {keyword}"))?
                .to_uppercase();
            if keyword == "select" {
                Action::Select(ticker)
            } else {
                Action::Deselect(ticker)
            }
        }
        "page" => {
            let view = match tokens.next().map(str::to_lowercase).as_deref() {
                Some("earnings") => ListView::Earnings,
                Some("selected") => ListView::Selected,
                Some(other) => return Err(format!("unknown list '{other}'")),
                None => return Err("missing list name".to_string()),
            };
            Action::SetPage(view, parse_number(tokens.next(), "page index")?)
        }
        "submit" => match tokens.next().map(str::to_lowercase).as_deref() {
            Some("selection") => Action::SubmitSelection,
            Some("settings") => Action::SubmitSettings(TradingSettings {
                stop_loss_pct: parse_number(tokens.next(), "stop loss")?,
                take_profit_pct: parse_number(tokens.next(), "take profit")?,
                investment_per_trade: parse_number(tokens.next(), "investment per trade")?,
                trades_per_day: parse_number(tokens.next(), "trades per day")?,
            }),
            Some(other) => return Err(format!("unknown submission '{other}'")),
            None => return Err("missing submission target".to_string()),
        },
        other => return Err(format!("unknown action '{other}'")),
    };

    expect_end(tokens)?;
    Ok(action)
}

/// Parses a whole script, skipping blank lines and `#` comments. Line
/// numbers in errors are 1-based.
pub fn parse_script(input: &str) -> Result<Vec<Action>, DashboardError> {
    let mut actions = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let action = parse_action(line).map_err(|reason| DashboardError::ScriptParse {
            line: idx + 1,
            reason,
        })?;
        actions.push(action);
    }
    Ok(actions)
}
