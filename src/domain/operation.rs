//! Closed trading operations shown in the dashboard tables.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// How a position was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellType {
    TakeProfit,
    StopLoss,
}

impl SellType {
    pub fn code(&self) -> &'static str {
        match self {
            SellType::TakeProfit => "TP",
            SellType::StopLoss => "SL",
        }
    }
}

impl fmt::Display for SellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for SellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TP" | "TAKEPROFIT" | "TAKE_PROFIT" => Ok(SellType::TakeProfit),
            "SL" | "STOPLOSS" | "STOP_LOSS" => Ok(SellType::StopLoss),
            other => Err(format!("unknown sell type '{other}' (expected TP or SL)")),
        }
    }
}

/// A completed round trip. Profit is recorded as reported, not recomputed
/// from the prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub date: NaiveDate,
    pub symbol: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub shares: u32,
    pub profit: f64,
    pub return_pct: f64,
    pub sell_type: SellType,
}

impl Operation {
    pub fn is_win(&self) -> bool {
        self.profit >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sell_type_parses_codes() {
        assert_eq!("TP".parse::<SellType>(), Ok(SellType::TakeProfit));
        assert_eq!(" sl ".parse::<SellType>(), Ok(SellType::StopLoss));
        assert_eq!("take_profit".parse::<SellType>(), Ok(SellType::TakeProfit));
    }

    #[test]
    fn sell_type_rejects_unknown() {
        let err = "XX".parse::<SellType>().unwrap_err();
        assert!(err.contains("XX"));
    }

    #[test]
    fn sell_type_display_round_trips() {
        for t in [SellType::TakeProfit, SellType::StopLoss] {
            assert_eq!(t.to_string().parse::<SellType>(), Ok(t));
        }
    }

    #[test]
    fn zero_profit_counts_as_win() {
        let op = Operation {
            date: NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
            symbol: "AAPL".into(),
            buy_price: 180.0,
            sell_price: 180.0,
            shares: 10,
            profit: 0.0,
            return_pct: 0.0,
            sell_type: SellType::TakeProfit,
        };
        assert!(op.is_win());
    }
}
