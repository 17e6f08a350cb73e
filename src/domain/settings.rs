//! Trading settings edited in the settings panel.

use crate::domain::error::SelectionError;

pub const DEFAULT_STOP_LOSS_PCT: f64 = 2.0;
pub const DEFAULT_TAKE_PROFIT_PCT: f64 = 5.0;
pub const DEFAULT_INVESTMENT_PER_TRADE: f64 = 6000.0;
pub const DEFAULT_TRADES_PER_DAY: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TradingSettings {
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
    pub investment_per_trade: f64,
    /// Also the capacity of the selected-companies bucket.
    pub trades_per_day: usize,
}

impl Default for TradingSettings {
    fn default() -> Self {
        Self {
            stop_loss_pct: DEFAULT_STOP_LOSS_PCT,
            take_profit_pct: DEFAULT_TAKE_PROFIT_PCT,
            investment_per_trade: DEFAULT_INVESTMENT_PER_TRADE,
            trades_per_day: DEFAULT_TRADES_PER_DAY,
        }
    }
}

impl TradingSettings {
    pub fn validate(&self) -> Result<(), SelectionError> {
        if !self.stop_loss_pct.is_finite() || self.stop_loss_pct < 0.0 {
            return Err(SelectionError::InvalidSettings {
                reason: "stop_loss must be a non-negative percentage".to_string(),
            });
        }
        if !self.take_profit_pct.is_finite() || self.take_profit_pct < 0.0 {
            return Err(SelectionError::InvalidSettings {
                reason: "take_profit must be a non-negative percentage".to_string(),
            });
        }
        if !self.investment_per_trade.is_finite() || self.investment_per_trade <= 0.0 {
            return Err(SelectionError::InvalidSettings {
                reason: "investment_per_trade must be positive".to_string(),
            });
        }
        Ok(())
    }
}
