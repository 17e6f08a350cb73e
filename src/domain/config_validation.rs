//! Configuration validation.
//!
//! Validates the `[trading]` and `[dashboard]` sections before a session
//! starts.

use crate::domain::error::DashboardError;
use crate::domain::settings::{
    DEFAULT_INVESTMENT_PER_TRADE, DEFAULT_STOP_LOSS_PCT, DEFAULT_TAKE_PROFIT_PCT,
    DEFAULT_TRADES_PER_DAY,
};
use crate::ports::config_port::ConfigPort;

pub fn validate_settings_config(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    validate_stop_loss(config)?;
    validate_take_profit(config)?;
    validate_investment(config)?;
    validate_trades_per_day(config)?;
    Ok(())
}

pub fn validate_dashboard_config(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    validate_page_size(config)?;
    validate_today(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> DashboardError {
    DashboardError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// A present-but-unparseable number must not silently fall back to the
/// default, so check the raw string as well.
fn check_numeric(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), DashboardError> {
    match config.get_string(section, key) {
        Some(raw) if raw.trim().parse::<f64>().is_err() => {
            Err(invalid(section, key, &format!("'{}' is not a number", raw.trim())))
        }
        _ => Ok(()),
    }
}

fn check_integer(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), DashboardError> {
    match config.get_string(section, key) {
        Some(raw) if raw.trim().parse::<i64>().is_err() => {
            Err(invalid(section, key, &format!("'{}' is not a whole number", raw.trim())))
        }
        _ => Ok(()),
    }
}

fn validate_stop_loss(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    check_numeric(config, "trading", "stop_loss")?;
    let value = config.get_double("trading", "stop_loss", DEFAULT_STOP_LOSS_PCT);
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("trading", "stop_loss", "stop_loss must be non-negative"));
    }
    Ok(())
}

fn validate_take_profit(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    check_numeric(config, "trading", "take_profit")?;
    let value = config.get_double("trading", "take_profit", DEFAULT_TAKE_PROFIT_PCT);
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("trading", "take_profit", "take_profit must be non-negative"));
    }
    Ok(())
}

fn validate_investment(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    check_numeric(config, "trading", "investment_per_trade")?;
    let value = config.get_double("trading", "investment_per_trade", DEFAULT_INVESTMENT_PER_TRADE);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(
            "trading",
            "investment_per_trade",
            "investment_per_trade must be positive",
        ));
    }
    Ok(())
}

fn validate_trades_per_day(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    check_integer(config, "trading", "trades_per_day")?;
    let value = config.get_int("trading", "trades_per_day", DEFAULT_TRADES_PER_DAY as i64);
    if value < 0 {
        return Err(invalid(
            "trading",
            "trades_per_day",
            "trades_per_day must be non-negative",
        ));
    }
    Ok(())
}

fn validate_page_size(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    check_integer(config, "dashboard", "page_size")?;
    let value = config.get_int("dashboard", "page_size", 5);
    if value < 1 {
        return Err(invalid("dashboard", "page_size", "page_size must be at least 1"));
    }
    Ok(())
}

fn validate_today(config: &dyn ConfigPort) -> Result<(), DashboardError> {
    match config.get_date("dashboard", "today") {
        Some(Err(reason)) => Err(invalid("dashboard", "today", &reason)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapConfig(HashMap<(String, String), String>);

    impl MapConfig {
        fn new(entries: &[(&str, &str, &str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(s, k, v)| ((s.to_string(), k.to_string()), v.to_string()))
                    .collect(),
            )
        }
    }

    impl ConfigPort for MapConfig {
        fn get_string(&self, section: &str, key: &str) -> Option<String> {
            self.0.get(&(section.to_string(), key.to_string())).cloned()
        }

        fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
            self.get_string(section, key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
            self.get_string(section, key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }
    }

    fn assert_invalid(result: Result<(), DashboardError>, expected_key: &str) {
        match result {
            Err(DashboardError::ConfigInvalid { key, .. }) => assert_eq!(key, expected_key),
            other => panic!("expected ConfigInvalid for {expected_key}, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_uses_valid_defaults() {
        let config = MapConfig::new(&[]);
        assert!(validate_settings_config(&config).is_ok());
        assert!(validate_dashboard_config(&config).is_ok());
    }

    #[test]
    fn full_valid_config() {
        let config = MapConfig::new(&[
            ("trading", "stop_loss", "1.5"),
            ("trading", "take_profit", "4"),
            ("trading", "investment_per_trade", "2500"),
            ("trading", "trades_per_day", "3"),
            ("dashboard", "page_size", "10"),
            ("dashboard", "today", "2025-11-28"),
        ]);
        assert!(validate_settings_config(&config).is_ok());
        assert!(validate_dashboard_config(&config).is_ok());
    }

    #[test]
    fn negative_stop_loss() {
        let config = MapConfig::new(&[("trading", "stop_loss", "-2")]);
        assert_invalid(validate_settings_config(&config), "stop_loss");
    }

    #[test]
    fn non_numeric_take_profit() {
        let config = MapConfig::new(&[("trading", "take_profit", "lots")]);
        assert_invalid(validate_settings_config(&config), "take_profit");
    }

    #[test]
    fn zero_investment() {
        let config = MapConfig::new(&[("trading", "investment_per_trade", "0")]);
        assert_invalid(validate_settings_config(&config), "investment_per_trade");
    }

    #[test]
    fn negative_trades_per_day() {
        let config = MapConfig::new(&[("trading", "trades_per_day", "-1")]);
        assert_invalid(validate_settings_config(&config), "trades_per_day");
    }

    #[test]
    fn fractional_trades_per_day() {
        let config = MapConfig::new(&[("trading", "trades_per_day", "2.5")]);
        assert_invalid(validate_settings_config(&config), "trades_per_day");
    }

    #[test]
    fn zero_page_size() {
        let config = MapConfig::new(&[("dashboard", "page_size", "0")]);
        assert_invalid(validate_dashboard_config(&config), "page_size");
    }

    #[test]
    fn malformed_today() {
        let config = MapConfig::new(&[("dashboard", "today", "28/11/2025")]);
        assert_invalid(validate_dashboard_config(&config), "today");
    }
}
