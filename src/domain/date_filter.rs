//! Date-scoped views over the operation list.

use crate::domain::operation::Operation;
use chrono::{Days, NaiveDate};

/// Trailing windows shown in the history panel, in days.
pub const HISTORICAL_WINDOWS: [u32; 3] = [5, 15, 30];

/// Operations closed on `date`, or every operation when no date is set.
pub fn active_operations(operations: &[Operation], date: Option<NaiveDate>) -> Vec<&Operation> {
    match date {
        Some(day) => operations.iter().filter(|op| op.date == day).collect(),
        None => operations.iter().collect(),
    }
}

/// Operations within `[end - window_days, end]`, inclusive, where `end` is
/// `date` or `today` when no date is set.
///
/// Each call scans the full list; windows are not derived from one another.
pub fn historical_operations(
    operations: &[Operation],
    date: Option<NaiveDate>,
    today: NaiveDate,
    window_days: u32,
) -> Vec<&Operation> {
    let end = date.unwrap_or(today);
    let start = end
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);
    operations
        .iter()
        .filter(|op| op.date >= start && op.date <= end)
        .collect()
}

/// One trailing window and the operations it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalWindow<'a> {
    pub days: u32,
    pub operations: Vec<&'a Operation>,
}

pub fn historical_windows(
    operations: &[Operation],
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<HistoricalWindow<'_>> {
    HISTORICAL_WINDOWS
        .iter()
        .map(|&days| HistoricalWindow {
            days,
            operations: historical_operations(operations, date, today, days),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference_data::ReferenceData;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn symbols(ops: &[&Operation]) -> Vec<String> {
        ops.iter().map(|o| o.symbol.clone()).collect()
    }

    #[test]
    fn active_without_date_returns_all() {
        let data = ReferenceData::sample();
        let ops = active_operations(data.operations(), None);
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn active_matches_exact_day() {
        let data = ReferenceData::sample();
        let ops = active_operations(data.operations(), Some(d(2025, 11, 27)));
        assert_eq!(symbols(&ops), vec!["TSLA"]);
    }

    #[test]
    fn active_on_quiet_day_is_empty() {
        let data = ReferenceData::sample();
        assert!(active_operations(data.operations(), Some(d(2025, 11, 26))).is_empty());
    }

    #[test]
    fn history_window_is_inclusive_on_both_ends() {
        let data = ReferenceData::sample();
        // 11-28 minus 3 days is 11-25, which must be included
        let ops = historical_operations(data.operations(), Some(d(2025, 11, 28)), d(2000, 1, 1), 3);
        assert_eq!(symbols(&ops), vec!["AAPL", "TSLA", "GOOG"]);

        let ops = historical_operations(data.operations(), Some(d(2025, 11, 28)), d(2000, 1, 1), 2);
        assert_eq!(symbols(&ops), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn history_excludes_future_operations() {
        let data = ReferenceData::sample();
        let ops = historical_operations(data.operations(), Some(d(2025, 11, 27)), d(2000, 1, 1), 30);
        assert_eq!(symbols(&ops), vec!["TSLA", "GOOG"]);
    }

    #[test]
    fn history_defaults_to_today() {
        let data = ReferenceData::sample();
        let ops = historical_operations(data.operations(), None, d(2025, 11, 30), 5);
        assert_eq!(ops.len(), 3);

        let ops = historical_operations(data.operations(), None, d(2026, 6, 1), 30);
        assert!(ops.is_empty());
    }

    #[test]
    fn standard_windows_are_computed_independently() {
        let data = ReferenceData::sample();
        let windows = historical_windows(data.operations(), Some(d(2025, 11, 30)), d(2000, 1, 1));
        let days: Vec<u32> = windows.iter().map(|w| w.days).collect();
        assert_eq!(days, vec![5, 15, 30]);
        // 11-30 minus 5 is 11-25, so GOOG is still inside the shortest window
        assert!(windows.iter().all(|w| w.operations.len() == 3));
    }

    proptest! {
        #[test]
        fn history_stays_inside_window(offset in 0i64..80, window in prop::sample::select(vec![5u32, 15, 30])) {
            let data = ReferenceData::sample();
            let date = d(2025, 10, 20) + chrono::Duration::days(offset);
            let ops = historical_operations(data.operations(), Some(date), date, window);
            let start = date - chrono::Duration::days(i64::from(window));
            for op in ops {
                prop_assert!(op.date >= start && op.date <= date);
            }
        }

        #[test]
        fn active_only_returns_matching_day(offset in 0i64..10) {
            let data = ReferenceData::sample();
            let date = d(2025, 11, 22) + chrono::Duration::days(offset);
            for op in active_operations(data.operations(), Some(date)) {
                prop_assert_eq!(op.date, date);
            }
        }
    }
}
