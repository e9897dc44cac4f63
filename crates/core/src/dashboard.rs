//! Dashboard window sizes and the date bounds derived from them.

use chrono::{Days, Months, NaiveDate};

/// Assets due for maintenance within this many days are flagged.
pub const UPCOMING_MAINTENANCE_DAYS: u64 = 30;

/// Maximum number of upcoming-maintenance alerts returned.
pub const UPCOMING_MAINTENANCE_LIMIT: i64 = 5;

/// Number of months covered by the maintenance cost history.
pub const COST_HISTORY_MONTHS: u32 = 6;

/// Last next-maintenance date that still counts as upcoming. Overdue dates
/// fall below it and are included.
pub fn upcoming_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(UPCOMING_MAINTENANCE_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// First service date included in the monthly cost history.
pub fn cost_history_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(COST_HISTORY_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn upcoming_cutoff_is_thirty_days_out() {
        assert_eq!(upcoming_cutoff(date(2024, 6, 1)), date(2024, 7, 1));
        assert_eq!(upcoming_cutoff(date(2024, 12, 15)), date(2025, 1, 14));
    }

    #[test]
    fn cost_history_starts_six_months_back() {
        assert_eq!(cost_history_start(date(2024, 8, 15)), date(2024, 2, 15));
        assert_eq!(cost_history_start(date(2024, 3, 10)), date(2023, 9, 10));
    }

    #[test]
    fn cost_history_clamps_to_month_end() {
        // August 31 minus six months lands on the last day of February.
        assert_eq!(cost_history_start(date(2024, 8, 31)), date(2024, 2, 29));
    }
}
