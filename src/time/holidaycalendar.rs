use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

const ONE_DAY: Days = Days::new(1);

/// Saturday and Sunday. The weekend rule is fixed for every division.
#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Working-day arithmetic over a set of holiday dates.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_working_day(&self, d: NaiveDate) -> bool {
        !is_weekend(d) && !self.is_holiday(d)
    }

    /// The n-th working day after `horizon` (before it when n < 0).
    ///
    /// Walks one day at a time with no cap, so arbitrarily long holiday runs
    /// are crossed. `n == 0` returns `horizon` unchanged. `None` when the
    /// walk runs off either end of chrono's date range.
    fn shift_n_working_days(&self, horizon: NaiveDate, n: i32) -> Option<NaiveDate> {
        let shift_one_day: fn(NaiveDate) -> Option<NaiveDate> = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_working_day(d) as u32;
        }
        Some(d)
    }

    fn next_working_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_working_days(d, 1)
    }

    fn previous_working_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_working_days(d, -1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct DateSetCalendar(HashSet<NaiveDate>);

    impl HolidayCalendar for DateSetCalendar {
        fn is_holiday(&self, d: NaiveDate) -> bool {
            self.0.contains(&d)
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_never_working_days() {
        let calendar = DateSetCalendar(HashSet::new());
        assert!(!calendar.is_working_day(ymd(2024, 12, 28)));
        assert!(!calendar.is_working_day(ymd(2024, 12, 29)));
        assert!(calendar.is_working_day(ymd(2024, 12, 30)));
    }

    #[test]
    fn crosses_holidays_and_weekend() {
        let calendar = DateSetCalendar([ymd(2024, 12, 25), ymd(2024, 12, 26)].into_iter().collect());
        assert_eq!(calendar.next_working_day(ymd(2024, 12, 24)), Some(ymd(2024, 12, 27)));
        assert_eq!(calendar.previous_working_day(ymd(2024, 12, 27)), Some(ymd(2024, 12, 24)));
        assert_eq!(calendar.shift_n_working_days(ymd(2024, 12, 24), 2), Some(ymd(2024, 12, 30)));
        assert_eq!(calendar.shift_n_working_days(ymd(2024, 12, 24), 0), Some(ymd(2024, 12, 24)));
    }

    #[test]
    fn walks_holiday_runs_longer_than_a_week() {
        let run: HashSet<NaiveDate> = (1..=20).map(|day| ymd(2030, 7, day)).collect();
        let calendar = DateSetCalendar(run);
        assert_eq!(calendar.next_working_day(ymd(2030, 6, 28)), Some(ymd(2030, 7, 22)));
        assert_eq!(calendar.previous_working_day(ymd(2030, 7, 21)), Some(ymd(2030, 6, 28)));
    }

    #[test]
    fn stops_at_the_ends_of_the_date_range() {
        let calendar = DateSetCalendar(HashSet::new());
        assert_eq!(calendar.next_working_day(NaiveDate::MAX), None);
        assert_eq!(calendar.previous_working_day(NaiveDate::MIN), None);
        assert_eq!(calendar.shift_n_working_days(NaiveDate::MAX, 0), Some(NaiveDate::MAX));
    }
}
