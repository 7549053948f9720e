use std::sync::Arc;

use chrono::{
    Datelike,
    Local,
    NaiveDate
};

use crate::error::holidayerror::HolidayError;
use crate::locale::locale::Locale;
use crate::model::dataset::Dataset;
use crate::model::division::DivisionFilter;
use crate::model::holiday::{
    Holiday,
    HolidayRecord
};
use crate::time::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;

/// Date questions against one division filter, answered in one locale.
///
/// Holds its own reference to the dataset it was created from, so a refresh
/// of the engine never changes the answers of a query already handed out.
///
/// Every `from` argument is a calendar day and comparisons are strict: a
/// holiday on `from` is neither the next nor the previous holiday. When
/// `from` is `None` the reference date is today (or the `as_of` override).
#[derive(Debug, Clone)]
pub struct HolidayQuery {
    dataset: Arc<Dataset>,
    division: DivisionFilter,
    locale: Locale,
    as_of: Option<NaiveDate>
}

impl HolidayQuery {
    pub fn new(dataset: Arc<Dataset>,
               division: DivisionFilter,
               locale: Locale) -> Result<HolidayQuery, HolidayError> {
        if let DivisionFilter::Only(missing) = division {
            if !dataset.contains(division) {
                return Err(HolidayError::DivisionNotLoaded(missing));
            }
        }
        Ok(HolidayQuery { dataset, division, locale, as_of: None })
    }

    /// The same question against another division.
    pub fn with_division(self, division: impl Into<DivisionFilter>) -> Result<HolidayQuery, HolidayError> {
        HolidayQuery::new(self.dataset, division.into(), self.locale)
            .map(|query| query.as_of_opt(self.as_of))
    }

    pub fn with_locale(mut self, locale: Locale) -> HolidayQuery {
        self.locale = locale;
        self
    }

    /// Replaces "today" as the default reference date.
    pub fn as_of(self, today: NaiveDate) -> HolidayQuery {
        self.as_of_opt(Some(today))
    }

    fn as_of_opt(mut self, today: Option<NaiveDate>) -> HolidayQuery {
        self.as_of = today;
        self
    }

    pub fn division(&self) -> DivisionFilter {
        self.division
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    fn records(&self) -> &[HolidayRecord] {
        self.dataset.holidays(self.division).unwrap_or_default()
    }

    fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    fn reference_date(&self, from: Option<NaiveDate>) -> NaiveDate {
        from.unwrap_or_else(|| self.today())
    }

    fn render(&self, records: &[HolidayRecord]) -> Vec<Holiday> {
        records.iter().map(|record| record.render(self.locale)).collect()
    }

    /// Holidays with `from <= date <= to`; a missing bound is open.
    pub fn get_holidays(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<Holiday> {
        let range = RangeOfDates::new(from, to);
        self.render(range.slice(self.records(), HolidayRecord::date))
    }

    pub fn get_holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        RangeOfDates::year(year)
            .map(|range| self.render(range.slice(self.records(), HolidayRecord::date)))
            .unwrap_or_default()
    }

    pub fn current_year_holidays(&self) -> Vec<Holiday> {
        self.get_holidays_for_year(self.today().year())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.records()
            .binary_search_by_key(&date, HolidayRecord::date)
            .is_ok()
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        HolidayCalendar::is_working_day(self, date)
    }

    pub fn get_next_holiday(&self, from: Option<NaiveDate>) -> Option<Holiday> {
        let from = self.reference_date(from);
        let records = self.records();
        let index = records.partition_point(|record| record.date() <= from);
        records.get(index).map(|record| record.render(self.locale))
    }

    pub fn get_previous_holiday(&self, from: Option<NaiveDate>) -> Option<Holiday> {
        let from = self.reference_date(from);
        let records = self.records();
        let index = records.partition_point(|record| record.date() < from);
        index
            .checked_sub(1)
            .and_then(|previous| records.get(previous))
            .map(|record| record.render(self.locale))
    }

    /// Smallest working day strictly after `from`. Past the end of the known
    /// data only weekends are skipped. `None` only past `NaiveDate::MAX`.
    pub fn get_next_working_day(&self, from: Option<NaiveDate>) -> Option<NaiveDate> {
        self.next_working_day(self.reference_date(from))
    }

    pub fn get_previous_working_day(&self, from: Option<NaiveDate>) -> Option<NaiveDate> {
        self.previous_working_day(self.reference_date(from))
    }

    /// The n-th working day from `date`, backwards for negative `n`.
    pub fn shift_working_days(&self, date: NaiveDate, n: i32) -> Option<NaiveDate> {
        self.shift_n_working_days(date, n)
    }

    /// Up to `count` holidays after `from` (or before it, nearest first,
    /// when `forward` is false). Fewer are returned when the known list runs
    /// out.
    pub fn get_holidays_series(&self,
                               from: Option<NaiveDate>,
                               count: i32,
                               forward: bool) -> Result<Vec<Holiday>, HolidayError> {
        let count = usize::try_from(count).map_err(|_| HolidayError::negative_count(count))?;
        let from = self.reference_date(from);
        let records = self.records();
        let holidays = if forward {
            let start = records.partition_point(|record| record.date() <= from);
            records[start..]
                .iter()
                .take(count)
                .map(|record| record.render(self.locale))
                .collect()
        } else {
            let end = records.partition_point(|record| record.date() < from);
            records[..end]
                .iter()
                .rev()
                .take(count)
                .map(|record| record.render(self.locale))
                .collect()
        };
        Ok(holidays)
    }

    /// Up to `count` working days after `from` (before it, nearest first,
    /// when `forward` is false).
    ///
    /// Stops at the last (or first) known holiday of the filtered list,
    /// because beyond it there is no data to say which days are holidays.
    pub fn get_working_days_series(&self,
                                   from: Option<NaiveDate>,
                                   count: i32,
                                   forward: bool) -> Result<Vec<NaiveDate>, HolidayError> {
        let count = usize::try_from(count).map_err(|_| HolidayError::negative_count(count))?;
        let records = self.records();
        let known_limit = if forward {
            records.last()
        } else {
            records.first()
        };
        let Some(known_limit) = known_limit.map(HolidayRecord::date) else {
            return Ok(Vec::new());
        };

        let mut days = Vec::with_capacity(count.min(366));
        let mut d = self.reference_date(from);
        while days.len() < count {
            let step = if forward {
                self.next_working_day(d)
            } else {
                self.previous_working_day(d)
            };
            let Some(next) = step else {
                break;
            };
            d = next;
            let within_known = if forward { d <= known_limit } else { d >= known_limit };
            if !within_known {
                break;
            }
            days.push(d);
        }
        Ok(days)
    }
}

impl HolidayCalendar for HolidayQuery {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        HolidayQuery::is_holiday(self, d)
    }
}
