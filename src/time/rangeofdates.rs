use chrono::NaiveDate;

/// Inclusive date range; a missing end is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeOfDates {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>
}

impl RangeOfDates {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> RangeOfDates {
        RangeOfDates { start_date, end_date }
    }

    pub fn unbounded() -> RangeOfDates {
        RangeOfDates::default()
    }

    /// 1 January to 31 December of `year`, or `None` outside chrono's range.
    pub fn year(year: i32) -> Option<RangeOfDates> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(RangeOfDates::new(Some(start), Some(end)))
    }

    /// A range whose start lies after its end contains nothing.
    pub fn is_empty(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(start), Some(end)) if start > end)
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| d >= start) &&
        self.end_date.is_none_or(|end| d <= end)
    }

    /// The contiguous run of `items` whose dates fall in the range.
    /// `items` must be sorted by `date_of`.
    pub fn slice<'a, T, F>(&self, items: &'a [T], date_of: F) -> &'a [T]
    where
        F: Fn(&T) -> NaiveDate
    {
        if self.is_empty() {
            return &[];
        }
        let lower = self.start_date
            .map_or(0, |start| items.partition_point(|item| date_of(item) < start));
        let upper = self.end_date
            .map_or(items.len(), |end| items.partition_point(|item| date_of(item) <= end));
        &items[lower..upper.max(lower)]
    }
}
