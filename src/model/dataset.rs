use std::collections::{
    BTreeMap,
    BTreeSet
};

use chrono::NaiveDate;

use crate::source::datasource::DataOrigin;

use super::division::{
    Division,
    DivisionFilter
};
use super::holiday::HolidayRecord;

/// The normalized holiday data: one date-ordered list per division plus the
/// common-to-all view.
///
/// Built once and never mutated; a refresh builds a new `Dataset`.
#[derive(Debug, Clone)]
pub struct Dataset {
    divisions: BTreeMap<Division, Vec<HolidayRecord>>,
    common: Vec<HolidayRecord>,
    origin: DataOrigin
}

impl Dataset {
    /// Each list must already be sorted by strictly increasing date.
    pub fn new(divisions: BTreeMap<Division, Vec<HolidayRecord>>, origin: DataOrigin) -> Dataset {
        let common = common_view(&divisions);
        Dataset { divisions, common, origin }
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn divisions(&self) -> impl Iterator<Item = Division> + '_ {
        self.divisions.keys().copied()
    }

    pub fn contains(&self, filter: DivisionFilter) -> bool {
        match filter {
            DivisionFilter::Common => true,
            DivisionFilter::Only(division) => self.divisions.contains_key(&division)
        }
    }

    /// The list for `filter`, or `None` when that division was not retained.
    pub fn holidays(&self, filter: DivisionFilter) -> Option<&[HolidayRecord]> {
        match filter {
            DivisionFilter::Common => Some(&self.common),
            DivisionFilter::Only(division) => self.divisions.get(&division).map(Vec::as_slice)
        }
    }

    pub fn holiday_count(&self) -> usize {
        self.divisions.values().map(Vec::len).sum()
    }

    pub fn common_dates(&self) -> BTreeSet<NaiveDate> {
        self.common.iter().map(HolidayRecord::date).collect()
    }
}

/// Dates present in every retained division, taken from the England and
/// Wales list when it is retained.
fn common_view(divisions: &BTreeMap<Division, Vec<HolidayRecord>>) -> Vec<HolidayRecord> {
    let dates_in_common = divisions
        .values()
        .map(|holidays| holidays.iter().map(HolidayRecord::date).collect::<BTreeSet<NaiveDate>>())
        .reduce(|s1, s2| s1.intersection(&s2).copied().collect());
    let base = divisions
        .get(&Division::EnglandAndWales)
        .or_else(|| divisions.values().next());

    match (base, dates_in_common) {
        (Some(holidays), Some(dates)) => holidays
            .iter()
            .filter(|holiday| dates.contains(&holiday.date()))
            .cloned()
            .collect(),
        _ => Vec::new()
    }
}
