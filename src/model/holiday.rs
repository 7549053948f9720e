use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::locale::locale::Locale;
use crate::locale::localeresolver::LocalizedText;

use super::division::Division;

/// A normalized holiday as stored in the dataset.
///
/// Text is kept for every available locale; `render` picks one per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    date: NaiveDate,
    text: LocalizedText,
    bunting: bool,
    divisions: BTreeSet<Division>
}

impl HolidayRecord {
    pub fn new(date: NaiveDate,
               text: LocalizedText,
               bunting: bool,
               divisions: BTreeSet<Division>) -> HolidayRecord {
        HolidayRecord { date, text, bunting, divisions }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text(&self) -> &LocalizedText {
        &self.text
    }

    pub fn bunting(&self) -> bool {
        self.bunting
    }

    pub fn divisions(&self) -> &BTreeSet<Division> {
        &self.divisions
    }

    pub fn render(&self, locale: Locale) -> Holiday {
        let text = self.text.resolve(locale);
        Holiday {
            date: self.date,
            title: text.title.clone(),
            notes: text.notes.clone(),
            bunting: self.bunting,
            divisions: self.divisions.clone()
        }
    }
}

/// A holiday with its text resolved to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub title: String,
    pub notes: String,
    pub bunting: bool,
    pub divisions: BTreeSet<Division>
}
