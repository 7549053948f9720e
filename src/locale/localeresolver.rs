use std::collections::BTreeMap;

use serde::Serialize;

use super::locale::Locale;

/// Title and notes in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayText {
    pub title: String,
    pub notes: String
}

impl HolidayText {
    pub fn new(title: impl Into<String>, notes: impl Into<String>) -> HolidayText {
        HolidayText { title: title.into(), notes: notes.into() }
    }
}

/// Holiday text keyed by locale.
///
/// The default-locale text is always present, so resolution cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    default: HolidayText,
    translations: BTreeMap<Locale, HolidayText>
}

impl LocalizedText {
    pub fn new(default: HolidayText) -> LocalizedText {
        LocalizedText { default, translations: BTreeMap::new() }
    }

    pub fn with_translation(mut self, locale: Locale, text: HolidayText) -> LocalizedText {
        self.insert(locale, text);
        self
    }

    pub fn insert(&mut self, locale: Locale, text: HolidayText) {
        if locale == Locale::DEFAULT {
            self.default = text;
        } else {
            self.translations.insert(locale, text);
        }
    }

    pub fn default_text(&self) -> &HolidayText {
        &self.default
    }

    pub fn get(&self, locale: Locale) -> Option<&HolidayText> {
        if locale == Locale::DEFAULT {
            Some(&self.default)
        } else {
            self.translations.get(&locale)
        }
    }

    pub fn has_translation(&self, locale: Locale) -> bool {
        self.get(locale).is_some()
    }

    /// Walks the locale's fallback chain and returns the first text found.
    pub fn resolve(&self, locale: Locale) -> &HolidayText {
        locale
            .fallback_chain()
            .into_iter()
            .find_map(|candidate| self.get(candidate))
            .unwrap_or(&self.default)
    }
}
