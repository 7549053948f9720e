use std::collections::{
    BTreeMap,
    BTreeSet,
    HashMap
};

use serde::Deserialize;

use crate::error::holidayerror::HolidayError;
use crate::source::rawpayload::RawSourcePayload;

use super::locale::Locale;
use super::localeresolver::{
    HolidayText,
    LocalizedText
};

const BUNDLED_CATALOGS: [&str; 1] = [
    include_str!("../../data/locale/cy.json")
];

#[derive(Deserialize)]
struct TranslationCatalogJsonProp {
    locale: Locale,
    messages: HashMap<String, String>
}

/// English message → localized message for one locale.
///
/// Lookups are exact: a title that differs from the catalog's source text in
/// any way has no translation.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    locale: Locale,
    messages: HashMap<String, String>
}

impl TranslationCatalog {
    pub fn new(locale: Locale, messages: HashMap<String, String>) -> TranslationCatalog {
        TranslationCatalog { locale, messages }
    }

    pub fn from_json_str(text: &str) -> Result<TranslationCatalog, serde_json::Error> {
        let json_prop: TranslationCatalogJsonProp = serde_json::from_str(text)?;
        Ok(TranslationCatalog::new(json_prop.locale, json_prop.messages))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn translate(&self, message: &str) -> Option<&str> {
        self.messages.get(message).map(String::as_str)
    }

    /// Translates a whole title/notes record, or nothing.
    ///
    /// Empty notes need no translation; any other untranslated part makes the
    /// record untranslated so that languages are never mixed.
    pub fn translate_text(&self, text: &HolidayText) -> Option<HolidayText> {
        let title = self.translate(&text.title)?;
        let notes = if text.notes.is_empty() {
            ""
        } else {
            self.translate(&text.notes)?
        };
        Some(HolidayText::new(title, notes))
    }

    /// Titles and non-empty notes in `payload` that this catalog lacks.
    pub fn untranslated_messages(&self, payload: &RawSourcePayload) -> BTreeSet<String> {
        payload
            .events()
            .flat_map(|event| {
                let notes = event.notes.as_deref().filter(|notes| !notes.is_empty());
                std::iter::once(event.title.as_str()).chain(notes)
            })
            .filter(|message| self.translate(message).is_none())
            .map(str::to_owned)
            .collect()
    }
}

/// Every catalog available to the engine, one per non-default locale.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    catalogs: BTreeMap<Locale, TranslationCatalog>
}

impl CatalogSet {
    pub fn empty() -> CatalogSet {
        CatalogSet::default()
    }

    /// Catalogs compiled into the crate. A parse failure is a packaging
    /// defect and is reported as `SnapshotUnavailable`.
    pub fn bundled() -> Result<CatalogSet, HolidayError> {
        let mut catalogs = CatalogSet::empty();
        for text in BUNDLED_CATALOGS {
            let catalog = TranslationCatalog::from_json_str(text)
                .map_err(|error| HolidayError::SnapshotUnavailable(
                    format!("bundled translation catalog: {}", error)
                ))?;
            catalogs.insert(catalog);
        }
        Ok(catalogs)
    }

    pub fn insert(&mut self, catalog: TranslationCatalog) {
        self.catalogs.insert(catalog.locale(), catalog);
    }

    pub fn get(&self, locale: Locale) -> Option<&TranslationCatalog> {
        self.catalogs.get(&locale)
    }

    /// Builds the locale-keyed text for an English record.
    pub fn localize(&self, english: HolidayText) -> LocalizedText {
        let translations: Vec<(Locale, HolidayText)> = self.catalogs
            .values()
            .filter(|catalog| catalog.locale() != Locale::DEFAULT)
            .filter_map(|catalog| {
                catalog.translate_text(&english).map(|text| (catalog.locale(), text))
            })
            .collect();
        let mut localized = LocalizedText::new(english);
        for (locale, text) in translations {
            localized.insert(locale, text);
        }
        localized
    }

    /// Single message lookup with fallback to the message itself.
    pub fn translate_message<'a>(&'a self, locale: Locale, message: &'a str) -> &'a str {
        self.get(locale)
            .and_then(|catalog| catalog.translate(message))
            .unwrap_or(message)
    }
}
