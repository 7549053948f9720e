use std::sync::{
    Arc,
    PoisonError,
    RwLock
};

use log::info;

use crate::configuration::Configuration;
use crate::error::holidayerror::HolidayError;
use crate::locale::locale::Locale;
use crate::locale::translationcatalog::CatalogSet;
use crate::model::dataset::Dataset;
use crate::model::division::{
    Division,
    DivisionFilter
};
use crate::model::normalizer::Normalizer;
use crate::query::holidayquery::HolidayQuery;
use crate::source::datasource::DataSource;

/// UK bank holidays, loaded from GOV.UK or the bundled snapshot.
///
/// Each instance owns its dataset. It is built on first use (or during
/// construction when the configuration asks for cached-only or eager
/// loading) and afterwards only replaced as a whole by `refresh`.
///
/// # Concurrency
///
/// Queries take a clone of the current `Arc<Dataset>` and work on that, so
/// they can run from many threads at once and a concurrent `refresh` is seen
/// either entirely or not at all. A refresh builds the new dataset outside
/// the lock and only holds the write lock for the swap.
pub struct BankHolidays {
    configuration: Configuration,
    source: DataSource,
    normalizer: Normalizer,
    dataset: RwLock<Option<Arc<Dataset>>>
}

impl BankHolidays {
    pub fn new(configuration: Configuration) -> Result<BankHolidays, HolidayError> {
        let source = DataSource::from_configuration(&configuration);
        BankHolidays::with_data_source(configuration, source)
    }

    pub fn with_data_source(configuration: Configuration,
                            source: DataSource) -> Result<BankHolidays, HolidayError> {
        configuration.validate()?;
        let engine = BankHolidays {
            normalizer: Normalizer::new(CatalogSet::bundled()?),
            configuration,
            source,
            dataset: RwLock::new(None)
        };
        if engine.configuration.use_cached_holidays() || engine.configuration.eager_load() {
            engine.dataset()?;
        }
        Ok(engine)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The current dataset, building it on first access.
    pub fn dataset(&self) -> Result<Arc<Dataset>, HolidayError> {
        if let Some(dataset) = self.dataset.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let mut slot = self.dataset.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have built it while we waited for the write lock.
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(self.build_dataset()?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Loads the data again, ignoring what is cached, and swaps it in.
    ///
    /// On error the previous dataset stays in place.
    pub fn refresh(&self) -> Result<Arc<Dataset>, HolidayError> {
        let dataset = Arc::new(self.build_dataset()?);
        let mut slot = self.dataset.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&dataset));
        info!("Bank holiday data refreshed");
        Ok(dataset)
    }

    fn build_dataset(&self) -> Result<Dataset, HolidayError> {
        let loaded = self.source.load(self.configuration.use_cached_holidays())?;
        let dataset = self.normalizer.normalize(&loaded.payload, loaded.origin, None);
        info!(
            "Built bank holiday dataset from {:?} data: {} holidays, {} common to all divisions",
            dataset.origin(),
            dataset.holiday_count(),
            dataset.common_dates().len()
        );
        Ok(dataset)
    }

    /// Common-to-all holidays in the configured locale.
    pub fn query(&self) -> Result<HolidayQuery, HolidayError> {
        self.query_for(DivisionFilter::Common, None)
    }

    /// `locale` defaults to the configured one.
    pub fn query_for(&self,
                     division: impl Into<DivisionFilter>,
                     locale: Option<Locale>) -> Result<HolidayQuery, HolidayError> {
        let locale = locale.unwrap_or(self.configuration.locale());
        HolidayQuery::new(self.dataset()?, division.into(), locale)
    }

    /// Division name in `locale` (configured locale when `None`).
    pub fn division_name(&self, division: Division, locale: Option<Locale>) -> &str {
        let locale = locale.unwrap_or(self.configuration.locale());
        self.normalizer
            .catalogs()
            .translate_message(locale, division.display_name())
    }
}
