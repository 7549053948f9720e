use std::sync::Arc;

use log::{debug, info, warn};

use crate::configuration::Configuration;
use crate::error::fetcherror::FetchError;
use crate::error::holidayerror::HolidayError;

use super::bundledsnapshot::BundledSnapshot;
use super::holidayfetcher::{
    HolidayFetcher,
    HttpHolidayFetcher
};
use super::rawpayload::RawSourcePayload;

/// Where a dataset's payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Snapshot
}

pub struct LoadedPayload {
    pub payload: RawSourcePayload,
    pub origin: DataOrigin
}

/// Chooses between a live fetch and the bundled snapshot.
pub struct DataSource {
    fetcher: Arc<dyn HolidayFetcher>,
    snapshot: BundledSnapshot
}

impl DataSource {
    pub fn new(fetcher: Arc<dyn HolidayFetcher>, snapshot: BundledSnapshot) -> DataSource {
        DataSource { fetcher, snapshot }
    }

    pub fn from_configuration(configuration: &Configuration) -> DataSource {
        DataSource::new(
            Arc::new(HttpHolidayFetcher::from_configuration(configuration)),
            BundledSnapshot::bundled()
        )
    }

    pub fn snapshot(&self) -> &BundledSnapshot {
        &self.snapshot
    }

    /// Returns the live payload when it can be fetched and has the expected
    /// shape, otherwise the bundled snapshot.
    ///
    /// Fails only when the snapshot itself is unusable.
    pub fn load(&self, prefer_cached_only: bool) -> Result<LoadedPayload, HolidayError> {
        if prefer_cached_only {
            debug!("Using cached bank holiday data");
            return self.load_snapshot();
        }

        match self.fetch_live() {
            Ok(payload) => {
                info!("Loaded {} bank holiday events from {}", payload.event_count(), self.fetcher.name());
                Ok(LoadedPayload { payload, origin: DataOrigin::Live })
            },
            Err(error) => {
                warn!("Using backup bank holiday data");
                debug!("{} failed: {}", self.fetcher.name(), error);
                self.load_snapshot()
            }
        }
    }

    fn fetch_live(&self) -> Result<RawSourcePayload, FetchError> {
        let payload = self.fetcher.fetch()?;
        payload.validate()?;
        Ok(payload)
    }

    fn load_snapshot(&self) -> Result<LoadedPayload, HolidayError> {
        let payload = self.snapshot.load()?;
        Ok(LoadedPayload { payload, origin: DataOrigin::Snapshot })
    }
}
