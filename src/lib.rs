pub mod configuration;

pub mod engine {
    pub mod bankholidays;
}

pub mod error {
    pub mod holidayerror;
    pub mod fetcherror;
    pub mod malformedrecorderror;
}

pub mod locale {
    pub mod locale;
    pub mod localeresolver;
    pub mod translationcatalog;
}

pub mod model {
    pub mod division;
    pub mod holiday;
    pub mod dataset;
    pub mod normalizer;
}

pub mod query {
    pub mod holidayquery;
}

pub mod source {
    pub mod rawpayload;
    pub mod holidayfetcher;
    pub mod bundledsnapshot;
    pub mod datasource;
}

pub mod time {
    pub mod holidaycalendar;
    pub mod rangeofdates;
}

pub use configuration::Configuration;
pub use engine::bankholidays::BankHolidays;
pub use error::holidayerror::HolidayError;
pub use locale::locale::Locale;
pub use model::division::{
    Division,
    DivisionFilter
};
pub use model::holiday::Holiday;
pub use query::holidayquery::HolidayQuery;
pub use source::datasource::DataOrigin;
