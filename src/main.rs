use std::env;
use std::process::ExitCode;

use flexi_logger::Logger;
use log::error;

use ukbankholidays::{
    BankHolidays,
    Configuration,
    Division,
    HolidayError
};

fn run() -> Result<(), HolidayError> {
    let config = match env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::new()
    };
    let bank_holidays = BankHolidays::new(config)?;

    for division in Division::ALL {
        let query = bank_holidays.query_for(division, None)?;
        let next_holiday = query
            .get_next_holiday(None)
            .map_or_else(|| "unknown".to_owned(), |holiday| format!("{} {}", holiday.date, holiday.title));
        let next_working_day = query
            .get_next_working_day(None)
            .map_or_else(|| "unknown".to_owned(), |date| date.to_string());
        println!("{}: next holiday {}, next working day {}",
                 bank_holidays.division_name(division, None),
                 next_holiday,
                 next_working_day);
    }
    Ok(())
}

fn main() -> ExitCode {
    let _logger = match Logger::try_with_env_or_str("info").and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
