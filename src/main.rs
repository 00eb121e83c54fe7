mod config;
mod conversion;
mod errors;
mod initialization;
mod logging;
mod manager_forecast;
mod models;
mod report;
mod summary;

use log::error;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::report::process_weather;

fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let report = process_weather(&config.files.forecast_file)
        .inspect_err(|e| error!("unable to summarize {}: {}", config.files.forecast_file, e))?;
    println!("{}", report);

    Ok(())
}
