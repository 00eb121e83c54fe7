pub mod errors;

use std::fs;
use std::io::ErrorKind;
use log::debug;
use crate::manager_forecast::errors::LoadError;
use crate::models::forecast::ForecastDocument;

/// Reads and decodes a forecast document
///
/// The whole file is read before decoding starts, so the file handle is released
/// whether or not the content turns out to be a valid forecast.
///
/// # Arguments
///
/// * 'forecast_file' - path to the json file holding the forecast
pub fn load_forecast(forecast_file: &str) -> Result<ForecastDocument, LoadError> {
    let json = fs::read_to_string(forecast_file).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(forecast_file.to_string()),
        _ => LoadError::Io(e),
    })?;

    let forecast: ForecastDocument = serde_json::from_str(&json)?;
    debug!("decoded {} forecast days from {}", forecast.daily_forecasts.len(), forecast_file);

    Ok(forecast)
}
