use chrono::DateTime;
use crate::errors::{ParseError, SummaryError};

/// Degree sign followed by the Celsius unit letter
pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const DATE_OUTPUT_FORMAT: &str = "%A %d %B %Y";

/// Returns the temperature with one decimal and the degree Celsius marker, e.g. "21.1°C"
///
/// # Arguments
///
/// * 'temp' - temperature in degrees Celsius
pub fn format_temperature(temp: f64) -> String {
    format!("{:.1}{}", temp, DEGREE_SYMBOL)
}

/// Converts an ISO 8601 date time into a human readable date like "Friday 01 September 2017"
///
/// The calendar date is taken in the offset carried by the input, the time of day plays no part.
///
/// # Arguments
///
/// * 'iso_string' - date time formatted as YYYY-MM-DDTHH:MM:SS+HH:MM
pub fn convert_date(iso_string: &str) -> Result<String, ParseError> {
    let date_time = DateTime::parse_from_str(iso_string, DATE_INPUT_FORMAT)
        .map_err(|e| ParseError::from((iso_string, e)))?;

    Ok(date_time.format(DATE_OUTPUT_FORMAT).to_string())
}

/// Rounds to one decimal, ties go to the even tenth
///
/// Rounding works on the exact binary value, scaling by ten first would round twice.
///
/// # Arguments
///
/// * 'value' - the value to round
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Converts Fahrenheit to Celsius rounded to one decimal
///
/// # Arguments
///
/// * 'temp_in_fahrenheit' - temperature in degrees Fahrenheit
pub fn convert_f_to_c(temp_in_fahrenheit: f64) -> f64 {
    round_tenth((temp_in_fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Returns the mean rounded to one decimal
///
/// # Arguments
///
/// * 'total' - sum of all items
/// * 'num_items' - number of items summed
pub fn calculate_mean(total: f64, num_items: usize) -> Result<f64, SummaryError> {
    if num_items == 0 {
        return Err(SummaryError::NoDays);
    }

    Ok(round_tenth(total / num_items as f64))
}
