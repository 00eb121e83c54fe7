use crate::conversion::{calculate_mean, convert_date, convert_f_to_c};
use crate::errors::{ParseError, SummaryError};
use crate::models::forecast::DayEntry;
use crate::models::summary::{DerivedDay, Extreme, SummaryStats};

/// Derives formatted date and Celsius temperatures for a forecast day
///
/// # Arguments
///
/// * 'entry' - the forecast day as decoded from the document
pub fn derive_day(entry: &DayEntry) -> Result<DerivedDay, ParseError> {
    Ok(DerivedDay {
        date_label: convert_date(&entry.date)?,
        min_celsius: convert_f_to_c(entry.temperature.minimum.value),
        max_celsius: convert_f_to_c(entry.temperature.maximum.value),
    })
}

impl SummaryStats {
    /// Aggregates derived days in a single pass
    ///
    /// Extremes are only replaced on strict improvement, so ties resolve to the earliest day.
    ///
    /// # Arguments
    ///
    /// * 'days' - derived days in document order
    pub fn from_days(days: &[DerivedDay]) -> Result<SummaryStats, SummaryError> {
        let first = days.first().ok_or(SummaryError::NoDays)?;

        let mut lowest = Extreme { value: first.min_celsius, date_label: first.date_label.clone() };
        let mut highest = Extreme { value: first.max_celsius, date_label: first.date_label.clone() };
        let mut min_total = 0.0;
        let mut max_total = 0.0;

        for day in days {
            if day.min_celsius < lowest.value {
                lowest = Extreme { value: day.min_celsius, date_label: day.date_label.clone() };
            }
            if day.max_celsius > highest.value {
                highest = Extreme { value: day.max_celsius, date_label: day.date_label.clone() };
            }
            min_total += day.min_celsius;
            max_total += day.max_celsius;
        }

        Ok(SummaryStats {
            days: days.len(),
            lowest,
            highest,
            mean_min: calculate_mean(min_total, days.len())?,
            mean_max: calculate_mean(max_total, days.len())?,
        })
    }
}
