use log::info;
use crate::conversion::format_temperature;
use crate::errors::ReportError;
use crate::manager_forecast::load_forecast;
use crate::models::forecast::DayEntry;
use crate::models::summary::{DerivedDay, SummaryStats};
use crate::summary::derive_day;

/// Renders the overview block that precedes the day details
///
/// # Arguments
///
/// * 'stats' - summary statistics over all forecast days
pub fn render_header(stats: &SummaryStats) -> String {
    format!(
        "{} Day Overview\n\
        \x20   The lowest temperature will be {}, and will occur on {}.\n\
        \x20   The highest temperature will be {}, and will occur on {}.\n\
        \x20   The average low this week is {}.\n\
        \x20   The average high this week is {}.\n",
        stats.days,
        format_temperature(stats.lowest.value), stats.lowest.date_label,
        format_temperature(stats.highest.value), stats.highest.date_label,
        format_temperature(stats.mean_min),
        format_temperature(stats.mean_max),
    )
}

/// Renders the detail block for one forecast day, including its trailing blank line
///
/// # Arguments
///
/// * 'entry' - the forecast day as decoded from the document
/// * 'derived' - date label and Celsius temperatures derived from the entry
pub fn render_day(entry: &DayEntry, derived: &DerivedDay) -> String {
    format!(
        "-------- {} --------\n\
        Minimum Temperature: {}\n\
        Maximum Temperature: {}\n\
        Daytime: {}\n\
        \x20   Chance of rain:  {}%\n\
        Nighttime: {}\n\
        \x20   Chance of rain:  {}%\n",
        derived.date_label,
        format_temperature(derived.min_celsius),
        format_temperature(derived.max_celsius),
        entry.day.long_phrase,
        entry.day.rain_probability,
        entry.night.long_phrase,
        entry.night.rain_probability,
    )
}

/// Builds the full report from a list of forecast days
///
/// # Arguments
///
/// * 'entries' - forecast days in document order
pub fn render_report(entries: &[DayEntry]) -> Result<String, ReportError> {
    let mut derived: Vec<DerivedDay> = Vec::with_capacity(entries.len());
    let mut blocks: Vec<String> = Vec::with_capacity(entries.len());

    for entry in entries {
        let day = derive_day(entry)?;
        blocks.push(render_day(entry, &day));
        derived.push(day);
    }

    let stats = SummaryStats::from_days(&derived)?;

    Ok(format!("{}\n{}\n", render_header(&stats), blocks.join("\n")))
}

/// Loads a forecast file and converts it into the human readable report
///
/// Any load, decode or date failure aborts the whole report, nothing is rendered partially.
///
/// # Arguments
///
/// * 'forecast_file' - path to the json file holding the forecast
pub fn process_weather(forecast_file: &str) -> Result<String, ReportError> {
    let forecast = load_forecast(forecast_file)?;
    let report = render_report(&forecast.daily_forecasts)?;
    info!("rendered report for {} days from {}", forecast.daily_forecasts.len(), forecast_file);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::{Measurement, Phrase, Temperature};

    fn entry(date: &str, min: f64, max: f64, day: (&str, i64), night: (&str, i64)) -> DayEntry {
        DayEntry {
            date: date.to_string(),
            temperature: Temperature {
                minimum: Measurement { value: min },
                maximum: Measurement { value: max },
            },
            day: Phrase { long_phrase: day.0.to_string(), rain_probability: day.1 },
            night: Phrase { long_phrase: night.0.to_string(), rain_probability: night.1 },
        }
    }

    #[test]
    fn renders_day_block() {
        let e = entry("2017-09-01T07:00:00+10:00", 40.0, 60.0, ("Sunny and pleasant", 5), ("Clear and cool", 0));
        let day = derive_day(&e).unwrap();

        let expected = "-------- Friday 01 September 2017 --------\n\
            Minimum Temperature: 4.4°C\n\
            Maximum Temperature: 15.6°C\n\
            Daytime: Sunny and pleasant\n    Chance of rain:  5%\n\
            Nighttime: Clear and cool\n    Chance of rain:  0%\n";
        assert_eq!(render_day(&e, &day), expected);
    }

    #[test]
    fn renders_full_report() {
        let entries = [
            entry("2017-09-01T07:00:00+10:00", 40.0, 60.0, ("Sunny", 5), ("Clear", 0)),
            entry("2017-09-02T07:00:00+10:00", 50.0, 72.0, ("Showers", 80), ("Rain", 95)),
        ];

        let expected = "2 Day Overview\n\
            \x20   The lowest temperature will be 4.4°C, and will occur on Friday 01 September 2017.\n\
            \x20   The highest temperature will be 22.2°C, and will occur on Saturday 02 September 2017.\n\
            \x20   The average low this week is 7.2°C.\n\
            \x20   The average high this week is 18.9°C.\n\
            \n\
            -------- Friday 01 September 2017 --------\n\
            Minimum Temperature: 4.4°C\n\
            Maximum Temperature: 15.6°C\n\
            Daytime: Sunny\n    Chance of rain:  5%\n\
            Nighttime: Clear\n    Chance of rain:  0%\n\
            \n\
            -------- Saturday 02 September 2017 --------\n\
            Minimum Temperature: 10.0°C\n\
            Maximum Temperature: 22.2°C\n\
            Daytime: Showers\n    Chance of rain:  80%\n\
            Nighttime: Rain\n    Chance of rain:  95%\n\
            \n";
        assert_eq!(render_report(&entries).unwrap(), expected);
    }

    #[test]
    fn single_day_header_repeats_the_day() {
        let entries = [entry("2017-09-01T07:00:00+10:00", 40.0, 60.0, ("Sunny", 5), ("Clear", 0))];
        let report = render_report(&entries).unwrap();

        assert!(report.starts_with("1 Day Overview\n"));
        assert!(report.contains("The lowest temperature will be 4.4°C, and will occur on Friday 01 September 2017."));
        assert!(report.contains("The highest temperature will be 15.6°C, and will occur on Friday 01 September 2017."));
        assert!(report.contains("The average low this week is 4.4°C."));
        assert!(report.contains("The average high this week is 15.6°C."));
    }

    #[test]
    fn average_low_of_cold_days() {
        let entries = [
            entry("2017-09-01T07:00:00+10:00", 0.0, 50.0, ("Snow", 40), ("Flurries", 30)),
            entry("2017-09-02T07:00:00+10:00", 7.0, 60.0, ("Cloudy", 10), ("Clear", 0)),
        ];
        let report = render_report(&entries).unwrap();

        assert!(report.contains("The average low this week is -15.9°C."));
        assert!(report.contains("The lowest temperature will be -17.8°C, and will occur on Friday 01 September 2017."));
    }

    #[test]
    fn bad_date_aborts_report() {
        let entries = [
            entry("2017-09-01T07:00:00+10:00", 40.0, 60.0, ("Sunny", 5), ("Clear", 0)),
            entry("2017-09-02 07:00", 40.0, 60.0, ("Sunny", 5), ("Clear", 0)),
        ];
        assert!(matches!(render_report(&entries), Err(ReportError::Parse(_))));
    }

    #[test]
    fn empty_forecast_is_an_error() {
        assert!(matches!(render_report(&[]), Err(ReportError::Summary(_))));
    }

    #[test]
    fn processes_bundled_sample() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/forecast_5days_a.json");
        let report = process_weather(path).unwrap();

        assert!(report.starts_with("5 Day Overview\n"));
        assert_eq!(report.matches("Chance of rain:").count(), 10);
        assert!(report.ends_with("%\n\n"));
    }

    #[test]
    fn missing_forecast_file_propagates() {
        let result = process_weather("/nonexistent/forecast_summary/forecast.json");
        assert!(matches!(result, Err(ReportError::Load(_))));
    }
}
