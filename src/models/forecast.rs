use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Measurement {
    #[serde(rename = "Value")]
    pub value: f64,
}

#[derive(Deserialize, Debug)]
pub struct Temperature {
    #[serde(rename = "Minimum")]
    pub minimum: Measurement,
    #[serde(rename = "Maximum")]
    pub maximum: Measurement,
}

#[derive(Deserialize, Debug)]
pub struct Phrase {
    #[serde(rename = "LongPhrase")]
    pub long_phrase: String,
    #[serde(rename = "RainProbability")]
    pub rain_probability: i64,
}

/// One forecast day as delivered in the document.
///
/// The date is kept as its raw ISO 8601 string, it is parsed when the day is derived.
#[derive(Deserialize, Debug)]
pub struct DayEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: Temperature,
    #[serde(rename = "Day")]
    pub day: Phrase,
    #[serde(rename = "Night")]
    pub night: Phrase,
}

#[derive(Deserialize, Debug)]
pub struct ForecastDocument {
    #[serde(rename = "DailyForecasts")]
    pub daily_forecasts: Vec<DayEntry>,
}
