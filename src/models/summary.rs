/// Values derived from a single forecast day
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedDay {
    pub date_label: String,
    pub min_celsius: f64,
    pub max_celsius: f64,
}

/// A temperature together with the formatted date it occurs on
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub value: f64,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub days: usize,
    pub lowest: Extreme,
    pub highest: Extreme,
    pub mean_min: f64,
    pub mean_max: f64,
}
