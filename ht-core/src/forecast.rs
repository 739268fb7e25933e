//! Forecast payloads and the views derived from them (statistics, table,
//! model comparison).

use crate::alert::AlertLevel;
use crate::error::{ensure_paired, Result};
use serde::{Deserialize, Serialize};

/// Which trained model produced a forecast.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelType {
    #[default]
    Lstm,
    Gru,
}

impl ModelType {
    /// Value of the `model_type` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            ModelType::Lstm => "lstm",
            ModelType::Gru => "gru",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelType::Lstm => "LSTM",
            ModelType::Gru => "GRU",
        }
    }
}

impl std::str::FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lstm" => Ok(ModelType::Lstm),
            "gru" => Ok(ModelType::Gru),
            other => Err(format!("unknown model type '{other}' (expected lstm or gru)")),
        }
    }
}

/// Historical and predicted case counts for one disease.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub model_type: Option<ModelType>,
    #[serde(default)]
    pub historical_dates: Vec<String>,
    #[serde(default)]
    pub historical_cases: Vec<f64>,
    #[serde(default)]
    pub forecast_dates: Vec<String>,
    #[serde(default)]
    pub predicted_cases: Vec<f64>,
    pub alert_level: AlertLevel,
    #[serde(default)]
    pub alert_message: String,
    #[serde(default)]
    pub last_updated: String,
}

impl ForecastPayload {
    /// Check that date and value sequences are paired one-to-one.
    pub fn validate(&self) -> Result<()> {
        ensure_paired(
            "historical_cases",
            self.historical_dates.len(),
            self.historical_cases.len(),
        )?;
        ensure_paired(
            "predicted_cases",
            self.forecast_dates.len(),
            self.predicted_cases.len(),
        )
    }

    /// Largest predicted value, `None` for an empty forecast.
    pub fn peak_predicted(&self) -> Option<f64> {
        self.predicted_cases.iter().copied().reduce(f64::max)
    }

    /// "first to last" over the forecast dates.
    pub fn forecast_window(&self) -> Option<String> {
        match (self.forecast_dates.first(), self.forecast_dates.last()) {
            (Some(first), Some(last)) => Some(format!("{first} to {last}")),
            _ => None,
        }
    }

    pub fn statistics(&self) -> ForecastStats {
        ForecastStats {
            window: self.forecast_window(),
            peak: self.peak_predicted(),
            last_updated: self.last_updated.clone(),
        }
    }

    pub fn alert(&self) -> ForecastAlert {
        ForecastAlert {
            level: self.alert_level,
            message: self.alert_message.clone(),
        }
    }

    /// Build the forecast table.
    ///
    /// Each row's trend compares against the previous row; the first row
    /// compares against the last historical value (or 0 without history).
    pub fn table(&self) -> ForecastTable {
        if self.forecast_dates.is_empty() {
            return ForecastTable::Empty;
        }
        let mut previous = self.historical_cases.last().copied().unwrap_or(0.0);
        let rows = self
            .forecast_dates
            .iter()
            .zip(self.predicted_cases.iter())
            .map(|(date, value)| {
                let rising = *value > previous;
                previous = *value;
                ForecastRow {
                    date: date.clone(),
                    predicted: *value,
                    rising,
                }
            })
            .collect();
        ForecastTable::Rows(rows)
    }
}

/// The forecast alert box contents.
#[derive(Debug, PartialEq, Clone)]
pub struct ForecastAlert {
    pub level: AlertLevel,
    pub message: String,
}

impl ForecastAlert {
    pub fn heading(&self) -> String {
        format!("{} RISK", self.level.as_str())
    }
}

/// Summary statistics shown next to the forecast chart.
#[derive(Debug, PartialEq, Clone)]
pub struct ForecastStats {
    pub window: Option<String>,
    pub peak: Option<f64>,
    pub last_updated: String,
}

impl ForecastStats {
    pub fn peak_display(&self) -> String {
        self.peak.map(format_count).unwrap_or_else(|| "-".to_string())
    }
}

/// One row of the forecast table.
#[derive(Debug, PartialEq, Clone)]
pub struct ForecastRow {
    pub date: String,
    pub predicted: f64,
    /// Predicted value is above the previous one
    pub rising: bool,
}

impl ForecastRow {
    pub fn trend_marker(&self) -> &'static str {
        if self.rising {
            "↗"
        } else {
            "↘"
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ForecastTable {
    /// No forecast dates were returned
    Empty,
    Rows(Vec<ForecastRow>),
}

impl ForecastTable {
    pub const EMPTY_MESSAGE: &'static str = "No data available.";

    pub fn rows(&self) -> &[ForecastRow] {
        match self {
            ForecastTable::Empty => &[],
            ForecastTable::Rows(rows) => rows,
        }
    }
}

/// Format a case count the way the dashboard prints numbers: integral
/// values without a fractional part, everything else as-is.
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Aggregate differences between the two models.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub avg_difference: f64,
    pub max_difference: f64,
    pub lstm_avg: f64,
    pub gru_avg: f64,
}

/// LSTM vs GRU predictions over the same window.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ModelComparison {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub forecast_dates: Vec<String>,
    #[serde(default)]
    pub lstm_predictions: Vec<f64>,
    #[serde(default)]
    pub gru_predictions: Vec<f64>,
    #[serde(default)]
    pub historical_dates: Vec<String>,
    #[serde(default)]
    pub historical_cases: Vec<f64>,
    pub comparison: ComparisonSummary,
    #[serde(default)]
    pub last_updated: String,
}

impl ModelComparison {
    pub fn validate(&self) -> Result<()> {
        let n = self.forecast_dates.len();
        ensure_paired("lstm_predictions", n, self.lstm_predictions.len())?;
        ensure_paired("gru_predictions", n, self.gru_predictions.len())?;
        ensure_paired(
            "historical_cases",
            self.historical_dates.len(),
            self.historical_cases.len(),
        )
    }

    /// Per-date (date, lstm, gru) triples in forecast order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.forecast_dates
            .iter()
            .zip(self.lstm_predictions.iter().zip(self.gru_predictions.iter()))
            .map(|(d, (l, g))| (d.as_str(), *l, *g))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn payload(disease: &str, dates: &[&str], values: &[f64]) -> ForecastPayload {
        ForecastPayload {
            disease: Some(disease.to_string()),
            model_type: Some(ModelType::Lstm),
            historical_dates: vec!["2023-12-30".to_string(), "2023-12-31".to_string()],
            historical_cases: vec![4.0, 6.0],
            forecast_dates: dates.iter().map(|d| d.to_string()).collect(),
            predicted_cases: values.to_vec(),
            alert_level: AlertLevel::Medium,
            alert_message: format!("Moderate outbreak risk for {disease}."),
            last_updated: "2024-01-01 08:00:00".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::payload;
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn peak_statistic_is_the_maximum_prediction() {
        let p = payload(
            "Dengue",
            &["2024-01-01", "2024-01-02", "2024-01-03"],
            &[10.0, 20.0, 5.0],
        );
        let stats = p.statistics();
        assert_eq!(stats.peak, Some(20.0));
        assert_eq!(stats.peak_display(), "20");
        assert_eq!(stats.window.as_deref(), Some("2024-01-01 to 2024-01-03"));
        assert_eq!(stats.last_updated, "2024-01-01 08:00:00");
    }

    #[test]
    fn empty_forecast_has_no_peak_or_window() {
        let p = payload("Dengue", &[], &[]);
        let stats = p.statistics();
        assert_eq!(stats.peak, None);
        assert_eq!(stats.window, None);
        assert_eq!(stats.peak_display(), "-");
        assert_eq!(p.table(), ForecastTable::Empty);
    }

    #[test]
    fn table_trend_starts_from_last_historical_value() {
        let p = payload(
            "Dengue",
            &["2024-01-01", "2024-01-02", "2024-01-03"],
            &[5.0, 9.0, 9.0],
        );
        let table = p.table();
        let rows = table.rows();
        assert_eq!(rows.len(), 3);
        // last historical is 6
        assert!(!rows[0].rising);
        assert!(rows[1].rising);
        assert!(!rows[2].rising);
        assert_eq!(rows[1].trend_marker(), "↗");
    }

    #[test]
    fn table_without_history_compares_against_zero() {
        let mut p = payload("Dengue", &["2024-01-01"], &[1.0]);
        p.historical_dates.clear();
        p.historical_cases.clear();
        assert!(p.table().rows()[0].rising);
    }

    #[test]
    fn validate_rejects_unpaired_sequences() {
        let mut p = payload("Dengue", &["2024-01-01", "2024-01-02"], &[5.0, 7.0]);
        assert!(p.validate().is_ok());
        p.predicted_cases.pop();
        assert_eq!(
            p.validate().unwrap_err(),
            DashboardError::DataContract {
                field: "predicted_cases",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn missing_sequences_decode_as_empty() {
        let body = r#"{"alert_level": "LOW", "alert_message": "ok", "last_updated": "now"}"#;
        let p: ForecastPayload = serde_json::from_str(body).unwrap();
        assert!(p.forecast_dates.is_empty());
        assert!(p.validate().is_ok());
        assert_eq!(p.alert().heading(), "LOW RISK");
    }

    #[test]
    fn decodes_full_backend_payload() {
        let body = r#"{
            "disease": "Dengue",
            "model_type": "GRU",
            "forecast_dates": ["2024-01-01"],
            "predicted_cases": [12],
            "historical_dates": ["2023-12-31"],
            "historical_cases": [10],
            "alert_level": "HIGH",
            "alert_message": "High outbreak risk detected!",
            "last_updated": "2024-01-01 10:00:00"
        }"#;
        let p: ForecastPayload = serde_json::from_str(body).unwrap();
        assert_eq!(p.model_type, Some(ModelType::Gru));
        assert_eq!(p.alert_level, AlertLevel::High);
        assert_eq!(p.predicted_cases, vec![12.0]);
    }

    #[test]
    fn model_type_parses_case_insensitively() {
        assert_eq!("GRU".parse::<ModelType>().unwrap(), ModelType::Gru);
        assert_eq!(" lstm ".parse::<ModelType>().unwrap(), ModelType::Lstm);
        assert!("arima".parse::<ModelType>().is_err());
    }

    #[test]
    fn format_count_drops_integral_fraction() {
        assert_eq!(format_count(5.0), "5");
        assert_eq!(format_count(7.25), "7.25");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn comparison_rows_pair_both_models() {
        let body = r#"{
            "forecast_dates": ["2024-01-01", "2024-01-02"],
            "lstm_predictions": [10, 12],
            "gru_predictions": [11, 9],
            "historical_dates": [],
            "historical_cases": [],
            "comparison": {"avg_difference": 2.0, "max_difference": 3.0, "lstm_avg": 11.0, "gru_avg": 10.0},
            "last_updated": "2024-01-01 10:00:00"
        }"#;
        let c: ModelComparison = serde_json::from_str(body).unwrap();
        assert!(c.validate().is_ok());
        let rows: Vec<_> = c.rows().collect();
        assert_eq!(rows, vec![("2024-01-01", 10.0, 11.0), ("2024-01-02", 12.0, 9.0)]);
    }
}
