//! Climate series returned by `/api/climate_data/{disease}`.

use crate::error::{ensure_paired, Result};
use serde::{Deserialize, Serialize};

/// Daily temperature and rainfall over the recent window.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ClimateData {
    #[serde(default)]
    pub dates: Vec<String>,
    /// Average temperature in °C
    #[serde(default)]
    pub temperature: Vec<f64>,
    /// Rainfall in mm
    #[serde(default)]
    pub rainfall: Vec<f64>,
    #[serde(default)]
    pub humidity: Option<Vec<f64>>,
}

impl ClimateData {
    pub fn validate(&self) -> Result<()> {
        let n = self.dates.len();
        ensure_paired("temperature", n, self.temperature.len())?;
        ensure_paired("rainfall", n, self.rainfall.len())?;
        if let Some(humidity) = &self.humidity {
            ensure_paired("humidity", n, humidity.len())?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn decodes_backend_payload_with_extra_columns() {
        let body = r#"{
            "dates": ["2024-01-01", "2024-01-02"],
            "temperature": [27.1, 28.4],
            "humidity": [50.0, 50.0],
            "rainfall": [0.0, 12.5],
            "spi3": [0.1, 0.2]
        }"#;
        let data: ClimateData = serde_json::from_str(body).unwrap();
        assert!(data.validate().is_ok());
        assert_eq!(data.rainfall[1], 12.5);
        assert!(!data.is_empty());
    }

    #[test]
    fn missing_rainfall_is_a_contract_violation_when_dates_exist() {
        let body = r#"{"dates": ["2024-01-01"], "temperature": [27.1]}"#;
        let data: ClimateData = serde_json::from_str(body).unwrap();
        assert!(matches!(
            data.validate(),
            Err(DashboardError::DataContract { field: "rainfall", .. })
        ));
    }
}
