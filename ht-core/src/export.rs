//! CSV export of the current forecast.

use crate::error::{DashboardError, Result};
use crate::forecast::{format_count, ForecastPayload};
use crate::subscription::{HandlerSlot, SubscriptionId};

pub const CSV_MIME: &str = "text/csv";
pub const CSV_HEADER: [&str; 2] = ["Date", "Predicted_Cases"];

/// A ready-to-download file.
#[derive(Debug, PartialEq, Clone)]
pub struct CsvArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Snapshot of the forecast pairs to export for one disease.
#[derive(Debug, PartialEq, Clone)]
pub struct ForecastExport {
    pub disease: String,
    pub dates: Vec<String>,
    pub values: Vec<f64>,
}

impl ForecastExport {
    pub fn from_payload(disease: &str, payload: &ForecastPayload) -> Self {
        Self {
            disease: disease.to_string(),
            dates: payload.forecast_dates.clone(),
            values: payload.predicted_cases.clone(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_forecast.csv", self.disease)
    }

    /// Header row then one `date,value` row per forecast pair, in order.
    pub fn to_csv(&self) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for (date, value) in self.dates.iter().zip(self.values.iter()) {
            wtr.write_record([date.as_str(), format_count(*value).as_str()])?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| DashboardError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| DashboardError::Csv(e.to_string()))
    }

    pub fn artifact(&self) -> Result<CsvArtifact> {
        Ok(CsvArtifact {
            file_name: self.file_name(),
            mime: CSV_MIME,
            contents: self.to_csv()?,
        })
    }
}

/// Holds the export target for the current forecast.
///
/// Enabled only while a forecast is bound; each new selection rebinds and
/// replaces the previous target.
#[derive(Debug, Default)]
pub struct ExportService {
    slot: HandlerSlot<ForecastExport>,
}

impl ExportService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, export: ForecastExport) -> SubscriptionId {
        self.slot.bind(export)
    }

    pub fn unbind(&self, id: SubscriptionId) -> bool {
        self.slot.unbind(id)
    }

    pub fn disable(&self) {
        self.slot.clear();
    }

    pub fn is_enabled(&self) -> bool {
        self.slot.is_bound()
    }

    /// Produce the artifact for the bound forecast, `None` when disabled.
    pub fn export(&self) -> Option<Result<CsvArtifact>> {
        self.slot.with(ForecastExport::artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(disease: &str, dates: &[&str], values: &[f64]) -> ForecastExport {
        ForecastExport {
            disease: disease.to_string(),
            dates: dates.iter().map(|d| d.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn csv_matches_expected_bytes() {
        let csv = export("Dengue", &["2024-01-01", "2024-01-02"], &[5.0, 7.0])
            .to_csv()
            .unwrap();
        assert_eq!(csv, "Date,Predicted_Cases\n2024-01-01,5\n2024-01-02,7\n");
    }

    #[test]
    fn empty_forecast_exports_header_only() {
        let csv = export("Dengue", &[], &[]).to_csv().unwrap();
        assert_eq!(csv, "Date,Predicted_Cases\n");
    }

    #[test]
    fn artifact_is_named_after_disease() {
        let artifact = export("Leptospirosis", &["2024-01-01"], &[3.5])
            .artifact()
            .unwrap();
        assert_eq!(artifact.file_name, "Leptospirosis_forecast.csv");
        assert_eq!(artifact.mime, "text/csv");
        assert_eq!(artifact.contents, "Date,Predicted_Cases\n2024-01-01,3.5\n");
    }

    #[test]
    fn service_is_disabled_until_bound_and_rebinding_replaces_target() {
        let service = ExportService::new();
        assert!(service.export().is_none());

        service.bind(export("Dengue", &["2024-01-01"], &[1.0]));
        let latest = service.bind(export("Cholera", &["2024-02-01"], &[2.0]));
        let artifact = service.export().unwrap().unwrap();
        assert_eq!(artifact.file_name, "Cholera_forecast.csv");

        assert!(service.unbind(latest));
        assert!(!service.is_enabled());
    }
}
