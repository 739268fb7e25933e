//! Current-status records returned by `/api/current_status`.

use serde::{Deserialize, Serialize};

/// Seven-day direction of a disease's case count.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    pub fn is_increasing(&self) -> bool {
        matches!(self, Trend::Increasing)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
        }
    }
}

/// Latest observed case count for one disease.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DiseaseStatus {
    pub disease: String,
    pub current_cases: u64,
    pub trend: Trend,
    /// Observation date as reported by the backend (YYYY-MM-DD)
    pub date: String,
}

/// Collect disease names in first-seen order, skipping duplicates.
///
/// Used to populate the disease selector from the status list when the
/// page was not configured with a fixed list.
pub fn disease_names(statuses: &[DiseaseStatus]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(statuses.len());
    for status in statuses {
        if !names.iter().any(|n| n == &status.disease) {
            names.push(status.disease.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_status_list() {
        let body = r#"[
            {"disease": "Dengue", "current_cases": 120, "date": "2024-03-01", "trend": "increasing"},
            {"disease": "Typhoid", "current_cases": 8, "date": "2024-03-01", "trend": "decreasing"}
        ]"#;
        let statuses: Vec<DiseaseStatus> = serde_json::from_str(body).unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].disease, "Dengue");
        assert!(statuses[0].trend.is_increasing());
        assert_eq!(statuses[1].trend, Trend::Decreasing);
    }

    #[test]
    fn rejects_negative_case_counts() {
        let body = r#"{"disease": "Dengue", "current_cases": -1, "date": "2024-03-01", "trend": "increasing"}"#;
        assert!(serde_json::from_str::<DiseaseStatus>(body).is_err());
    }

    #[test]
    fn disease_names_keep_scan_order_without_duplicates() {
        let make = |d: &str| DiseaseStatus {
            disease: d.to_string(),
            current_cases: 1,
            trend: Trend::Decreasing,
            date: "2024-03-01".to_string(),
        };
        let names = disease_names(&[make("Dengue"), make("Cholera"), make("Dengue")]);
        assert_eq!(names, vec!["Dengue".to_string(), "Cholera".to_string()]);
    }
}
