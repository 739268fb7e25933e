//! Alert levels and the status banner policy.
//!
//! The banner is driven by the single highest current case count across all
//! diseases: above 100 is High, above 50 is Medium, anything else is the
//! all-clear. When two diseases share the highest count the first one in
//! scan order is named.

use crate::status::DiseaseStatus;
use serde::{Deserialize, Serialize};

/// Case count above which the banner turns red.
pub const HIGH_ALERT_THRESHOLD: u64 = 100;

/// Case count above which the banner turns amber.
pub const MEDIUM_ALERT_THRESHOLD: u64 = 50;

/// Coarse risk classification shared by the status banner and the forecast
/// alert box.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Low,
    Medium,
    High,
}

impl AlertLevel {
    /// Classify a case count against the banner thresholds.
    pub fn from_case_count(cases: u64) -> Self {
        if cases > HIGH_ALERT_THRESHOLD {
            AlertLevel::High
        } else if cases > MEDIUM_ALERT_THRESHOLD {
            AlertLevel::Medium
        } else {
            AlertLevel::Low
        }
    }

    /// Uppercase label as sent by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Low => "LOW",
            AlertLevel::Medium => "MEDIUM",
            AlertLevel::High => "HIGH",
        }
    }

    /// Palette used by the banner and alert box: (background, border, text).
    pub fn palette(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            AlertLevel::High => ("#FEF2F2", "#EF4444", "#991B1B"),
            AlertLevel::Medium => ("#FFFBEB", "#F59E0B", "#92400E"),
            AlertLevel::Low => ("#ECFDF5", "#10B981", "#065F46"),
        }
    }
}

/// Result of scanning the status list for the most critical disease.
#[derive(Debug, PartialEq, Clone)]
pub struct StatusAlert {
    pub level: AlertLevel,
    /// Disease with the highest count, `None` when every count is zero
    pub disease: Option<String>,
    pub cases: u64,
}

impl StatusAlert {
    /// Short heading shown in bold before the message.
    pub fn title(&self) -> &'static str {
        match self.level {
            AlertLevel::High => "High Alert:",
            AlertLevel::Medium => "Moderate Alert:",
            AlertLevel::Low => "All Clear:",
        }
    }

    pub fn message(&self) -> String {
        let disease = self.disease.as_deref().unwrap_or("Unknown");
        match self.level {
            AlertLevel::High => format!(
                "{} cases are critical ({}). Monitor closely.",
                disease, self.cases
            ),
            AlertLevel::Medium => format!(
                "{} cases have reached {}. Stay vigilant.",
                disease, self.cases
            ),
            AlertLevel::Low => "All diseases are currently under control.".to_string(),
        }
    }
}

/// What the alert banner currently shows.
#[derive(Debug, PartialEq, Clone)]
pub enum Banner {
    Alert(StatusAlert),
    /// The last status poll could not reach the server
    ConnectivityError,
}

impl Banner {
    pub const CONNECTIVITY_MESSAGE: &'static str = "Error connecting to server. Please refresh.";
}

/// Compute the banner alert from a status list.
///
/// Only a strictly greater count replaces the running maximum, so ties keep
/// the earliest disease.
pub fn evaluate_status_alert(statuses: &[DiseaseStatus]) -> StatusAlert {
    let mut highest: u64 = 0;
    let mut critical: Option<&str> = None;
    for status in statuses {
        if status.current_cases > highest {
            highest = status.current_cases;
            critical = Some(status.disease.as_str());
        }
    }
    StatusAlert {
        level: AlertLevel::from_case_count(highest),
        disease: critical.map(str::to_string),
        cases: highest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Trend;

    fn status(disease: &str, cases: u64) -> DiseaseStatus {
        DiseaseStatus {
            disease: disease.to_string(),
            current_cases: cases,
            trend: Trend::Increasing,
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(AlertLevel::from_case_count(0), AlertLevel::Low);
        assert_eq!(AlertLevel::from_case_count(50), AlertLevel::Low);
        assert_eq!(AlertLevel::from_case_count(51), AlertLevel::Medium);
        assert_eq!(AlertLevel::from_case_count(100), AlertLevel::Medium);
        assert_eq!(AlertLevel::from_case_count(101), AlertLevel::High);
    }

    #[test]
    fn level_follows_maximum_for_many_lists() {
        let lists: Vec<Vec<u64>> = vec![
            vec![],
            vec![0, 0],
            vec![10, 49, 50],
            vec![51, 3],
            vec![7, 100, 99],
            vec![101],
            vec![5, 250, 60],
        ];
        for counts in lists {
            let statuses: Vec<_> = counts
                .iter()
                .enumerate()
                .map(|(i, c)| status(&format!("D{i}"), *c))
                .collect();
            let max = counts.iter().copied().max().unwrap_or(0);
            let alert = evaluate_status_alert(&statuses);
            let expected = if max > 100 {
                AlertLevel::High
            } else if max > 50 {
                AlertLevel::Medium
            } else {
                AlertLevel::Low
            };
            assert_eq!(alert.level, expected, "counts {:?}", counts);
            assert_eq!(alert.cases, max);
        }
    }

    #[test]
    fn ties_keep_first_disease_in_scan_order() {
        let alert = evaluate_status_alert(&[
            status("Dengue", 120),
            status("Cholera", 120),
            status("Typhoid", 3),
        ]);
        assert_eq!(alert.disease.as_deref(), Some("Dengue"));
        assert_eq!(alert.level, AlertLevel::High);
        assert_eq!(
            alert.message(),
            "Dengue cases are critical (120). Monitor closely."
        );
    }

    #[test]
    fn all_clear_has_generic_message() {
        let alert = evaluate_status_alert(&[status("Dengue", 12)]);
        assert_eq!(alert.title(), "All Clear:");
        assert_eq!(alert.message(), "All diseases are currently under control.");
    }

    #[test]
    fn medium_message_names_disease() {
        let alert = evaluate_status_alert(&[status("Leptospirosis", 75)]);
        assert_eq!(alert.title(), "Moderate Alert:");
        assert_eq!(
            alert.message(),
            "Leptospirosis cases have reached 75. Stay vigilant."
        );
    }

    #[test]
    fn alert_level_uses_uppercase_wire_names() {
        let level: AlertLevel = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(level, AlertLevel::Medium);
        assert_eq!(serde_json::to_string(&AlertLevel::High).unwrap(), "\"HIGH\"");
    }
}
