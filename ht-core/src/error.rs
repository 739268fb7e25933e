/// Error types for the HealthTrace dashboard
use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never produced a response (offline, DNS, CORS, aborted)
    #[error("Network request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status and no error body
    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },

    /// The response body carried an explicit `error` field
    #[error("{0}")]
    Payload(String),

    /// The response body could not be decoded into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Logically paired sequences in a payload have different lengths
    #[error("Data contract violation: {field} has {actual} entries, expected {expected}")]
    DataContract {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A date string could not be converted to an epoch timestamp
    #[error("Failed to parse date: {0}")]
    Timestamp(String),

    /// The charting collaborator rejected a render call
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// Failed to write CSV output
    #[error("Failed to write CSV: {0}")]
    Csv(String),

    /// A browser API (Blob, object URL, DOM) call failed
    #[error("Browser API error: {0}")]
    Browser(String),
}

impl From<csv::Error> for DashboardError {
    fn from(e: csv::Error) -> Self {
        DashboardError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Decode(e.to_string())
    }
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Check that a paired sequence has the same length as its key sequence.
pub(crate) fn ensure_paired(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(DashboardError::DataContract {
            field,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_error_displays_server_message_verbatim() {
        let err = DashboardError::Payload("Disease not found".to_string());
        assert_eq!(err.to_string(), "Disease not found");
    }

    #[test]
    fn ensure_paired_reports_field_and_lengths() {
        assert!(ensure_paired("predicted_cases", 3, 3).is_ok());
        let err = ensure_paired("predicted_cases", 3, 2).unwrap_err();
        assert_eq!(
            err,
            DashboardError::DataContract {
                field: "predicted_cases",
                expected: 3,
                actual: 2
            }
        );
    }
}
