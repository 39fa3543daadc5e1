//! A single recorded calculation.

use crate::calculator::Calculation;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A past calculation. Entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Equation text, e.g. `12 + 30` or `sqrt(16)`.
    pub equation: String,
    /// Formatted result.
    pub result: String,
    /// When the calculation completed.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        equation: impl Into<String>,
        result: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            equation: equation.into(),
            result: result.into(),
            timestamp,
        }
    }

    /// Stamp a completed calculation with the current time.
    pub fn from_calculation(calculation: Calculation) -> Self {
        Self::stamped(calculation, Utc::now())
    }

    pub fn stamped(calculation: Calculation, timestamp: DateTime<Utc>) -> Self {
        Self {
            equation: calculation.equation,
            result: calculation.result,
            timestamp,
        }
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_json_field_names() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let entry = HistoryEntry::new("1 + 2", "3", ts);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["equation"], "1 + 2");
        assert_eq!(json["result"], "3");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2024-05-01T09:30:00"));
    }

    #[test]
    fn test_reads_browser_timestamps() {
        let json = r#"{"equation":"2 × 3","result":"6","timestamp":"2024-05-01T09:30:00.000Z"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.timestamp_iso(), "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn test_from_calculation() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let entry = HistoryEntry::stamped(
            Calculation {
                equation: "sqrt(16)".to_string(),
                result: "4".to_string(),
            },
            ts,
        );
        assert_eq!(entry, HistoryEntry::new("sqrt(16)", "4", ts));
    }
}
