use serde::{Deserialize, Serialize};

pub const SUCCESS_GLYPH: &str = "✅";
pub const FAILURE_GLYPH: &str = "❌";

/// JSON body of the upload request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPayload {
    pub filename: String,
    pub content: String,
}

impl UploadPayload {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// What happened to a single upload request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The endpoint answered 200
    Success,
    /// The endpoint answered with any other status
    HttpStatus { status: u16, body: String },
    /// No usable response: connection, timeout, or body read failure
    Transport { description: String },
}

impl UploadOutcome {
    /// Classify a response; only 200 counts as success
    pub fn from_response(status: u16, body: String) -> Self {
        if status == 200 {
            UploadOutcome::Success
        } else {
            UploadOutcome::HttpStatus { status, body }
        }
    }

    pub fn transport(description: impl Into<String>) -> Self {
        UploadOutcome::Transport {
            description: description.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success)
    }
}

/// Outcome of one upload call together with the resolved filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub filename: String,
    pub outcome: UploadOutcome,
    pub duration_ms: u64,
}

impl UploadReport {
    pub fn new(filename: String, outcome: UploadOutcome) -> Self {
        Self {
            filename,
            outcome,
            duration_ms: 0,
        }
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Human-readable status line for the console
    pub fn message(&self) -> String {
        match &self.outcome {
            UploadOutcome::Success => format!(
                "{} Successfully saved {} to Path Analysis Tool",
                SUCCESS_GLYPH, self.filename
            ),
            UploadOutcome::HttpStatus { status, body } => format!(
                "{} Failed to save {}: {} {}",
                FAILURE_GLYPH, self.filename, status, body
            ),
            UploadOutcome::Transport { description } => format!(
                "{} Error saving {}: {}",
                FAILURE_GLYPH, self.filename, description
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_shape() {
        let payload = UploadPayload::new("a.csv", "x\n1\n");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"filename": "a.csv", "content": "x\n1\n"}));
    }

    #[test]
    fn test_only_200_is_success() {
        assert!(UploadOutcome::from_response(200, String::new()).is_success());
        for status in [201, 204, 301, 404, 500] {
            assert!(!UploadOutcome::from_response(status, String::new()).is_success());
        }
    }

    #[test]
    fn test_report_messages() {
        let report = UploadReport::new("a.csv".to_string(), UploadOutcome::Success);
        assert_eq!(
            report.message(),
            "✅ Successfully saved a.csv to Path Analysis Tool"
        );

        let report = UploadReport::new(
            "a.csv".to_string(),
            UploadOutcome::from_response(500, "server error".to_string()),
        );
        assert_eq!(report.message(), "❌ Failed to save a.csv: 500 server error");

        let report = UploadReport::new(
            "a.csv".to_string(),
            UploadOutcome::transport("connection refused"),
        )
        .duration_ms(12);
        assert_eq!(report.message(), "❌ Error saving a.csv: connection refused");
        assert_eq!(report.duration_ms, 12);
        assert!(!report.is_success());
    }
}
