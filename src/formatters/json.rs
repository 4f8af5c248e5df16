use crate::diagnosis::DiagnosisReport;

/// Serializes a [`DiagnosisReport`] with its `serde` field names, for
/// scripts and other programs reading `crop_doctor diagnose --format json`.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Indented output, one field per line
    pub fn format(report: &DiagnosisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Single-line output, suited to log lines and piping
    pub fn format_compact(report: &DiagnosisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
