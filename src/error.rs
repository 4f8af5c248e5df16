use thiserror::Error;

/// Errors surfaced by the diagnosis engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosisError {
    #[error("no disease data for crop '{crop}' yet. Available crops: {}", .available.join(", "))]
    UnknownCrop {
        /// Crop key as queried (lowercased)
        crop: String,
        /// Every registered crop key, in catalog order
        available: Vec<String>,
    },
}

impl DiagnosisError {
    /// Valid crop keys the caller can retry with
    pub fn available_crops(&self) -> &[String] {
        match self {
            DiagnosisError::UnknownCrop { available, .. } => available,
        }
    }
}
