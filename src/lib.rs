//! Crop Doctor
//!
//! Rule-based crop disease diagnosis. A caller supplies a crop, the symptoms
//! seen in the field and the recent weather; the engine ranks every known
//! disease of that crop by confidence and returns the advice for the best match.
//!
//! Module layout:
//! - `catalog/`: the read-only disease catalog (built-in data + JSON loading)
//! - `matching`: substring phrase matching and score rounding
//! - `diagnosis`: the engine, results and reports
//! - `formatters/`: text and JSON renderings of a report
//! - `input`: raw text splitting for interactive callers
//! - `config`: environment-driven settings for the binary

pub mod catalog;
pub mod config;
pub mod demo;
pub mod diagnosis;
pub mod error;
pub mod formatters;
pub mod input;
pub mod matching;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder, CropDiseases, DiseaseRecord};
pub use config::Config;
pub use diagnosis::{ConfidenceBand, DiagnosisEngine, DiagnosisReport, DiagnosisResult};
pub use error::DiagnosisError;
pub use matching::{symptom_match_score, weather_match_score};
