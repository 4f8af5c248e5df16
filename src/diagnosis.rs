//! Diagnosis Engine
//!
//! Scores every disease of the queried crop against the reported symptoms and
//! weather, then ranks them by confidence:
//!
//! ```text
//! confidence = round1(0.7 × symptom_match + 0.3 × weather_match)
//! ```
//!
//! Symptoms carry more weight than weather because they are the stronger
//! diagnostic signal. The engine owns its catalog and holds no other state,
//! so every call is independent.

use serde::Serialize;

use crate::catalog::{Catalog, DiseaseRecord};
use crate::error::DiagnosisError;
use crate::matching::{round_to_tenth, symptom_match_score, weather_match_score};

/// Weight of the symptom match in the confidence blend
pub const SYMPTOM_WEIGHT: f64 = 0.7;
/// Weight of the weather match in the confidence blend
pub const WEATHER_WEIGHT: f64 = 0.3;

/// Confidence band used when presenting the top diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    /// > 60 is high, > 30 moderate, anything else low
    pub fn from_confidence(confidence: f64) -> Self {
        match confidence {
            c if c > 60.0 => ConfidenceBand::High,
            c if c > 30.0 => ConfidenceBand::Moderate,
            _ => ConfidenceBand::Low,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "HIGH CONFIDENCE DIAGNOSIS",
            ConfidenceBand::Moderate => "MODERATE CONFIDENCE DIAGNOSIS",
            ConfidenceBand::Low => "LOW CONFIDENCE - Unusual symptoms",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "✅",
            ConfidenceBand::Moderate => "⚠️",
            ConfidenceBand::Low => "❓",
        }
    }
}

/// Score of one disease for one diagnosis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisResult {
    /// Disease display name
    pub disease: String,
    /// Weighted blend (0-100, one decimal)
    pub confidence: f64,
    /// Percentage of reported symptoms explained (one decimal)
    pub symptom_match: f64,
    /// Percentage of reported weather conditions matched (one decimal)
    pub weather_match: f64,
    pub severity: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub cost: String,
}

impl DiagnosisResult {
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Ranked diagnosis for one crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
    pub crop: String,
    pub total_symptoms_checked: usize,
    pub weather_conditions_checked: usize,
    /// One entry per catalog disease, highest confidence first
    pub possible_diseases: Vec<DiagnosisResult>,
    /// First entry of `possible_diseases`; `None` only for a crop with no diseases
    pub top_diagnosis: Option<DiagnosisResult>,
}

impl DiagnosisReport {
    pub fn top(&self) -> Option<&DiagnosisResult> {
        self.top_diagnosis.as_ref()
    }

    /// Up to `n` runner-up diagnoses after the top pick
    pub fn alternatives(&self, n: usize) -> &[DiagnosisResult] {
        let rest = self.possible_diseases.get(1..).unwrap_or(&[]);
        &rest[..n.min(rest.len())]
    }
}

/// Ranks catalog diseases against reported symptoms and weather
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    catalog: Catalog,
}

impl Default for DiagnosisEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl DiagnosisEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Crop keys the engine can diagnose, in catalog order
    pub fn available_crops(&self) -> Vec<String> {
        self.catalog.crop_keys().into_iter().map(str::to_string).collect()
    }

    /// Diagnose `crop` from reported `symptoms` and `weather`
    ///
    /// The crop is lowercased before lookup. An unknown crop yields
    /// [`DiagnosisError::UnknownCrop`] listing every registered crop; there is
    /// no partial report. Empty symptom or weather lists are valid and simply
    /// score 0 on that component.
    pub fn diagnose<S, W>(
        &self,
        crop: &str,
        symptoms: &[S],
        weather: &[W],
    ) -> Result<DiagnosisReport, DiagnosisError>
    where
        S: AsRef<str>,
        W: AsRef<str>,
    {
        let crop = crop.to_lowercase();

        let diseases = self.catalog.diseases_for(&crop).ok_or_else(|| {
            tracing::debug!("Unknown crop '{}'", crop);
            DiagnosisError::UnknownCrop {
                crop: crop.clone(),
                available: self.available_crops(),
            }
        })?;

        let mut results: Vec<DiagnosisResult> = diseases
            .iter()
            .map(|(key, record)| {
                let result = score_disease(record, symptoms, weather);
                tracing::debug!(
                    "{}/{}: confidence={:.1} symptoms={:.1} weather={:.1}",
                    crop,
                    key,
                    result.confidence,
                    result.symptom_match,
                    result.weather_match
                );
                result
            })
            .collect();

        // Stable: ties keep catalog order
        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let top_diagnosis = results.first().cloned();

        Ok(DiagnosisReport {
            crop,
            total_symptoms_checked: symptoms.len(),
            weather_conditions_checked: weather.len(),
            possible_diseases: results,
            top_diagnosis,
        })
    }
}

/// Score a single disease record
pub fn score_disease<S, W>(record: &DiseaseRecord, symptoms: &[S], weather: &[W]) -> DiagnosisResult
where
    S: AsRef<str>,
    W: AsRef<str>,
{
    let symptom_score = symptom_match_score(symptoms, record.symptoms.as_slice());
    let weather_score = weather_match_score(weather, record.weather_conditions.as_slice());
    let confidence = symptom_score * SYMPTOM_WEIGHT + weather_score * WEATHER_WEIGHT;

    DiagnosisResult {
        disease: record.name.clone(),
        confidence: round_to_tenth(confidence),
        symptom_match: round_to_tenth(symptom_score),
        weather_match: round_to_tenth(weather_score),
        severity: record.severity.clone(),
        treatment: record.treatment.clone(),
        prevention: record.prevention.clone(),
        cost: record.cost.clone(),
    }
}
