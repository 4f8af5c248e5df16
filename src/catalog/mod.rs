//! Disease Catalog
//!
//! Read-only reference data mapping crop -> disease -> [`DiseaseRecord`].
//! A catalog is built once (from the embedded data or a JSON file) and then
//! only read; there is no mutation API on [`Catalog`] itself.
//!
//! Both levels keep insertion order, which is the tie-break order used when
//! ranking diagnoses.

mod builtin;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reference description of one disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Display name, unique within a crop
    pub name: String,
    pub symptoms: Vec<String>,
    pub weather_conditions: Vec<String>,
    /// Opaque label ("medium", "high", "very high")
    pub severity: String,
    /// Recommended actions, highest priority first
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    /// Free-text cost range
    pub cost: String,
}

/// The diseases registered under one crop, in catalog order
#[derive(Debug, Clone)]
pub struct CropDiseases {
    crop: String,
    diseases: Vec<(String, DiseaseRecord)>,
}

impl CropDiseases {
    fn new(crop: String) -> Self {
        Self { crop, diseases: Vec::new() }
    }

    /// Crop key (lowercase)
    pub fn crop(&self) -> &str {
        &self.crop
    }

    /// Look up a disease by key
    pub fn get(&self, disease_key: &str) -> Option<&DiseaseRecord> {
        self.diseases
            .iter()
            .find(|(key, _)| key == disease_key)
            .map(|(_, record)| record)
    }

    /// Iterate `(disease_key, record)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiseaseRecord)> {
        self.diseases.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.diseases.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    fn upsert(&mut self, disease_key: &str, record: DiseaseRecord) {
        match self.diseases.iter_mut().find(|(key, _)| key == disease_key) {
            Some((_, existing)) => *existing = record,
            None => self.diseases.push((disease_key.to_string(), record)),
        }
    }
}

/// Immutable crop -> disease catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    crops: Vec<CropDiseases>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// The catalog embedded in the crate (rice, wheat, tomato)
    pub fn builtin() -> Self {
        builtin::builtin_catalog()
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let catalog = Self::from_json_str(&contents)
            .with_context(|| format!("Failed to load catalog from {:?}", path))?;

        tracing::info!(
            "Loaded catalog from {:?} ({} crops, {} diseases)",
            path,
            catalog.len(),
            catalog.disease_count()
        );

        Ok(catalog)
    }

    /// Parse a catalog from its JSON representation
    ///
    /// Crop keys are lowercased. A crop listed twice is rejected; a disease
    /// with no symptoms or no weather conditions is accepted (it can only
    /// ever score 0) and logged.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .with_context(|| "Failed to parse catalog JSON")?;

        let mut seen = FxHashSet::default();
        let mut builder = CatalogBuilder::new();

        for crop_entry in file.crops {
            let crop = crop_entry.crop.trim().to_lowercase();
            if !seen.insert(crop.clone()) {
                anyhow::bail!("Crop '{}' is listed more than once", crop);
            }

            if crop_entry.diseases.is_empty() {
                tracing::warn!("Crop '{}' has no diseases", crop);
            }

            builder = builder.crop(&crop);
            for entry in crop_entry.diseases {
                if entry.record.symptoms.is_empty() {
                    tracing::warn!("Disease '{}' ({}) has no symptoms", entry.key, crop);
                }
                if entry.record.weather_conditions.is_empty() {
                    tracing::warn!("Disease '{}' ({}) has no weather conditions", entry.key, crop);
                }
                builder = builder.disease(&crop, &entry.key, entry.record);
            }
        }

        Ok(builder.build())
    }

    /// Diseases registered for `crop`, exact key match
    ///
    /// Callers lowercase the crop first; `None` means the crop is unknown.
    pub fn diseases_for(&self, crop: &str) -> Option<&CropDiseases> {
        self.index.get(crop).map(|&i| &self.crops[i])
    }

    /// Registered crop keys, in catalog order
    pub fn crop_keys(&self) -> Vec<&str> {
        self.crops.iter().map(|c| c.crop()).collect()
    }

    /// Distinct symptom phrases across a crop's diseases, first-seen order
    ///
    /// Used to prompt users with examples. Returns an empty list for an
    /// unknown crop.
    pub fn common_symptoms(&self, crop: &str, limit: usize) -> Vec<&str> {
        let Some(diseases) = self.diseases_for(crop) else {
            return Vec::new();
        };

        let mut seen = FxHashSet::default();
        diseases
            .iter()
            .flat_map(|(_, record)| record.symptoms.iter())
            .map(String::as_str)
            .filter(|symptom| seen.insert(*symptom))
            .take(limit)
            .collect()
    }

    /// Number of crops
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Total number of diseases across all crops
    pub fn disease_count(&self) -> usize {
        self.crops.iter().map(CropDiseases::len).sum()
    }
}

/// Assembles a [`Catalog`]; the only way to add data
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    crops: Vec<CropDiseases>,
    index: FxHashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a crop with no diseases yet (no-op if already present)
    pub fn crop(mut self, crop: &str) -> Self {
        self.entry(crop);
        self
    }

    /// Add a disease under `crop`, registering the crop if needed.
    /// Re-adding an existing disease key replaces its record in place.
    pub fn disease(mut self, crop: &str, disease_key: &str, record: DiseaseRecord) -> Self {
        self.entry(crop).upsert(disease_key, record);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            crops: self.crops,
            index: self.index,
        }
    }

    fn entry(&mut self, crop: &str) -> &mut CropDiseases {
        let i = match self.index.get(crop) {
            Some(&i) => i,
            None => {
                self.crops.push(CropDiseases::new(crop.to_string()));
                self.index.insert(crop.to_string(), self.crops.len() - 1);
                self.crops.len() - 1
            }
        };
        &mut self.crops[i]
    }
}

// ============================================================================
// JSON FILE FORMAT
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    crops: Vec<CropFile>,
}

#[derive(Debug, Deserialize)]
struct CropFile {
    crop: String,
    #[serde(default)]
    diseases: Vec<DiseaseEntry>,
}

#[derive(Debug, Deserialize)]
struct DiseaseEntry {
    key: String,
    #[serde(flatten)]
    record: DiseaseRecord,
}
