//! Built-in Disease Catalog
//!
//! Embedded reference data for the crops the helper ships with.
//! Entries are listed in catalog order: crops in the order they first
//! appear, diseases in the order listed under each crop.

use super::{Catalog, CatalogBuilder, DiseaseRecord};

/// One embedded disease entry
#[derive(Debug)]
pub(super) struct BuiltinDisease {
    pub crop: &'static str,
    pub key: &'static str,
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub weather_conditions: &'static [&'static str],
    pub severity: &'static str,
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub cost: &'static str,
}

impl BuiltinDisease {
    fn to_record(&self) -> DiseaseRecord {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        DiseaseRecord {
            name: self.name.to_string(),
            symptoms: owned(self.symptoms),
            weather_conditions: owned(self.weather_conditions),
            severity: self.severity.to_string(),
            treatment: owned(self.treatment),
            prevention: owned(self.prevention),
            cost: self.cost.to_string(),
        }
    }
}

// ============================================================================
// EMBEDDED DISEASE DATA
// ============================================================================

pub(super) static BUILTIN_DISEASES: &[BuiltinDisease] = &[
    // ------------------------------------------------------------------ rice
    BuiltinDisease {
        crop: "rice",
        key: "rice_blast",
        name: "Rice Blast",
        symptoms: &[
            "brown spots on leaves",
            "white centers in spots",
            "wilting of plants",
            "stunted growth",
            "neck breaking",
        ],
        weather_conditions: &["high humidity", "cool nights", "wet conditions"],
        severity: "high",
        treatment: &[
            "Apply Tricyclazole fungicide spray",
            "Remove and burn affected plants",
            "Improve field drainage",
            "Reduce nitrogen fertilizer",
        ],
        prevention: &[
            "Use resistant rice varieties",
            "Proper plant spacing",
            "Avoid over-fertilization",
            "Clean field after harvest",
        ],
        cost: "₹500-800 per acre treatment",
    },
    BuiltinDisease {
        crop: "rice",
        key: "bacterial_blight",
        name: "Bacterial Leaf Blight",
        symptoms: &[
            "water-soaked lesions",
            "yellow leaf margins",
            "leaves turning brown",
            "wilting from leaf tips",
            "stunted plant growth",
        ],
        weather_conditions: &["high temperature", "high humidity", "heavy rain"],
        severity: "medium",
        treatment: &[
            "Spray copper-based fungicide",
            "Remove affected leaves",
            "Apply balanced fertilizer",
            "Improve field sanitation",
        ],
        prevention: &[
            "Use certified seeds",
            "Avoid water logging",
            "Crop rotation with non-rice crops",
            "Clean irrigation channels",
        ],
        cost: "₹300-500 per acre treatment",
    },
    BuiltinDisease {
        crop: "rice",
        key: "brown_spot",
        name: "Brown Spot Disease",
        symptoms: &[
            "small brown spots on leaves",
            "dark brown lesions",
            "premature leaf drying",
            "reduced grain filling",
            "poor grain quality",
        ],
        weather_conditions: &["nutrient deficiency", "drought stress", "poor soil"],
        severity: "medium",
        treatment: &[
            "Apply potassium fertilizer",
            "Spray Mancozeb fungicide",
            "Improve soil nutrition",
            "Ensure proper irrigation",
        ],
        prevention: &[
            "Balanced fertilization",
            "Use healthy seeds",
            "Maintain soil fertility",
            "Avoid water stress",
        ],
        cost: "₹400-600 per acre treatment",
    },
    // ----------------------------------------------------------------- wheat
    BuiltinDisease {
        crop: "wheat",
        key: "rust_disease",
        name: "Wheat Rust",
        symptoms: &[
            "reddish-brown spots on leaves",
            "yellow powder on leaves",
            "premature leaf death",
            "reduced grain weight",
            "weak stems",
        ],
        weather_conditions: &["moderate temperature", "high humidity", "dew formation"],
        severity: "high",
        treatment: &[
            "Apply Propiconazole spray",
            "Use systemic fungicides",
            "Remove infected plant debris",
            "Apply zinc sulfate",
        ],
        prevention: &[
            "Plant rust-resistant varieties",
            "Avoid late sowing",
            "Proper field sanitation",
            "Balanced nutrition",
        ],
        cost: "₹600-900 per acre treatment",
    },
    BuiltinDisease {
        crop: "wheat",
        key: "powdery_mildew",
        name: "Powdery Mildew",
        symptoms: &[
            "white powdery patches",
            "leaves turning yellow",
            "stunted plant growth",
            "reduced tillering",
            "poor grain development",
        ],
        weather_conditions: &["cool weather", "high humidity", "cloudy days"],
        severity: "medium",
        treatment: &[
            "Spray sulfur-based fungicide",
            "Apply Triadimefon",
            "Improve air circulation",
            "Remove affected leaves",
        ],
        prevention: &[
            "Use resistant varieties",
            "Avoid dense planting",
            "Proper field ventilation",
            "Timely sowing",
        ],
        cost: "₹400-700 per acre treatment",
    },
    // ---------------------------------------------------------------- tomato
    BuiltinDisease {
        crop: "tomato",
        key: "early_blight",
        name: "Early Blight",
        symptoms: &[
            "dark spots with rings",
            "yellowing of lower leaves",
            "leaf drop",
            "stem lesions",
            "fruit rot",
        ],
        weather_conditions: &["warm temperature", "high humidity", "wet leaves"],
        severity: "high",
        treatment: &[
            "Apply Chlorothalonil spray",
            "Remove affected leaves",
            "Improve air circulation",
            "Avoid overhead watering",
        ],
        prevention: &[
            "Use disease-free seeds",
            "Crop rotation",
            "Proper plant spacing",
            "Drip irrigation",
        ],
        cost: "₹800-1200 per acre treatment",
    },
    BuiltinDisease {
        crop: "tomato",
        key: "late_blight",
        name: "Late Blight",
        symptoms: &[
            "water-soaked dark spots",
            "white mold on leaf undersides",
            "rapid plant collapse",
            "fruit rot with white growth",
            "bad smell from infected parts",
        ],
        weather_conditions: &["cool temperature", "very high humidity", "prolonged wetness"],
        severity: "very high",
        treatment: &[
            "Apply Metalaxyl + Mancozeb",
            "Immediate removal of infected plants",
            "Improve drainage",
            "Emergency fungicide application",
        ],
        prevention: &[
            "Use resistant varieties",
            "Avoid wet conditions",
            "Preventive fungicide sprays",
            "Good field drainage",
        ],
        cost: "₹1000-1500 per acre treatment",
    },
];

/// Build the embedded catalog
pub(super) fn builtin_catalog() -> Catalog {
    BUILTIN_DISEASES
        .iter()
        .fold(CatalogBuilder::new(), |builder, entry| {
            builder.disease(entry.crop, entry.key, entry.to_record())
        })
        .build()
}
