//! Diagnosis Scenario Tests
//!
//! End-to-end checks against the built-in catalog plus a custom catalog
//! loaded from `tests/fixtures/custom_catalog.json`.

use approx::assert_relative_eq;
use crop_doctor::catalog::Catalog;
use crop_doctor::demo::DEMO_CASES;
use crop_doctor::diagnosis::{SYMPTOM_WEIGHT, WEATHER_WEIGHT};
use crop_doctor::input::split_phrases;
use crop_doctor::matching::round_to_tenth;
use crop_doctor::{
    symptom_match_score, weather_match_score, ConfidenceBand, DiagnosisEngine, DiagnosisError,
    DiagnosisReport,
};
use std::path::Path;

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/custom_catalog.json")
}

fn assert_non_increasing(report: &DiagnosisReport) {
    for pair in report.possible_diseases.windows(2) {
        assert!(
            pair[0].confidence >= pair[1].confidence,
            "{} ({}) ranked above {} ({})",
            pair[0].disease,
            pair[0].confidence,
            pair[1].disease,
            pair[1].confidence
        );
    }
}

#[test]
fn test_rice_blast_scenario() {
    let engine = DiagnosisEngine::default();
    let report = engine
        .diagnose(
            "rice",
            &["brown spots on leaves", "wilting", "white centers"],
            &["high humidity", "cool nights"],
        )
        .unwrap();

    let top = report.top().unwrap();
    assert_eq!(top.disease, "Rice Blast");
    assert!(top.confidence > 60.0);
    assert_relative_eq!(top.confidence, 100.0);
    assert_eq!(top.band(), ConfidenceBand::High);
    assert_eq!(top.treatment[0], "Apply Tricyclazole fungicide spray");

    assert_eq!(report.crop, "rice");
    assert_eq!(report.total_symptoms_checked, 3);
    assert_eq!(report.weather_conditions_checked, 2);
    assert_eq!(report.possible_diseases.len(), 3);
}

#[test]
fn test_tomato_late_blight_scenario() {
    let engine = DiagnosisEngine::default();
    let report = engine
        .diagnose(
            "tomato",
            &["water-soaked dark spots", "white mold", "bad smell"],
            &["cool temperature", "very high humidity"],
        )
        .unwrap();

    let top = report.top().unwrap();
    assert_eq!(top.disease, "Late Blight");
    assert_eq!(top.severity, "very high");

    // "very high humidity" contains Early Blight's "high humidity"
    let early = &report.possible_diseases[1];
    assert_eq!(early.disease, "Early Blight");
    assert_relative_eq!(early.weather_match, 50.0);
    assert_relative_eq!(early.confidence, 15.0);
}

#[test]
fn test_unusual_symptoms_degrade_gracefully() {
    let engine = DiagnosisEngine::default();
    let report = engine
        .diagnose("rice", &["purple leaves", "strange growth"], &["normal weather"])
        .unwrap();

    let top = report.top().unwrap();
    assert!(top.confidence < 10.0);
    assert_eq!(top.band(), ConfidenceBand::Low);
    // every score is 0, so catalog order decides
    assert_eq!(top.disease, "Rice Blast");
}

#[test]
fn test_unknown_crop_lists_registered_crops() {
    let engine = DiagnosisEngine::default();
    let err = engine.diagnose("maize", &["spots"], &["rain"]).unwrap_err();

    match &err {
        DiagnosisError::UnknownCrop { crop, available } => {
            assert_eq!(crop, "maize");
            assert_eq!(available, &["rice", "wheat", "tomato"]);
        }
    }
    assert_eq!(err.available_crops(), engine.available_crops().as_slice());
}

#[test]
fn test_one_result_per_disease_and_sorted() {
    let engine = DiagnosisEngine::default();
    let inputs: [(&str, &str, &str); 4] = [
        ("rice", "wilting, stunted growth, yellow leaf margins", "high humidity, heavy rain"),
        ("wheat", "stunted plant growth, white powdery patches", "cloudy days"),
        ("tomato", "leaf drop, fruit rot", "warm temperature, wet leaves"),
        ("Wheat", "", "high humidity"),
    ];

    for (crop, symptoms, weather) in inputs {
        let symptoms = split_phrases(symptoms);
        let weather = split_phrases(weather);
        let report = engine.diagnose(crop, symptoms.as_slice(), weather.as_slice()).unwrap();

        let expected = engine.catalog().diseases_for(&report.crop).unwrap().len();
        assert_eq!(report.possible_diseases.len(), expected);
        assert_non_increasing(&report);
        assert_eq!(report.top(), report.possible_diseases.first());
    }
}

#[test]
fn test_confidence_formula_holds_for_every_result() {
    let engine = DiagnosisEngine::default();
    let symptoms = ["wilting", "leaves turning brown", "dark brown lesions"];
    let weather = ["high humidity", "drought stress", "snow"];

    let report = engine.diagnose("rice", &symptoms, &weather).unwrap();
    let rice = engine.catalog().diseases_for("rice").unwrap();

    for result in &report.possible_diseases {
        let (_, record) = rice.iter().find(|(_, r)| r.name == result.disease).unwrap();
        let s = symptom_match_score(&symptoms, record.symptoms.as_slice());
        let w = weather_match_score(&weather, record.weather_conditions.as_slice());

        assert_eq!(result.confidence, round_to_tenth(SYMPTOM_WEIGHT * s + WEATHER_WEIGHT * w));
        assert_eq!(result.symptom_match, round_to_tenth(s));
        assert_eq!(result.weather_match, round_to_tenth(w));
        assert!((0.0..=100.0).contains(&result.confidence));
    }
}

#[test]
fn test_exact_tie_rounds_to_even() {
    let engine = DiagnosisEngine::default();
    // 3 of 8 symptoms explained by Rice Blast: 37.5 × 0.7 = 26.25
    let symptoms = [
        "brown spots on leaves",
        "neck breaking",
        "stunted growth",
        "leaf curl",
        "root galls",
        "silvering",
        "mosaic pattern",
        "fruit cracking",
    ];
    let no_weather: [&str; 0] = [];

    let report = engine.diagnose("rice", &symptoms, &no_weather).unwrap();
    let top = report.top().unwrap();

    assert_eq!(top.disease, "Rice Blast");
    assert_eq!(top.symptom_match, 37.5);
    assert_eq!(top.confidence, 26.2);
}

#[test]
fn test_case_insensitive_diagnosis() {
    let engine = DiagnosisEngine::default();
    let lower = engine
        .diagnose("wheat", &["yellow powder on leaves"], &["dew formation"])
        .unwrap();
    let mixed = engine
        .diagnose("WHEAT", &["Yellow POWDER on Leaves"], &["Dew Formation"])
        .unwrap();

    assert_eq!(lower.possible_diseases, mixed.possible_diseases);
}

#[test]
fn test_demo_cases_run() {
    let engine = DiagnosisEngine::default();
    let expected_top = ["Rice Blast", "Late Blight", "Rice Blast"];

    for (case, expected) in DEMO_CASES.iter().zip(expected_top) {
        let report = engine.diagnose(case.crop, case.symptoms, case.weather).unwrap();
        assert_eq!(report.top().unwrap().disease, expected, "{}", case.title);
    }
}

#[test]
fn test_custom_catalog_from_file() {
    let catalog = Catalog::load(&fixture_path()).unwrap();
    assert_eq!(catalog.crop_keys(), vec!["potato", "onion"]);
    assert_eq!(catalog.disease_count(), 3);

    let engine = DiagnosisEngine::new(catalog);
    let report = engine
        .diagnose("Potato", &["white fungal growth", "tuber rot"], &["high humidity"])
        .unwrap();

    assert_eq!(report.possible_diseases.len(), 3);
    let top = report.top().unwrap();
    assert_eq!(top.disease, "Potato Late Blight");
    assert_relative_eq!(top.confidence, 100.0);

    // a record with no reference phrases is tolerated and scores 0
    let wilt = report
        .possible_diseases
        .iter()
        .find(|r| r.disease == "Unclassified Wilt")
        .unwrap();
    assert_relative_eq!(wilt.confidence, 0.0);
}

#[test]
fn test_custom_catalog_empty_crop() {
    let engine = DiagnosisEngine::new(Catalog::load(&fixture_path()).unwrap());
    let report = engine.diagnose("onion", &["soft neck"], &["rain"]).unwrap();

    assert!(report.possible_diseases.is_empty());
    assert!(report.top_diagnosis.is_none());
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DiagnosisEngine>();
}
