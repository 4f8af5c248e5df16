//! Sample diagnoses used by `crop_doctor demo` and the smoke tests.

/// A canned diagnosis request
#[derive(Debug, Clone, Copy)]
pub struct DemoCase {
    pub title: &'static str,
    pub crop: &'static str,
    pub symptoms: &'static [&'static str],
    pub weather: &'static [&'static str],
    pub note: Option<&'static str>,
}

pub static DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        title: "Rice with blast symptoms",
        crop: "rice",
        symptoms: &["brown spots on leaves", "wilting", "white centers"],
        weather: &["high humidity", "cool nights"],
        note: None,
    },
    DemoCase {
        title: "Tomato with late blight symptoms",
        crop: "tomato",
        symptoms: &["water-soaked dark spots", "white mold", "bad smell"],
        weather: &["cool temperature", "very high humidity"],
        note: None,
    },
    DemoCase {
        title: "Unusual symptoms",
        crop: "rice",
        symptoms: &["purple leaves", "strange growth"],
        weather: &["normal weather"],
        note: Some("Low confidence indicates unusual case"),
    },
];
