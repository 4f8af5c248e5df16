//! Phrase Matching
//!
//! Scores how much of what the user reported is explained by a disease's
//! reference phrases. Matching is case-insensitive substring containment in
//! either direction, so "wilting" matches "wilting of plants" and
//! "very high humidity" matches "high humidity".
//!
//! The score is deliberately asymmetric: it is the share of *user* phrases
//! that found a counterpart, not the share of the disease's phrases that were
//! reported. One correct symptom out of one reported scores 100.

/// Percentage (0-100) of `user_phrases` that match at least one of
/// `reference_phrases`.
///
/// Returns 0.0 when `user_phrases` is empty. Each user phrase counts once,
/// scanning stops at its first matching reference phrase.
pub fn phrase_match_score<U, R>(user_phrases: &[U], reference_phrases: &[R]) -> f64
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    if user_phrases.is_empty() {
        return 0.0;
    }

    let reference: Vec<String> = reference_phrases
        .iter()
        .map(|p| p.as_ref().to_lowercase())
        .collect();

    let mut matches = 0usize;
    for user_phrase in user_phrases {
        let user_phrase = user_phrase.as_ref().to_lowercase();
        for reference_phrase in &reference {
            if reference_phrase.contains(&user_phrase) || user_phrase.contains(reference_phrase.as_str()) {
                matches += 1;
                break;
            }
        }
    }

    matches as f64 / user_phrases.len() as f64 * 100.0
}

/// Share of reported symptoms explained by a disease's known symptoms (0-100)
pub fn symptom_match_score<U, R>(user_symptoms: &[U], disease_symptoms: &[R]) -> f64
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    phrase_match_score(user_symptoms, disease_symptoms)
}

/// Share of reported weather conditions that favour a disease (0-100)
pub fn weather_match_score<U, R>(user_weather: &[U], disease_weather: &[R]) -> f64
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    phrase_match_score(user_weather, disease_weather)
}

/// Round to one decimal place
///
/// Works on the exact binary value and breaks exact ties to the even digit,
/// so 26.25 becomes 26.2 and 0.35 (stored just below) becomes 0.3.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
