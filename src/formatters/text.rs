use crate::diagnosis::{DiagnosisReport, DiagnosisResult};

/// Plain-text formatter for the terminal
pub struct TextFormatter;

impl TextFormatter {
    /// Format a report: confidence band, top diagnosis with its advice, then
    /// up to `alternatives` runner-up diseases.
    pub fn format(report: &DiagnosisReport, alternatives: usize) -> String {
        let mut out = String::with_capacity(1024);
        let rule = "=".repeat(50);

        out.push_str(&format!("{}\n🎯 DIAGNOSIS RESULTS\n{}\n", rule, rule));

        let Some(top) = report.top() else {
            out.push_str(&format!("\nNo diseases registered for {}\n", report.crop));
            return out;
        };

        let band = top.band();
        out.push_str(&format!("{} {}\n", band.icon(), band.display_text()));

        Self::format_top(&mut out, top);

        let others = report.alternatives(alternatives);
        if !others.is_empty() {
            out.push_str("\n📋 OTHER POSSIBLE DISEASES:\n");
            for result in others {
                out.push_str(&format!("• {} ({:.1}% confidence)\n", result.disease, result.confidence));
            }
        }

        out
    }

    /// Short summary of the top pick, used by the demo run
    pub fn format_summary(report: &DiagnosisReport) -> String {
        match report.top() {
            Some(top) => format!(
                "Top diagnosis: {}\nConfidence: {:.1}%\nSeverity: {}\nTreatment: {}",
                top.disease,
                top.confidence,
                top.severity,
                top.treatment.first().map(String::as_str).unwrap_or("-")
            ),
            None => format!("No diseases registered for {}", report.crop),
        }
    }

    fn format_top(out: &mut String, top: &DiagnosisResult) {
        out.push_str(&format!("\n🦠 Disease: {}\n", top.disease));
        out.push_str(&format!("🎯 Confidence: {:.1}%\n", top.confidence));
        out.push_str(&format!("⚡ Severity: {}\n", top.severity.to_uppercase()));
        out.push_str(&format!("💰 Treatment Cost: {}\n", top.cost));

        out.push_str("\n💊 RECOMMENDED TREATMENT:\n");
        for (i, step) in top.treatment.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }

        out.push_str("\n🛡️ PREVENTION FOR FUTURE:\n");
        for (i, step) in top.prevention.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }
}
