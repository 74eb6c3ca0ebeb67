use crate::TOOL_NAME;
use crate::report::model::Report;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    for (artifact, package) in report.artifacts.iter().zip(&report.packages) {
        let path = artifact.path.as_deref().unwrap_or("<bytes>");
        match package {
            Some(package) => out.push_str(&format!(
                "Scanned {} ({} bytes, package \"{}\")\n",
                path, artifact.size_bytes, package
            )),
            None => out.push_str(&format!(
                "Scanned {} ({} bytes, undecoded)\n",
                path, artifact.size_bytes
            )),
        }
    }
    if report.findings.is_empty() {
        out.push_str("No missing references found.\n");
        return out;
    }
    out.push_str("Findings:\n");
    for finding in &report.findings {
        let kind = serde_json::to_string(&finding.kind)
            .unwrap_or_default()
            .trim_matches('"')
            .to_string();
        out.push_str(&format!("  - {}: {}", kind, finding.identifiers.join(", ")));
        if let Some(message) = &finding.message {
            out.push_str(&format!(" ({message})"));
        }
        if !finding.attributed_to.is_empty() {
            out.push_str(&format!(
                " [suggested dependency: {}]",
                finding.attributed_to.join(", ")
            ));
        }
        out.push('\n');
    }
    out
}
