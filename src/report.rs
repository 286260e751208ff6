use crate::aggregator::AggregatedResults;

const HEADER: &str = "================ Clone Summary ================";
const FOOTER: &str = "===============================================";

pub fn render(results: &AggregatedResults) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        format!("Successful: {}", results.successes.len()),
    ];
    lines.extend(results.successes.iter().map(|label| format!("  - {}", label)));

    if results.has_failures() {
        lines.push(format!("Failed: {}", results.failures.len()));
        lines.extend(
            results
                .failures
                .iter()
                .map(|reference| format!("  - {}", reference)),
        );
    }
    lines.push(FOOTER.to_string());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

pub fn render_json(results: &AggregatedResults) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
