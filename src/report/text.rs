use crate::error::QcError;
use crate::model::stats::SummaryStats;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage2_classify::ClassifiedRecord;
use crate::report::{format_f64_1, format_threshold};

pub const REPORT_HEADER: &str = "=== QUALITY DATA FOR ANALYSIS ===";

/// Lines added around the per-record rows: header, blank separator,
/// "Summary:" and five summary entries.
pub const REPORT_OVERHEAD_LINES: usize = 8;

const CATEGORY_WIDTH: usize = 15;

pub fn format_report_lines(
    classified: &[ClassifiedRecord<'_>],
    stats: &SummaryStats,
    thresholds: &ThresholdProfile,
) -> Result<Vec<String>, QcError> {
    if classified.is_empty() {
        return Err(QcError::EmptyInput);
    }

    let mut lines = Vec::with_capacity(classified.len() + REPORT_OVERHEAD_LINES);
    lines.push(REPORT_HEADER.to_string());

    for (i, c) in classified.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {:<width$}: {:>5.1} - {}",
            i + 1,
            c.record.category(),
            c.record.score(),
            c.style.label,
            width = CATEGORY_WIDTH
        ));
    }

    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push(format!("- Mean score: {}", format_f64_1(stats.mean)));
    lines.push(format!(
        "- Maximum: {} ({})",
        format_f64_1(stats.max.score),
        stats.max.category
    ));
    lines.push(format!(
        "- Minimum: {} ({})",
        format_f64_1(stats.min.score),
        stats.min.category
    ));
    lines.push(format!(
        "- Categories with score >= {}: {}",
        format_threshold(thresholds.high_min),
        stats.count_high
    ));
    lines.push(format!(
        "- Categories needing attention (< {}): {}",
        format_threshold(thresholds.medium_min),
        stats.count_low
    ));

    Ok(lines)
}

pub fn render_report_text(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
