use serde::Serialize;

use crate::error::QcError;
use crate::model::stats::{Extreme, SummaryStats};
use crate::model::thresholds::ThresholdProfile;
use crate::model::tier::Tier;
use crate::pipeline::stage2_classify::ClassifiedRecord;
use crate::report::format_f64_1;

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: &'static str,
    version: &'static str,
    thresholds: &'a ThresholdProfile,
    records: Vec<RecordJson<'a>>,
    summary: StatsJson<'a>,
}

#[derive(Debug, Serialize)]
struct RecordJson<'a> {
    index: usize,
    category: &'a str,
    score: f64,
    tier: Tier,
    status: &'static str,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct ExtremeJson<'a> {
    category: &'a str,
    score: f64,
}

#[derive(Debug, Serialize)]
struct StatsJson<'a> {
    count: usize,
    mean: f64,
    mean_display: String,
    max: ExtremeJson<'a>,
    min: ExtremeJson<'a>,
    count_high: usize,
    count_medium: usize,
    count_low: usize,
}

impl<'a> From<&'a Extreme> for ExtremeJson<'a> {
    fn from(value: &'a Extreme) -> Self {
        Self {
            category: &value.category,
            score: value.score,
        }
    }
}

pub fn render_summary_json(
    classified: &[ClassifiedRecord<'_>],
    stats: &SummaryStats,
    thresholds: &ThresholdProfile,
) -> Result<String, QcError> {
    let records = classified
        .iter()
        .enumerate()
        .map(|(i, c)| RecordJson {
            index: i + 1,
            category: c.record.category(),
            score: c.record.score(),
            tier: c.tier,
            status: c.style.label,
            color: c.style.color.hex(),
        })
        .collect();

    let doc = SummaryJson {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        thresholds,
        records,
        summary: StatsJson {
            count: stats.count,
            mean: stats.mean,
            mean_display: format_f64_1(stats.mean),
            max: (&stats.max).into(),
            min: (&stats.min).into(),
            count_high: stats.count_high,
            count_medium: stats.count_medium,
            count_low: stats.count_low,
        },
    };

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
