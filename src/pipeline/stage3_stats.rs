use crate::error::QcError;
use crate::model::record::ScoreRecord;
use crate::model::stats::{Extreme, SummaryStats};
use crate::model::thresholds::ThresholdProfile;
use crate::model::tier::{Tier, classify_with};

pub fn run_stage3(
    records: &[ScoreRecord],
    thresholds: &ThresholdProfile,
) -> Result<SummaryStats, QcError> {
    let first = records.first().ok_or(QcError::EmptyInput)?;

    let n = records.len() as f64;
    let mut mean = 0.0f64;
    let mut max = first;
    let mut min = first;
    let mut count_high = 0usize;
    let mut count_medium = 0usize;
    let mut count_low = 0usize;

    for rec in records {
        // divide before adding so large finite scores cannot overflow
        mean += rec.score() / n;
        // strict comparisons keep the first occurrence on ties
        if rec.score() > max.score() {
            max = rec;
        }
        if rec.score() < min.score() {
            min = rec;
        }
        match classify_with(rec.score(), thresholds) {
            Tier::High => count_high += 1,
            Tier::Medium => count_medium += 1,
            Tier::Low => count_low += 1,
        }
    }

    Ok(SummaryStats {
        count: records.len(),
        mean,
        max: extreme(max),
        min: extreme(min),
        count_high,
        count_medium,
        count_low,
    })
}

fn extreme(rec: &ScoreRecord) -> Extreme {
    Extreme {
        category: rec.category().to_string(),
        score: rec.score(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_stats.rs"]
mod tests;
