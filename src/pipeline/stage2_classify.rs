use crate::model::record::ScoreRecord;
use crate::model::thresholds::ThresholdProfile;
use crate::model::tier::{Tier, TierStyle, classify_with, style_for};
use crate::report::chart::ChartBar;

#[derive(Debug, Clone)]
pub struct ClassifiedRecord<'a> {
    pub record: &'a ScoreRecord,
    pub tier: Tier,
    pub style: TierStyle,
}

pub fn run_stage2<'a>(
    records: &'a [ScoreRecord],
    thresholds: &ThresholdProfile,
) -> Vec<ClassifiedRecord<'a>> {
    records
        .iter()
        .map(|record| {
            let tier = classify_with(record.score(), thresholds);
            ClassifiedRecord {
                record,
                tier,
                style: style_for(tier),
            }
        })
        .collect()
}

pub fn chart_bars(classified: &[ClassifiedRecord<'_>]) -> Vec<ChartBar> {
    classified
        .iter()
        .map(|c| ChartBar {
            category: c.record.category().to_string(),
            score: c.record.score(),
            color: c.style.color,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
