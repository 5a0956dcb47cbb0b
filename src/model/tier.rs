use serde::Serialize;

use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    Green,
    Amber,
    Red,
}

impl BarColor {
    pub fn hex(self) -> &'static str {
        match self {
            BarColor::Green => "#4CAF50",
            BarColor::Amber => "#FFA500",
            BarColor::Red => "#F44336",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            BarColor::Green => "🟢",
            BarColor::Amber => "🟡",
            BarColor::Red => "🔴",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    pub color: BarColor,
    pub label: &'static str,
}

const HIGH_STYLE: TierStyle = TierStyle {
    color: BarColor::Green,
    label: "Excellent",
};

const MEDIUM_STYLE: TierStyle = TierStyle {
    color: BarColor::Amber,
    label: "Good",
};

const LOW_STYLE: TierStyle = TierStyle {
    color: BarColor::Red,
    label: "Needs attention",
};

pub fn tier_order() -> &'static [Tier] {
    &[Tier::High, Tier::Medium, Tier::Low]
}

/// Bounds are inclusive on the lower side; anything that fails both
/// comparisons (including NaN) is `Low`.
pub fn classify_with(score: f64, thresholds: &ThresholdProfile) -> Tier {
    if score >= thresholds.high_min {
        Tier::High
    } else if score >= thresholds.medium_min {
        Tier::Medium
    } else {
        Tier::Low
    }
}

#[cfg_attr(not(test), allow(dead_code))]
pub fn classify(score: f64) -> Tier {
    classify_with(score, &ThresholdProfile::default_v1())
}

pub fn style_for(tier: Tier) -> TierStyle {
    match tier {
        Tier::High => HIGH_STYLE,
        Tier::Medium => MEDIUM_STYLE,
        Tier::Low => LOW_STYLE,
    }
}

pub fn color_for(tier: Tier) -> BarColor {
    style_for(tier).color
}

pub fn label_for(tier: Tier) -> &'static str {
    style_for(tier).label
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tier.rs"]
mod tests;
