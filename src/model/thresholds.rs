use serde::Serialize;

/// Lower bounds (inclusive) of the quality tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdProfile {
    pub high_min: f64,
    pub medium_min: f64,
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            high_min: 90.0,
            medium_min: 80.0,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
