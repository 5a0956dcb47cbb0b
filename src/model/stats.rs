#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub category: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    /// Full precision; round only when displaying.
    pub mean: f64,
    pub max: Extreme,
    pub min: Extreme,
    pub count_high: usize,
    pub count_medium: usize,
    pub count_low: usize,
}
