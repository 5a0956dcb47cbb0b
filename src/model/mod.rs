pub mod record;
pub mod stats;
pub mod thresholds;
pub mod tier;
