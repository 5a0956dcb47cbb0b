pub mod stage1_records;
pub mod stage2_classify;
pub mod stage3_stats;
pub mod stage4_report;
