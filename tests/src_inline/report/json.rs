use super::*;
use crate::dataset::builtin_pairs;
use crate::pipeline::stage1_records::build_records;
use crate::pipeline::stage2_classify::run_stage2;
use crate::pipeline::stage3_stats::run_stage3;

#[test]
fn test_summary_json_fields() {
    let records = build_records(builtin_pairs()).unwrap();
    let thresholds = ThresholdProfile::default_v1();
    let classified = run_stage2(&records, &thresholds);
    let stats = run_stage3(&records, &thresholds).unwrap();

    let json = render_summary_json(&classified, &stats, &thresholds).unwrap();
    assert!(json.ends_with('\n'));
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["tool"], "kira-qualityqc");
    assert_eq!(v["thresholds"]["high_min"], 90.0);
    assert_eq!(v["thresholds"]["medium_min"], 80.0);

    let rows = v["records"].as_array().unwrap();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0]["index"], 1);
    assert_eq!(rows[0]["category"], "Планирование");
    assert_eq!(rows[0]["tier"], "high");
    assert_eq!(rows[0]["status"], "Excellent");
    assert_eq!(rows[0]["color"], "#4CAF50");
    assert_eq!(rows[1]["tier"], "medium");
    assert_eq!(rows[1]["color"], "#FFA500");

    let summary = &v["summary"];
    assert_eq!(summary["count"], 11);
    assert_eq!(summary["mean_display"], "90.2");
    assert_eq!(summary["max"]["category"], "Планирование");
    assert_eq!(summary["min"]["category"], "Интеграция");
    assert_eq!(summary["min"]["score"], 85.0);
    assert_eq!(summary["count_high"], 6);
    assert_eq!(summary["count_medium"], 5);
    assert_eq!(summary["count_low"], 0);
}

#[test]
fn test_summary_json_mean_for_huge_scores() {
    let records = build_records(&[("a", 1e308), ("b", 1e308)]).unwrap();
    let thresholds = ThresholdProfile::default_v1();
    let classified = run_stage2(&records, &thresholds);
    let stats = run_stage3(&records, &thresholds).unwrap();

    let json = render_summary_json(&classified, &stats, &thresholds).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["summary"]["mean"], 1e308);
    assert_ne!(v["summary"]["mean_display"], "inf");
}
