use super::*;
use crate::model::tier::BarColor;
use crate::pipeline::stage1_records::build_records;

#[test]
fn test_stage2_annotates_each_record() {
    let records = build_records(&[("a", 95.0), ("b", 85.0), ("c", 70.0)]).unwrap();
    let out = run_stage2(&records, &ThresholdProfile::default_v1());
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].tier, Tier::High);
    assert_eq!(out[0].style.label, "Excellent");
    assert_eq!(out[1].tier, Tier::Medium);
    assert_eq!(out[1].style.label, "Good");
    assert_eq!(out[2].tier, Tier::Low);
    assert_eq!(out[2].style.label, "Needs attention");
    assert_eq!(out[2].record.category(), "c");
}

#[test]
fn test_chart_bars_follow_input_order() {
    let records = build_records(&[("z", 80.0), ("a", 90.0), ("m", 79.0)]).unwrap();
    let classified = run_stage2(&records, &ThresholdProfile::default_v1());
    let bars = chart_bars(&classified);
    let triples: Vec<(&str, f64, BarColor)> = bars
        .iter()
        .map(|b| (b.category.as_str(), b.score, b.color))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("z", 80.0, BarColor::Amber),
            ("a", 90.0, BarColor::Green),
            ("m", 79.0, BarColor::Red),
        ]
    );
}
