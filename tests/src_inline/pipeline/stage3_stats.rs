use super::*;
use crate::dataset::builtin_pairs;
use crate::pipeline::stage1_records::build_records;

fn stats_for(pairs: &[(&str, f64)]) -> Result<SummaryStats, QcError> {
    let records = build_records(pairs).unwrap();
    run_stage3(&records, &ThresholdProfile::default_v1())
}

#[test]
fn test_stats_builtin_dataset() {
    let stats = stats_for(builtin_pairs()).unwrap();
    assert_eq!(stats.count, 11);
    assert!((stats.mean - 991.7 / 11.0).abs() < 1e-9);
    assert_eq!(format!("{:.1}", stats.mean), "90.2");
    assert_eq!(stats.max.category, "Планирование");
    assert_eq!(stats.max.score, 95.0);
    assert_eq!(stats.min.category, "Интеграция");
    assert_eq!(stats.min.score, 85.0);
    assert_eq!(stats.count_high, 6);
    assert_eq!(stats.count_medium, 5);
    assert_eq!(stats.count_low, 0);
}

#[test]
fn test_stats_empty_input() {
    assert!(matches!(stats_for(&[]), Err(QcError::EmptyInput)));
}

#[test]
fn test_stats_tie_break_first_occurrence() {
    let stats = stats_for(&[("a", 70.0), ("b", 99.0), ("c", 70.0), ("d", 99.0)]).unwrap();
    assert_eq!(stats.max.category, "b");
    assert_eq!(stats.min.category, "a");
}

#[test]
fn test_stats_counts_sum_to_total() {
    let stats = stats_for(&[("a", 79.9), ("b", 80.0), ("c", 90.0), ("d", 10.0)]).unwrap();
    assert_eq!(stats.count_high, 1);
    assert_eq!(stats.count_medium, 1);
    assert_eq!(stats.count_low, 2);
    assert_eq!(
        stats.count_high + stats.count_medium + stats.count_low,
        stats.count
    );
}

#[test]
fn test_stats_single_record() {
    let stats = stats_for(&[("only", 42.0)]).unwrap();
    assert_eq!(stats.mean, 42.0);
    assert_eq!(stats.max, stats.min);
    assert_eq!(stats.count_low, 1);
}

#[test]
fn test_stats_mean_of_huge_scores_stays_finite() {
    let stats = stats_for(&[("a", 1e308), ("b", 1e308)]).unwrap();
    assert!(stats.mean.is_finite());
    assert_eq!(stats.mean, 1e308);

    let stats = stats_for(&[("a", f64::MAX), ("b", f64::MAX), ("c", -f64::MAX)]).unwrap();
    assert!(stats.mean.is_finite());
    assert!(stats.mean > 0.0);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// max/min point at the first record holding the extreme value.
        #[test]
        fn extremes_use_first_occurrence(values in prop::collection::vec(0u8..8, 1..40)) {
            let names: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
            let pairs: Vec<(&str, f64)> = names
                .iter()
                .zip(&values)
                .map(|(n, &v)| (n.as_str(), 75.0 + f64::from(v) * 3.0))
                .collect();
            let stats = stats_for(&pairs).unwrap();

            let hi = values.iter().copied().max().unwrap();
            let lo = values.iter().copied().min().unwrap();
            let first_hi = values.iter().position(|&v| v == hi).unwrap();
            let first_lo = values.iter().position(|&v| v == lo).unwrap();

            prop_assert_eq!(&stats.max.category, &names[first_hi]);
            prop_assert_eq!(&stats.min.category, &names[first_lo]);
            prop_assert_eq!(
                stats.count_high + stats.count_medium + stats.count_low,
                values.len()
            );
        }

        #[test]
        fn mean_is_finite_and_bounded(values in prop::collection::vec(-1e307f64..1e307, 1..40)) {
            let names: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
            let pairs: Vec<(&str, f64)> = names
                .iter()
                .zip(&values)
                .map(|(n, &v)| (n.as_str(), v))
                .collect();
            let stats = stats_for(&pairs).unwrap();
            prop_assert!(stats.mean.is_finite());
            let slack = stats.max.score.abs().max(stats.min.score.abs()) * 1e-12;
            prop_assert!(stats.mean <= stats.max.score + slack);
            prop_assert!(stats.mean >= stats.min.score - slack);
        }
    }
}
