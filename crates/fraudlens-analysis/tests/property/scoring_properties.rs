use fraudlens_analysis::features::layout::{ENTITY_COUNT, VALUE_ZSCORE};
use fraudlens_analysis::{derive_features, fit_forest, ThresholdClassifier};
use fraudlens_core::types::{Dataset, FeatureVector, Record, ScoreResult};
use proptest::prelude::*;

fn vectors_strategy() -> impl Strategy<Value = Vec<FeatureVector>> {
    prop::collection::vec(prop::collection::vec(-1e3f64..1e3, 3), 1..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, values)| FeatureVector::new(format!("r{i}"), values))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scores_in_unit_interval(vectors in vectors_strategy(), seed in any::<u64>()) {
        let model = fit_forest(&vectors, 10, 16, seed).unwrap();
        let result = model.score(&vectors).unwrap();
        prop_assert_eq!(result.len(), vectors.len());
        for entry in &result {
            prop_assert!(entry.score > 0.0 && entry.score <= 1.0, "score = {}", entry.score);
        }
    }

    #[test]
    fn same_seed_same_scores(vectors in vectors_strategy(), seed in any::<u64>()) {
        let a = fit_forest(&vectors, 8, 16, seed).unwrap().score(&vectors).unwrap();
        let b = fit_forest(&vectors, 8, 16, seed).unwrap().score(&vectors).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn rescoring_never_changes_result(vectors in vectors_strategy()) {
        let model = fit_forest(&vectors, 8, 16, 0).unwrap();
        let first = model.score(&vectors).unwrap();
        prop_assert_eq!(&first, &model.score(&vectors).unwrap());
        prop_assert_eq!(&first, &model.score_sequential(&vectors).unwrap());
    }

    #[test]
    fn classify_flags_rounded_fraction(n in 1usize..500, c in 0.001f64..0.999) {
        // Distinct scores, so no ties at the threshold.
        let scores = ScoreResult::from_scores((0..n).map(|i| (format!("r{i}"), (i + 1) as f64 / n as f64)));
        let labels = ThresholdClassifier::new(c).unwrap().classify(&scores);
        let expected = ((c * n as f64).round() as usize).clamp(1, n);
        prop_assert_eq!(labels.values().filter(|&&f| f).count(), expected);
    }

    #[test]
    fn constant_entities_have_zero_zscore(
        amounts in prop::collection::vec(0.0f64..1e4, 1..20),
        repeats in 1usize..5,
    ) {
        // Each entity repeats one amount, so its std is zero.
        let records = amounts
            .iter()
            .enumerate()
            .flat_map(|(e, &amount)| {
                (0..repeats).map(move |r| {
                    Record::new(format!("t{e}_{r}"), format!("u{e}")).with_field("amount", amount)
                })
            })
            .collect();
        let ds = Dataset::infer(records).unwrap();
        let vectors = derive_features(&ds, "entity", "amount").unwrap();
        for v in &vectors {
            prop_assert_eq!(v.values[VALUE_ZSCORE], 0.0);
            prop_assert_eq!(v.values[ENTITY_COUNT], repeats as f64);
        }
    }
}
