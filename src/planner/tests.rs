use super::*;

#[test]
fn test_plan_with_partial_batch() {
    let plan = BatchPlanner::plan(100, 15).unwrap();
    assert_eq!(plan.batch_size(), 15);
    assert_eq!(plan.full_batch_count(), 6);
    assert_eq!(plan.remainder(), 10);
    assert!(plan.has_partial_batch());
    assert_eq!(plan.batch_count(), 7);
}

#[test]
fn test_plan_exact_multiple() {
    let plan = BatchPlanner::plan(45, 15).unwrap();
    assert_eq!(plan.full_batch_count(), 3);
    assert_eq!(plan.remainder(), 0);
    assert!(!plan.has_partial_batch());
    assert_eq!(plan.batch_count(), 3);
}

#[test]
fn test_plan_empty_document() {
    let plan = BatchPlanner::plan(0, 15).unwrap();
    assert_eq!(plan.full_batch_count(), 0);
    assert_eq!(plan.remainder(), 0);
    assert_eq!(plan.batches().count(), 0);
}

#[test]
fn test_plan_smaller_than_one_batch() {
    let plan = BatchPlanner::plan(7, 15).unwrap();
    assert_eq!(plan.full_batch_count(), 0);
    assert_eq!(plan.remainder(), 7);
    assert_eq!(plan.batch_count(), 1);
}

#[test]
fn test_zero_batch_size_rejected() {
    let result = BatchPlanner::plan(10, 0);
    assert!(matches!(result, Err(PlanError::InvalidArgument(_))));
}

#[test]
fn test_non_positive_batch_size_rejected_for_any_count() {
    for batch_size in [-15, -1, 0] {
        for sentence_count in [-3, 0, 1, 100] {
            let result = BatchPlanner::plan(sentence_count, batch_size);
            assert!(
                matches!(result, Err(PlanError::InvalidArgument(_))),
                "plan({}, {}) should fail",
                sentence_count,
                batch_size
            );
        }
    }
}

#[test]
fn test_negative_sentence_count_rejected() {
    for batch_size in [1, 15, 100] {
        let result = BatchPlanner::plan(-1, batch_size);
        assert!(matches!(result, Err(PlanError::InvalidArgument(_))));
    }

    let err = BatchPlanner::plan(-5, 15).unwrap_err();
    assert!(err.to_string().contains("sentence count"));
}

#[test]
fn test_invariant_holds_over_range() {
    for batch_size in 1..=40 {
        for sentence_count in 0..=300 {
            let plan = BatchPlanner::plan(sentence_count, batch_size).unwrap();
            assert_eq!(
                plan.full_batch_count() * plan.batch_size() + plan.remainder(),
                sentence_count as u64
            );
            assert!(plan.remainder() < plan.batch_size());
            assert_eq!(plan.total_sentences(), sentence_count as u64);
        }
    }
}

#[test]
fn test_plan_is_idempotent() {
    let first = BatchPlanner::plan(1234, 17).unwrap();
    let second = BatchPlanner::plan(1234, 17).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_batches_cover_all_sentences() {
    let plan = BatchPlanner::plan(100, 15).unwrap();
    let batches: Vec<Batch> = plan.batches().collect();

    assert_eq!(batches.len(), 7);
    assert_eq!(batches[0], Batch { index: 0, start: 0, len: 15 });
    assert_eq!(batches[5].end(), 90);
    assert_eq!(batches[6], Batch { index: 6, start: 90, len: 10 });

    // Contiguous, no gaps or overlap
    for pair in batches.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start);
    }
    assert_eq!(batches.iter().map(|b| b.len).sum::<u64>(), 100);
}

#[test]
fn test_batches_omit_empty_trailing_batch() {
    let plan = BatchPlanner::plan(45, 15).unwrap();
    let batches: Vec<Batch> = plan.batches().collect();

    assert_eq!(batches.len(), 3);
    assert!(batches.iter().all(|b| b.len == 15));
}

#[test]
fn test_large_counts() {
    let plan = BatchPlanner::plan(i64::MAX, 1).unwrap();
    assert_eq!(plan.full_batch_count(), i64::MAX as u64);
    assert_eq!(plan.remainder(), 0);
}

#[test]
fn test_default_batch_size() {
    assert_eq!(DEFAULT_BATCH_SIZE, 15);
}

#[test]
fn test_extreme_plans_stay_consistent() {
    for (sentence_count, batch_size) in [(i64::MAX, i64::MAX), (i64::MAX, 7), (1, i64::MAX)] {
        let plan = BatchPlanner::plan(sentence_count, batch_size).unwrap();
        assert_eq!(plan.total_sentences(), sentence_count as u64);
        assert!(plan.remainder() < plan.batch_size());
        assert_eq!(
            plan.batch_count(),
            plan.full_batch_count() + u64::from(plan.remainder() > 0)
        );
    }
}

#[test]
fn test_plan_serializes_camel_case() {
    let plan = BatchPlanner::plan(100, 15).unwrap();
    let value = serde_json::to_value(plan).unwrap();

    assert_eq!(value["batchSize"], 15);
    assert_eq!(value["fullBatchCount"], 6);
    assert_eq!(value["remainder"], 10);
}
