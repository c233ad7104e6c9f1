//! Properties of the range merger

use std::collections::BTreeSet;

use gridwalk_core::{merge_segments, MergedSegments, Segment};
use proptest::prelude::*;

fn points(segments: impl IntoIterator<Item = Segment>) -> BTreeSet<(i64, i64)> {
    segments
        .into_iter()
        .flat_map(|s| (s.start()..=s.end()).map(move |v| (s.axis(), v)))
        .collect()
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    (-3i64..3, -12i64..12, -12i64..12).prop_map(|(axis, a, b)| Segment::new(axis, a, b))
}

fn assert_disjoint(merged: &MergedSegments) {
    for (_, spans) in merged.groups() {
        for pair in spans.windows(2) {
            assert!(pair[0].end < pair[1].start, "overlap in {:?}", pair);
        }
    }
}

proptest! {
    #[test]
    fn merge_preserves_covered_points(raw in prop::collection::vec(segment_strategy(), 0..24)) {
        let merged = merge_segments(raw.clone());
        prop_assert_eq!(points(merged.iter()), points(raw));
    }

    #[test]
    fn merge_is_idempotent(raw in prop::collection::vec(segment_strategy(), 0..24)) {
        let once = merge_segments(raw);
        let twice = merge_segments(once.iter());
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn merged_spans_are_sorted_and_disjoint(raw in prop::collection::vec(segment_strategy(), 0..24)) {
        let merged = merge_segments(raw.clone());
        assert_disjoint(&merged);
        prop_assert_eq!(merged.total_len(), points(raw).len() as u64);
    }

    #[test]
    fn merge_ignores_input_order(mut raw in prop::collection::vec(segment_strategy(), 0..24)) {
        let forward = merge_segments(raw.clone());
        raw.reverse();
        prop_assert_eq!(merge_segments(raw), forward);
    }
}

#[test]
fn test_non_overlapping_rows_unchanged() {
    let raw = [
        Segment::new(1, 1, 100),
        Segment::new(2, 1, 100),
        Segment::new(3, 50, 100),
    ];
    let merged = merge_segments(raw);
    assert_eq!(merged.iter().collect::<Vec<_>>(), raw.to_vec());
}
