use super::{sum_coverage, CoverageCounter};
use crate::model::{MergedSegments, Segment, Span};

/// Sorted y index with binary-searched bounds
///
/// For each vertical segment, two `partition_point` searches narrow the
/// y-sorted list of horizontal rows to `[start, end]`; only that slice is
/// tested for x-membership, itself a binary search over the row's spans.
/// Cost per vertical segment is O(log D + k log S) where D is the number of
/// distinct y values, k the number inside the range and S the spans per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedBinarySearch;

impl CoverageCounter for IndexedBinarySearch {
    fn name(&self) -> &'static str {
        "binary-search"
    }

    fn count(&self, horizontal: &MergedSegments, vertical: &MergedSegments) -> u64 {
        // ascending y
        let rows: Vec<(i64, &[Span])> = horizontal.groups().collect();

        sum_coverage(horizontal, vertical, |segment: &Segment| {
            let lo = rows.partition_point(|&(y, _)| y < segment.start());
            let hi = rows.partition_point(|&(y, _)| y <= segment.end());
            let x = segment.axis();

            rows[lo..hi]
                .iter()
                .filter(|(_, spans)| covers(spans, x))
                .count() as u64
        })
    }
}

/// Merged spans are sorted and disjoint, so at most one can hold `x`.
fn covers(spans: &[Span], x: i64) -> bool {
    let idx = spans.partition_point(|span| span.end < x);
    spans.get(idx).is_some_and(|span| span.start <= x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_between_and_inside_spans() {
        let spans = [Span { start: 0, end: 2 }, Span { start: 6, end: 9 }];
        assert!(covers(&spans, 0));
        assert!(covers(&spans, 2));
        assert!(!covers(&spans, 4));
        assert!(covers(&spans, 7));
        assert!(!covers(&spans, 10));
        assert!(!covers(&spans, -1));
        assert!(!covers(&[], 0));
    }
}
