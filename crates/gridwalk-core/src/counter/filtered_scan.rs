use std::collections::HashMap;

use super::{sum_coverage, CoverageCounter};
use crate::model::{MergedSegments, Segment, Span};

/// Unsorted y lookup filtered per vertical segment
///
/// Every distinct y is tested against each vertical segment's range: O(D)
/// per vertical segment. Fine for small inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilteredScan;

impl CoverageCounter for FilteredScan {
    fn name(&self) -> &'static str {
        "filtered-scan"
    }

    fn count(&self, horizontal: &MergedSegments, vertical: &MergedSegments) -> u64 {
        let mut spans_by_y: HashMap<i64, Vec<Span>> = HashMap::new();
        for segment in horizontal.iter() {
            spans_by_y
                .entry(segment.axis())
                .or_default()
                .push(segment.span());
        }

        sum_coverage(horizontal, vertical, |segment: &Segment| {
            let x = segment.axis();
            spans_by_y
                .iter()
                .filter(|(y, _)| segment.contains(**y))
                .map(|(_, spans)| spans.iter().filter(|span| span.contains(x)).count() as u64)
                .sum()
        })
    }
}
