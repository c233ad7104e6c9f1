use super::{sum_coverage, CoverageCounter};
use crate::model::{MergedSegments, Segment};

/// Baseline counter: scan every horizontal segment
///
/// O(H) per vertical segment with no index at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveScan;

impl CoverageCounter for NaiveScan {
    fn name(&self) -> &'static str {
        "naive-scan"
    }

    fn count(&self, horizontal: &MergedSegments, vertical: &MergedSegments) -> u64 {
        let segments: Vec<Segment> = horizontal.iter().collect();

        sum_coverage(horizontal, vertical, |segment: &Segment| {
            segments
                .iter()
                .filter(|h| segment.contains(h.axis()) && h.contains(segment.axis()))
                .count() as u64
        })
    }
}
