//! Coverage counters
//!
//! Every counter evaluates the same identity over merged horizontal (H) and
//! vertical (V) segments:
//!
//! ```text
//! total = Σ len(h) + Σ len(v) − intersections(H, V)
//! ```
//!
//! Because both sets are merged, a point lies on at most one horizontal span
//! and at most one vertical span, so each intersection is subtracted once.
//! The strategies differ only in how they find the horizontal spans crossing a
//! vertical segment.

mod binary_search;
mod filtered_scan;
mod naive_scan;

pub use binary_search::IndexedBinarySearch;
pub use filtered_scan::FilteredScan;
pub use naive_scan::NaiveScan;

use std::str::FromStr;

use crate::model::{MergedSegments, Segment};

/// Capability: count the distinct points covered by merged H and V sets
pub trait CoverageCounter: Send + Sync {
    /// Stable strategy name, used in logs and on the command line
    fn name(&self) -> &'static str;

    /// Number of distinct grid points covered by the union of both sets
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed `u64::MAX`. Sets built from a
    /// successful `trace_path` cannot reach that bound.
    fn count(&self, horizontal: &MergedSegments, vertical: &MergedSegments) -> u64;
}

/// Selectable counting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    BinarySearch,
    FilteredScan,
    NaiveScan,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BinarySearch,
        Strategy::FilteredScan,
        Strategy::NaiveScan,
    ];

    pub fn counter(self) -> &'static dyn CoverageCounter {
        match self {
            Strategy::BinarySearch => &IndexedBinarySearch,
            Strategy::FilteredScan => &FilteredScan,
            Strategy::NaiveScan => &NaiveScan,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.counter().name()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown strategy '{}' (expected one of: binary-search, filtered-scan, naive-scan)",
                    s
                )
            })
    }
}

/// Points on `vertical` not already counted through a horizontal span
fn vertical_contribution(vertical: &Segment, intersections: u64) -> u64 {
    let len = vertical.len();
    assert!(
        intersections <= len,
        "vertical segment at x={} reports {} intersections over {} points; unmerged input?",
        vertical.axis(),
        intersections,
        len
    );
    len - intersections
}

/// Shared driver: horizontal length sum plus each vertical's contribution
fn sum_coverage<F>(
    horizontal: &MergedSegments,
    vertical: &MergedSegments,
    mut intersections: F,
) -> u64
where
    F: FnMut(&Segment) -> u64,
{
    let mut total = horizontal.total_len();
    for segment in vertical.iter() {
        let hits = intersections(&segment);
        let Some(next) = total.checked_add(vertical_contribution(&segment, hits)) else {
            panic!("coverage total exceeds u64::MAX");
        };
        total = next;
    }
    total
}
