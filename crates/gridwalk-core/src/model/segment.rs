use std::collections::{BTreeMap, HashSet};

use crate::model::Point;

/// Axis-aligned run of integer points
///
/// `axis` is the fixed coordinate (y for a horizontal segment, x for a
/// vertical one); `start..=end` runs along the other axis. `start <= end`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    axis: i64,
    start: i64,
    end: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Segment {
    /// Create a segment; the endpoints may be given in either order.
    pub fn new(axis: i64, a: i64, b: i64) -> Self {
        Self {
            axis,
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn axis(&self) -> i64 {
        self.axis
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    /// Number of points covered; never zero
    pub fn len(&self) -> u64 {
        self.span().len()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.span().contains(value)
    }
}

/// Inclusive `start..=end` range on one fixed axis value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Span {
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Raw segments produced by walking a move list
///
/// Horizontal segments are keyed by their y, vertical segments by their x.
/// The two sets are never merged with each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    pub horizontal: HashSet<Segment>,
    pub vertical: HashSet<Segment>,
    /// Cursor position after the last move
    pub end: Point,
    /// Sum of `steps + 1` over all moves; an upper bound on the coverage
    pub path_len: u64,
}

impl Trace {
    pub fn starting_at(start: Point) -> Self {
        Self {
            end: start,
            ..Self::default()
        }
    }

    pub fn segment_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }
}

/// Non-overlapping segments grouped by fixed-axis value
///
/// Only the range merger builds this type. For every axis value the spans are
/// sorted by start and no two of them share a point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedSegments {
    spans: BTreeMap<i64, Vec<Span>>,
}

impl MergedSegments {
    pub(crate) fn from_groups(spans: BTreeMap<i64, Vec<Span>>) -> Self {
        Self { spans }
    }

    /// All segments, ordered by axis value then start
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.spans.iter().flat_map(|(&axis, spans)| {
            spans
                .iter()
                .map(move |span| Segment::new(axis, span.start, span.end))
        })
    }

    /// Distinct axis values in ascending order
    pub fn axis_values(&self) -> impl Iterator<Item = i64> + '_ {
        self.spans.keys().copied()
    }

    /// Spans at one axis value (empty if none)
    pub fn spans_at(&self, axis: i64) -> &[Span] {
        self.spans.get(&axis).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = (i64, &[Span])> + '_ {
        self.spans
            .iter()
            .map(|(&axis, spans)| (axis, spans.as_slice()))
    }

    pub fn segment_count(&self) -> usize {
        self.spans.values().map(Vec::len).sum()
    }

    /// Total number of points covered by this set
    pub fn total_len(&self) -> u64 {
        self.spans.values().flatten().map(Span::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
