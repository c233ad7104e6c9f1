//! Range merger: collapse overlapping same-axis segments

use std::collections::BTreeMap;

use crate::model::{MergedSegments, Segment, Span};

/// Merge segments that share a fixed-axis value and overlap or touch
///
/// Spans are extended while the next start is `<=` the current end. Spans
/// that are only adjacent (`end = 5`, next `start = 6`) stay separate: they
/// share no point, so summing their lengths is still exact.
///
/// Input order does not matter; each group is sorted explicitly.
pub fn merge_segments<I>(segments: I) -> MergedSegments
where
    I: IntoIterator<Item = Segment>,
{
    let mut grouped: BTreeMap<i64, Vec<Span>> = BTreeMap::new();
    for segment in segments {
        grouped
            .entry(segment.axis())
            .or_default()
            .push(segment.span());
    }

    for spans in grouped.values_mut() {
        *spans = merge_spans(std::mem::take(spans));
    }

    MergedSegments::from_groups(grouped)
}

fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(current) if span.start <= current.end => {
                current.end = current.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}
