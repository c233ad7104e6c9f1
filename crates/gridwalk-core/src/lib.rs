//! Grid path coverage engine
//!
//! Counts the distinct integer grid points touched by a robot walking a list
//! of axis-aligned moves. Moves become axis-fixed segments, segments are
//! merged per axis value, and a [`CoverageCounter`] evaluates
//! `Σ len(H) + Σ len(V) − intersections` over the merged sets.

pub mod counter;
pub mod engine;
pub mod errors;
pub mod interpret;
pub mod logging_facility;
pub mod merge;
pub mod model;
pub mod request;

// Used by the exported logging macros
#[doc(hidden)]
pub use tracing;
pub use gridwalk_core_types;

pub use counter::{CoverageCounter, FilteredScan, IndexedBinarySearch, NaiveScan, Strategy};
pub use engine::{compute_coverage, compute_coverage_default};
pub use errors::{ExError, ExErrorKind, GridError, Result};
pub use interpret::trace_path;
pub use merge::merge_segments;
pub use model::{Coverage, Direction, MergedSegments, Move, Point, Segment, Span, Trace};
pub use request::{validate_commands, CommandSpec, PathRequest};
