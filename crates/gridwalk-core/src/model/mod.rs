pub mod coverage;
pub mod geometry;
pub mod moves;
pub mod segment;

pub use coverage::Coverage;
pub use geometry::{Direction, Point};
pub use moves::Move;
pub use segment::{MergedSegments, Segment, Span, Trace};
