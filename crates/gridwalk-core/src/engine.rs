//! Orchestrator: interpret → merge → count, timed

use std::time::Instant;

use crate::counter::{CoverageCounter, IndexedBinarySearch};
use crate::errors::Result;
use crate::interpret::trace_path;
use crate::merge::merge_segments;
use crate::model::{Coverage, Move, Point};
use crate::{log_op_end, log_op_error, log_op_start};

const OP: &str = "compute_coverage";

/// Count the distinct points covered by walking `moves` from `start`
///
/// The returned duration spans segment construction, both merges and the
/// count. Each call is independent; nothing is shared between calls.
///
/// # Errors
/// * `ArithmeticOverflow` - the path leaves the 64-bit coordinate range
pub fn compute_coverage(
    start: Point,
    moves: &[Move],
    counter: &dyn CoverageCounter,
) -> Result<Coverage> {
    log_op_start!(
        OP,
        move_count = moves.len() as u64,
        strategy = counter.name()
    );
    let started = Instant::now();

    let trace = match trace_path(start, moves) {
        Ok(trace) => trace,
        Err(err) => {
            log_op_error!(
                OP,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };

    let horizontal = merge_segments(trace.horizontal);
    let vertical = merge_segments(trace.vertical);
    let unique = counter.count(&horizontal, &vertical);

    let duration = started.elapsed();
    log_op_end!(
        OP,
        duration_ms = duration.as_millis() as u64,
        move_count = moves.len() as u64,
        unique = unique,
        strategy = counter.name()
    );

    Ok(Coverage { unique, duration })
}

/// [`compute_coverage`] with the indexed binary-search counter
pub fn compute_coverage_default(start: Point, moves: &[Move]) -> Result<Coverage> {
    compute_coverage(start, moves, &IndexedBinarySearch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Strategy;
    use crate::errors::GridError;
    use crate::model::Direction;

    fn moves(raw: &[(Direction, i64)]) -> Vec<Move> {
        raw.iter()
            .map(|&(d, s)| Move::new(d, s).unwrap())
            .collect()
    }

    #[test]
    fn test_no_moves_yields_no_segments() {
        let coverage = compute_coverage_default(Point::new(0, 0), &[]).unwrap();
        assert_eq!(coverage.unique, 0);
    }

    #[test]
    fn test_single_zero_step_move_covers_one_point() {
        let path = moves(&[(Direction::East, 0)]);
        for strategy in Strategy::ALL {
            let coverage =
                compute_coverage(Point::new(9, 9), &path, strategy.counter()).unwrap();
            assert_eq!(coverage.unique, 1);
        }
    }

    #[test]
    fn test_overflow_propagates() {
        let path = moves(&[(Direction::North, i64::MAX)]);
        let err = compute_coverage_default(Point::new(0, 1), &path).unwrap_err();
        assert_eq!(err, GridError::ArithmeticOverflow { index: 0 });
    }
}
