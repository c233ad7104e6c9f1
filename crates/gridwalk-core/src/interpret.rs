//! Command interpreter: move list → raw axis-fixed segments

use crate::errors::{GridError, Result};
use crate::model::{Move, Point, Segment, Trace};

/// Walk `moves` from `start`, emitting one segment per move
///
/// East/west moves land in `Trace::horizontal` keyed by the cursor's y,
/// north/south moves in `Trace::vertical` keyed by the cursor's x. A zero-step
/// move yields a single-point segment.
///
/// # Errors
/// * `ArithmeticOverflow` - a coordinate or the aggregate path length leaves
///   the 64-bit range; `index` names the move that overflowed
pub fn trace_path(start: Point, moves: &[Move]) -> Result<Trace> {
    let mut trace = Trace::starting_at(start);
    let mut cursor = start;

    for (index, mv) in moves.iter().enumerate() {
        let overflow = || GridError::ArithmeticOverflow { index };

        let next = cursor
            .step(mv.direction(), mv.steps())
            .ok_or_else(overflow)?;

        trace.path_len = trace
            .path_len
            .checked_add(mv.steps().unsigned_abs())
            .and_then(|len| len.checked_add(1))
            .ok_or_else(overflow)?;

        if mv.direction().is_horizontal() {
            trace
                .horizontal
                .insert(Segment::new(cursor.y, cursor.x, next.x));
        } else {
            trace
                .vertical
                .insert(Segment::new(cursor.x, cursor.y, next.y));
        }

        cursor = next;
    }

    trace.end = cursor;
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    fn mv(direction: Direction, steps: i64) -> Move {
        Move::new(direction, steps).unwrap()
    }

    #[test]
    fn test_empty_move_list() {
        let trace = trace_path(Point::new(5, 5), &[]).unwrap();
        assert_eq!(trace.end, Point::new(5, 5));
        assert_eq!(trace.segment_count(), 0);
        assert_eq!(trace.path_len, 0);
    }

    #[test]
    fn test_zero_step_move_is_single_point() {
        let trace = trace_path(Point::new(2, 3), &[mv(Direction::North, 0)]).unwrap();
        assert!(trace.horizontal.is_empty());
        assert_eq!(
            trace.vertical.iter().copied().collect::<Vec<_>>(),
            vec![Segment::new(2, 3, 3)]
        );
        assert_eq!(trace.path_len, 1);
    }

    #[test]
    fn test_repeated_segment_is_stored_once() {
        let moves = [
            mv(Direction::East, 3),
            mv(Direction::West, 3),
            mv(Direction::East, 3),
        ];
        let trace = trace_path(Point::new(0, 0), &moves).unwrap();
        assert_eq!(trace.horizontal.len(), 1);
        assert_eq!(trace.end, Point::new(3, 0));
        assert_eq!(trace.path_len, 12);
    }

    #[test]
    fn test_overflow_reports_move_index() {
        let moves = [mv(Direction::East, 1), mv(Direction::East, i64::MAX)];
        let err = trace_path(Point::new(0, 0), &moves).unwrap_err();
        assert_eq!(err, GridError::ArithmeticOverflow { index: 1 });
    }
}
