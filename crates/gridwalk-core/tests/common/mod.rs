use std::collections::HashSet;

use gridwalk_core::{Direction, Move, Point};

/// Build a move from a direction token, panicking on bad test input
#[allow(dead_code)]
pub fn mv(direction: &str, steps: i64) -> Move {
    Move::parse(direction, Some(steps)).expect("test move must be valid")
}

/// Repeat a block of moves `times` times
#[allow(dead_code)]
pub fn repeat(block: &[Move], times: usize) -> Vec<Move> {
    block
        .iter()
        .copied()
        .cycle()
        .take(block.len() * times)
        .collect()
}

/// Brute-force oracle: walk every point and collect the distinct ones
///
/// Only usable for small paths.
#[allow(dead_code)]
pub fn oracle_count(start: Point, moves: &[Move]) -> u64 {
    let mut visited = HashSet::new();
    let mut cursor = (start.x, start.y);
    for m in moves {
        let (dx, dy) = m.direction().unit_vector();
        visited.insert(cursor);
        for _ in 0..m.steps() {
            cursor = (cursor.0 + dx, cursor.1 + dy);
            visited.insert(cursor);
        }
    }
    visited.len() as u64
}

#[allow(dead_code)]
pub fn direction_from_index(index: usize) -> Direction {
    Direction::ALL[index % Direction::ALL.len()]
}
