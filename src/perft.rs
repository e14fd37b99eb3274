/*
 * Crab, a UCI-compatible chess engine
 * Copyright (C) 2024 Jasper Shovelton
 *
 * Crab is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Crab is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Crab. If not, see <https://www.gnu.org/licenses/>.
 */

use std::time::Instant;

use crate::{movegen::MoveGenerator, position::Position};

/// Counts the number of leaf nodes `depth` moves in the future.
///
/// This is the standard correctness oracle for a move generator: the node
/// count at each depth from the standard starting position (and a handful of
/// other well-known positions) is published and exact, so a mismatch points
/// directly at a move generation bug.
///
/// If `SHOULD_PRINT`, also prints a divide (the node count contributed by
/// each root move) and the total. If `IS_TIMED`, also prints the wall time
/// taken and the resulting nodes-per-second.
pub fn perft<const SHOULD_PRINT: bool, const IS_TIMED: bool>(
    position: &mut Position,
    depth: u8,
) -> u64 {
    if IS_TIMED {
        let time = Instant::now();
        let result = perft::<SHOULD_PRINT, false>(position, depth);
        let elapsed_us = time.elapsed().as_micros().max(1) as u64;
        let elapsed_ms = elapsed_us / 1_000;
        let nps = 1_000_000 * result / elapsed_us;
        println!("Time taken: {elapsed_ms} ms; NPS: {nps}");
        return result;
    }

    if depth == 0 {
        return 1;
    }

    let generator = MoveGenerator::new();
    let moves = generator.generate_legal(position);

    let mut total = 0;
    for mv in moves {
        position.make(mv);
        let nodes = count_nodes(position, depth - 1);
        position.unmake().expect("make() was just called");

        total += nodes;
        if SHOULD_PRINT {
            println!("{mv}: {nodes}");
        }
    }

    if SHOULD_PRINT {
        println!("Total: {total}");
    }
    total
}

/// The recursive leaf-counting step, without any printing overhead.
fn count_nodes(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let generator = MoveGenerator::new();
    let moves = generator.generate_legal(position);

    let mut total = 0;
    for mv in moves {
        position.make(mv);
        total += count_nodes(position, depth - 1);
        position.unmake().expect("make() was just called");
    }
    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::position::{Position, STARTPOS};

    #[test]
    fn startpos_perft_three() {
        let mut position: Position = STARTPOS.parse().unwrap();
        assert_eq!(perft::<false, false>(&mut position, 3), 8_902);
    }
}
