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

//! Crab, a UCI-compatible chess engine core, written in Rust.
//!
//! Accepted commands over stdin: `uci`, `isready`, `ucinewgame`,
//! `position [startpos|fen ...] [moves ...]`, `go` (only the `perft <depth>`
//! sub-form runs anything meaningful; any other spelling replies with a
//! legal move), `stop`, `quit`.
//!
//! If given command-line arguments, this binary runs `perft` directly
//! instead of entering the UCI loop: `crabcore perft <depth> [fen <fen>]`,
//! defaulting to the standard starting position when no FEN is given.

use std::env::args;

use crabcore::{perft::perft, position::Position, uci};

fn main() {
    let mut args = args().skip(1);

    if args.next().as_deref() == Some("perft") {
        let Some(depth) = args.next().and_then(|d| d.parse().ok()) else {
            eprintln!("usage: crabcore perft <depth> [fen <fen>]");
            return;
        };

        let mut position = if args.next().as_deref() == Some("fen") {
            let fen = args.collect::<Vec<_>>().join(" ");
            match fen.parse() {
                Ok(position) => position,
                Err(err) => {
                    eprintln!("invalid fen: {err}");
                    return;
                }
            }
        } else {
            Position::default()
        };

        perft::<true, true>(&mut position, depth);
        return;
    }

    uci::main_loop();
}
