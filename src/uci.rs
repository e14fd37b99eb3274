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

use std::io::stdin;

use crate::{
    defs::{Color, File, Piece, PieceType, Square},
    error::BadMove,
    movegen::{Move, MoveGenerator},
    perft::perft,
    position::Position,
};

/// The name of the author of this engine.
const ID_AUTHOR: &str = "Jasper Shovelton";
/// The name of this engine.
const ID_NAME: &str = "Crab";
/// The version of this engine.
const ID_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repeatedly reads a line from stdin and executes it as a UCI command.
///
/// Runs until `quit` is received or stdin is closed. There is no search, no
/// worker threads and no time management here: `go` either runs a `perft`
/// count or, to keep the protocol well-formed against GUIs that expect a
/// `bestmove` reply, plays the first legal move.
pub fn main_loop() {
    let mut position = Position::default();

    for line in stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("failed to read a line from stdin: {err}");
                continue;
            }
        };

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("uci") => {
                println!("id name {ID_NAME} {ID_VERSION}");
                println!("id author {ID_AUTHOR}");
                println!("uciok");
            }
            Some("isready") => println!("readyok"),
            Some("ucinewgame") => position.set_startpos(),
            Some("position") => set_position(tokens, &mut position),
            Some("go") => go(tokens, &mut position),
            Some("stop") => (),
            Some("quit") => break,
            Some(other) => println!("info string unrecognised command \"{other}\""),
            None => (),
        }
    }
}

/// Interprets and executes the `go` command.
///
/// Only the `perft <depth>` sub-form is meaningful without a search; every
/// other spelling of `go` replies with the first legal move so that a GUI
/// which blocks waiting for `bestmove` doesn't hang.
fn go<'a>(mut tokens: impl Iterator<Item = &'a str>, position: &mut Position) {
    if tokens.next() == Some("perft") {
        match tokens.next().and_then(|depth| depth.parse().ok()) {
            Some(depth) => {
                perft::<true, true>(position, depth);
            }
            None => println!("info string go perft requires a depth"),
        }
        return;
    }

    let moves = MoveGenerator::new().generate_legal(position);
    match moves.first() {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove 0000"),
    }
}

/// Sets the position from a `position [startpos|fen ...] [moves ...]`
/// command.
///
/// The update is transactional: built up in a scratch [`Position`] and only
/// written back to `position` once every field and move has parsed and
/// verified successfully.
fn set_position<'a>(mut tokens: impl Iterator<Item = &'a str>, position: &mut Position) {
    let mut scratch = match tokens.next() {
        Some("startpos") => Position::default(),
        Some("fen") => {
            let mut fen = String::with_capacity(64);
            for _ in 0..6 {
                let Some(token) = tokens.next() else {
                    println!("info string fen string is missing a field");
                    return;
                };
                fen.push_str(token);
                fen.push(' ');
            }

            match fen.parse() {
                Ok(parsed) => parsed,
                Err(err) => {
                    println!("info string invalid fen: {err}");
                    return;
                }
            }
        }
        _ => {
            println!("info string position command must start with \"startpos\" or \"fen\"");
            return;
        }
    };

    if let Some(token) = tokens.next() {
        if token != "moves" {
            println!("info string expected \"moves\", found \"{token}\"");
            return;
        }
    }

    let generator = MoveGenerator::new();
    for mv_str in tokens {
        let mv = match parse_move(mv_str, &scratch) {
            Ok(mv) => mv,
            Err(err) => {
                println!("info string couldn't parse move \"{mv_str}\": {err}");
                return;
            }
        };

        if !generator.generate_legal(&mut scratch).contains(&mv) {
            println!("info string move \"{mv_str}\" is not legal");
            return;
        }

        scratch.make(mv);
    }

    *position = scratch;
}

/// Parses a move in long algebraic notation (e.g. "e2e4", "a7a8q") into a
/// [`Move`].
///
/// This only needs `position` to know which piece is moving and whether
/// `move.to` is the current en passant square; it does not check full
/// legality (the caller filters against [`MoveGenerator::generate_legal()`]).
fn parse_move(string: &str, position: &Position) -> Result<Move, BadMove> {
    let start: Square = string
        .get(0..2)
        .ok_or(BadMove::BadSquare)?
        .parse()
        .map_err(|_| BadMove::BadSquare)?;
    let end: Square = string
        .get(2..4)
        .ok_or(BadMove::BadSquare)?
        .parse()
        .map_err(|_| BadMove::BadSquare)?;

    let piece = position.piece_at(start);
    if piece == Piece::NONE || Color::from(piece) != position.side_to_move() {
        return Err(BadMove::NoPieceToMove);
    }
    let piece_type = PieceType::from(piece);

    if string.len() >= 5 {
        let promo_char = string.as_bytes()[4] as char;
        let promo_piece = PieceType::try_from(promo_char).map_err(|_| BadMove::BadPromotion)?;
        if promo_piece != PieceType::KNIGHT
            && promo_piece != PieceType::BISHOP
            && promo_piece != PieceType::ROOK
            && promo_piece != PieceType::QUEEN
        {
            return Err(BadMove::BadPromotion);
        }
        return Ok(Move::new_promo(start, end, promo_piece));
    }

    if piece_type == PieceType::KING && File::from(start).0.abs_diff(File::from(end).0) == 2 {
        return Ok(Move::new_castle(start, end));
    }

    if piece_type == PieceType::PAWN && end == position.ep_square() {
        return Ok(Move::new_en_passant(start, end));
    }

    Ok(Move::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::parse_move;
    use crate::{error::BadMove, position::Position};

    #[test]
    fn parses_a_normal_move() {
        let position = Position::default();
        let mv = parse_move("e2e4", &position).unwrap();
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn rejects_a_move_from_an_empty_square() {
        let position = Position::default();
        assert_eq!(parse_move("e4e5", &position), Err(BadMove::NoPieceToMove));
    }

    #[test]
    fn rejects_a_malformed_square() {
        let position = Position::default();
        assert_eq!(parse_move("z9e5", &position), Err(BadMove::BadSquare));
    }
}
