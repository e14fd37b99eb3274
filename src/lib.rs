//! Crabcore: a bitboard-based chess position and legal move generator.
//!
//! This crate is the rules-and-board-state core of a UCI chess engine: it
//! knows how to parse a position from FEN, apply and reverse moves, and
//! enumerate every legal move for the side to move. It deliberately does not
//! contain a search, an evaluation function, or a transposition table; those
//! belong to a separate crate built on top of this one.

/// Bitboards: 64-bit sets of squares.
pub mod bitboard;
/// Definitions and enumerations shared by every other module.
pub mod defs;
/// Error types returned at the FEN, position and UCI boundaries.
pub mod error;
/// Legal move generation.
pub mod movegen;
/// A recursive leaf-counting correctness oracle for the move generator.
pub mod perft;
/// The bitboard-based board representation.
pub mod position;
/// The UCI command loop.
pub mod uci;
/// Small free functions shared across modules.
pub mod util;
