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

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Sub},
    str::FromStr,
};

use crate::{bitboard::Bitboard, error::FenError};

/// A cardinal direction.
// it doesn't make sense to say a direction is 'less than' another
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct Direction(pub i8);

/// A file: file A = 0 to file H = 7.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd)]
pub struct File(pub u8);

/// A piece, containing both the type of piece and its color.
///
/// The internal order of pieces is the same as [`PieceType`], but the exact
/// constants are not.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Piece(pub u8);

/// A type of piece, without reference to color.
///
/// The internal order of pieces is the same as [`Piece`], but the exact
/// constants are not.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct PieceType(pub u8);

/// A rank: rank 1 = 0 to rank 8 = 7.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rank(pub u8);

/// A side to move. White = 0, Black = 1, or 2 for no color.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Color(pub u8);

/// A square, using little-endian rank-file mapping: a1 = 0, b1 = 1, ..., h8 =
/// 63.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd)]
pub struct Square(pub u8);

/// An array of character constants associated with each piece on both sides,
/// with the character '0' at the end to allow conversion from [`Piece::NONE`].
///
/// e.g. `PIECE_CHARS[Piece::WKNIGHT.to_index()] == 'N'`;
/// `PIECE_CHARS[Piece::BKING.to_index()] == 'k'`;
/// `PIECE_CHARS[Piece::NONE.to_index()] == '0'`.
static PIECE_CHARS: [char; Piece::TOTAL + 1] = [
    'P', 'p', 'N', 'n', 'B', 'b', 'R', 'r', 'Q', 'q', 'K', 'k', '0',
];

/// Cardinal directions, according to little-endian rank-file mapping.
#[allow(dead_code)]
impl Direction {
    /// North: towards the 8th rank.
    pub const N: Self = Self(8);
    /// North-east.
    pub const NE: Self = Self(9);
    /// East: towards the H file.
    pub const E: Self = Self(1);
    /// South-east.
    pub const SE: Self = Self(-7);
    /// South: towards the 1st rank.
    pub const S: Self = Self(-8);
    /// South-west.
    pub const SW: Self = Self(-9);
    /// West: towards the A file.
    pub const W: Self = Self(-1);
    /// North-west.
    pub const NW: Self = Self(7);
}

/// File enumerations.
#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl File {
    pub const FILE1: Self = Self(0);
    pub const FILE2: Self = Self(1);
    pub const FILE3: Self = Self(2);
    pub const FILE4: Self = Self(3);
    pub const FILE5: Self = Self(4);
    pub const FILE6: Self = Self(5);
    pub const FILE7: Self = Self(6);
    pub const FILE8: Self = Self(7);
    pub const TOTAL: usize = 8;
}

/// Piece enumerations for White and Black.
#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Piece {
    pub const WPAWN: Self = Self::from_piecetype(PieceType::PAWN, Color::WHITE);
    pub const WKNIGHT: Self = Self::from_piecetype(PieceType::KNIGHT, Color::WHITE);
    pub const WBISHOP: Self = Self::from_piecetype(PieceType::BISHOP, Color::WHITE);
    pub const WROOK: Self = Self::from_piecetype(PieceType::ROOK, Color::WHITE);
    pub const WQUEEN: Self = Self::from_piecetype(PieceType::QUEEN, Color::WHITE);
    pub const WKING: Self = Self::from_piecetype(PieceType::KING, Color::WHITE);
    pub const BPAWN: Self = Self::from_piecetype(PieceType::PAWN, Color::BLACK);
    pub const BKNIGHT: Self = Self::from_piecetype(PieceType::KNIGHT, Color::BLACK);
    pub const BBISHOP: Self = Self::from_piecetype(PieceType::BISHOP, Color::BLACK);
    pub const BROOK: Self = Self::from_piecetype(PieceType::ROOK, Color::BLACK);
    pub const BQUEEN: Self = Self::from_piecetype(PieceType::QUEEN, Color::BLACK);
    pub const BKING: Self = Self::from_piecetype(PieceType::KING, Color::BLACK);
    pub const TOTAL: usize = 12;
    pub const NONE: Self = Self(12);
}

/// Piece type enumerations.
#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl PieceType {
    pub const PAWN: Self = Self(0);
    pub const KNIGHT: Self = Self(1);
    pub const BISHOP: Self = Self(2);
    pub const ROOK: Self = Self(3);
    pub const QUEEN: Self = Self(4);
    pub const KING: Self = Self(5);
    pub const TOTAL: usize = 6;
    pub const NONE: Self = Self(6);
}

/// Rank enumerations.
#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Rank {
    pub const RANK1: Self = Self(0);
    pub const RANK2: Self = Self(1);
    pub const RANK3: Self = Self(2);
    pub const RANK4: Self = Self(3);
    pub const RANK5: Self = Self(4);
    pub const RANK6: Self = Self(5);
    pub const RANK7: Self = Self(6);
    pub const RANK8: Self = Self(7);
    pub const TOTAL: usize = 8;
}

/// Color enumerations. `WHITE` is 0 and `BLACK` is 1, matching the
/// side-to-move bit used to index the per-color bitboard arrays.
#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Color {
    pub const WHITE: Self = Self(0);
    pub const BLACK: Self = Self(1);
    pub const TOTAL: usize = 2;
    pub const NONE: Self = Self(2);
}

/// Square enumerations.
#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Square {
    pub const A1: Self = Self(0);
    pub const B1: Self = Self(1);
    pub const C1: Self = Self(2);
    pub const D1: Self = Self(3);
    pub const E1: Self = Self(4);
    pub const F1: Self = Self(5);
    pub const G1: Self = Self(6);
    pub const H1: Self = Self(7);
    pub const A2: Self = Self(8);
    pub const H2: Self = Self(15);
    pub const A7: Self = Self(48);
    pub const H7: Self = Self(55);
    pub const A8: Self = Self(56);
    pub const B8: Self = Self(57);
    pub const C8: Self = Self(58);
    pub const D8: Self = Self(59);
    pub const E8: Self = Self(60);
    pub const F8: Self = Self(61);
    pub const G8: Self = Self(62);
    pub const H8: Self = Self(63);
    pub const TOTAL: usize = 64;
    pub const NONE: Self = Self(64);
}

impl From<File> for char {
    /// Converts a file into a character: 'a' to 'h'.
    fn from(file: File) -> Self {
        (b'a' + file.0) as Self
    }
}

impl From<Piece> for char {
    /// Converts a piece into a character: 'P' for White pawn, 'k' for Black
    /// king, etc.
    fn from(piece: Piece) -> Self {
        PIECE_CHARS[piece.to_index()]
    }
}

impl From<PieceType> for char {
    /// Converts a piece type into a lowercase character: 'p' for pawn to 'k'
    /// for king.
    fn from(piece_type: PieceType) -> Self {
        let piece = Piece::from_piecetype(piece_type, Color::BLACK);
        Self::from(piece)
    }
}

impl From<Rank> for char {
    /// Converts a rank into a character: '1' to '8'.
    fn from(rank: Rank) -> Self {
        (b'1' + rank.0) as Self
    }
}

impl From<Color> for char {
    /// Converts a color into a char, assuming the color is White or Black.
    ///
    /// 'w' if White and 'b' if Black; undefined otherwise.
    fn from(color: Color) -> Self {
        (b'w' + color.0 * 3) as Self
    }
}

impl From<Square> for File {
    /// Calculates the file of a square.
    fn from(square: Square) -> Self {
        Self(square.0 & 7)
    }
}

impl TryFrom<char> for Piece {
    type Error = FenError;

    /// Converts a piece character specified by FEN into an actual piece.
    fn try_from(piece: char) -> Result<Self, Self::Error> {
        Ok(match piece {
            'P' => Self::WPAWN,
            'N' => Self::WKNIGHT,
            'B' => Self::WBISHOP,
            'R' => Self::WROOK,
            'Q' => Self::WQUEEN,
            'K' => Self::WKING,
            'p' => Self::BPAWN,
            'n' => Self::BKNIGHT,
            'b' => Self::BBISHOP,
            'r' => Self::BROOK,
            'q' => Self::BQUEEN,
            'k' => Self::BKING,
            _ => return Err(FenError::InvalidPiece(piece)),
        })
    }
}

impl TryFrom<char> for PieceType {
    type Error = FenError;

    /// Converts a promotion/piece character specified by FEN or UCI into a
    /// [`PieceType`], ignoring case.
    fn try_from(piece: char) -> Result<Self, Self::Error> {
        Ok(match piece.to_ascii_lowercase() {
            'p' => Self::PAWN,
            'n' => Self::KNIGHT,
            'b' => Self::BISHOP,
            'r' => Self::ROOK,
            'q' => Self::QUEEN,
            'k' => Self::KING,
            _ => return Err(FenError::InvalidPiece(piece)),
        })
    }
}

impl From<Piece> for PieceType {
    /// Calculates the type of a piece.
    fn from(piece: Piece) -> Self {
        Self(piece.0 >> 1)
    }
}

impl From<Square> for Rank {
    /// Calculates the rank of a square.
    fn from(square: Square) -> Self {
        Self(square.0 >> 3)
    }
}

impl From<Piece> for Color {
    /// Calculates the color of a piece. Undefined if `piece` is
    /// [`Piece::NONE`].
    fn from(piece: Piece) -> Self {
        Self(piece.0 & 1)
    }
}

impl Add<Direction> for Square {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        Self(self.0.wrapping_add_signed(rhs.0))
    }
}

impl Display for Square {
    /// Converts a square into its string representation: the square if `self`
    /// isn't [`Square::NONE`] (e.g. "b3") or "-" otherwise.
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            fmt.write_str("-")
        } else {
            let mut ret_str = String::new();
            ret_str.push(char::from(File::from(*self)));
            ret_str.push(char::from(Rank::from(*self)));
            fmt.write_str(&ret_str)
        }
    }
}

impl From<Bitboard> for Square {
    /// Converts the position of the LSB of `bb` to a [`Square`].
    ///
    /// Returns [`Square::NONE`] if `bb` is empty.
    fn from(bb: Bitboard) -> Self {
        Self(bb.0.trailing_zeros() as u8)
    }
}

impl FromStr for Square {
    type Err = FenError;

    /// Converts a string representation of a square (e.g. "e4") into a
    /// [`Square`]. Returns `Ok(Self::NONE)` if the string is "-" and `Err`
    /// otherwise if malformed.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string == "-" {
            return Ok(Self::NONE);
        }

        let mut iter = string.as_bytes().iter();

        let &file = iter.next().ok_or(FenError::InvalidSquare)?;
        if !(b'a'..=b'h').contains(&file) {
            return Err(FenError::InvalidSquare);
        }

        let &rank = iter.next().ok_or(FenError::InvalidSquare)?;
        if !(b'1'..=b'8').contains(&rank) {
            return Err(FenError::InvalidSquare);
        }

        if iter.next().is_some() {
            return Err(FenError::InvalidSquare);
        }

        Ok(Self((rank - b'1') * 8 + (file - b'a')))
    }
}

impl Sub<Direction> for Square {
    type Output = Self;

    fn sub(self, rhs: Direction) -> Self::Output {
        Self(self.0.wrapping_add_signed(-rhs.0))
    }
}

impl Piece {
    /// Creates a [`Piece`] from a [`PieceType`] and a [`Color`].
    #[inline]
    pub const fn from_piecetype(piece: PieceType, color: Color) -> Self {
        Self((piece.0 << 1) + color.0)
    }

    /// Converts the piece to a usize, for indexing arrays.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl PieceType {
    /// Converts the piece type to a usize, for indexing arrays.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl Color {
    /// Flips the color.
    ///
    /// e.g. `Color::WHITE.flip() == Color::BLACK`.
    ///
    /// The result is undefined if the color isn't [`Color::WHITE`] or
    /// [`Color::BLACK`].
    #[inline]
    pub const fn flip(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Converts the color to a usize, for indexing arrays.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl Square {
    /// Converts `rank` and `file` into a [`Square`].
    #[inline]
    pub const fn from_pos(rank: Rank, file: File) -> Self {
        Self(rank.0 * 8 + file.0)
    }

    /// Converts the square to a usize, for indexing arrays.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}
