use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::types::*;

impl Move {
    /// Coordinate notation: origin, destination, optional promotion letter.
    pub fn to_uci(&self) -> String {
        let mut s = String::with_capacity(5);
        s.push_str(&self.from.to_string());
        s.push_str(&self.to.to_string());
        if let Some(c) = self.promo.and_then(PieceKind::promotion_char) {
            s.push(c);
        }
        s
    }

    /// Parse coordinate notation. The castling and en-passant flags are always
    /// false here; match the result against the legal move list to recover them.
    pub fn from_uci(txt: &str) -> Result<Move, NotationError> {
        let chars: Vec<char> = txt.chars().collect();
        if chars.len() < 4 {
            return Err(NotationError::TooShort(txt.to_string()));
        }
        if chars.len() > 5 {
            return Err(NotationError::TooLong(txt.to_string()));
        }
        let from = Square::from_chars(chars[0], chars[1])
            .ok_or_else(|| NotationError::BadSquare(chars[0..2].iter().collect()))?;
        let to = Square::from_chars(chars[2], chars[3])
            .ok_or_else(|| NotationError::BadSquare(chars[2..4].iter().collect()))?;
        let promo = match chars.get(4) {
            Some(&c) => {
                Some(PieceKind::from_promotion_char(c).ok_or(NotationError::BadPromotion(c))?)
            }
            None => None,
        };
        Ok(Move {
            promo,
            ..Move::new(from, to)
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
