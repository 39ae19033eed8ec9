//! Mapping from a random draw to spoken text.

use std::fmt;

/// Spoken when a draw falls outside the two faces. Unreachable with a
/// correctly bounded source; keeps the mapping total.
pub const ERROR_SPEECH: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinFace {
    Tails = 0,
    Heads = 1,
}

impl CoinFace {
    /// Number of faces; the exclusive upper bound of a draw.
    pub const COUNT: u32 = 2;

    pub fn from_draw(draw: u32) -> Option<CoinFace> {
        match draw {
            0 => Some(CoinFace::Tails),
            1 => Some(CoinFace::Heads),
            _ => None,
        }
    }

    pub fn speech(self) -> &'static str {
        match self {
            CoinFace::Tails => "Tails",
            CoinFace::Heads => "Heads",
        }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.speech())
    }
}

pub fn speech_for_draw(draw: u32) -> &'static str {
    CoinFace::from_draw(draw).map(CoinFace::speech).unwrap_or(ERROR_SPEECH)
}
