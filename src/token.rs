//! Classification of coord template arguments.
//! Each `|`-delimited argument is classified once by its textual shape.

use log::trace;

/// A single-letter hemisphere marker fixing the sign of a coordinate group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses `N`, `S`, `E` or `W` in either case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "N" | "n" => Some(Self::North),
            "S" | "s" => Some(Self::South),
            "E" | "e" => Some(Self::East),
            "W" | "w" => Some(Self::West),
            _ => None,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// One trimmed template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// Zero-length after trimming; reads as 0.
    Empty,
    Hemisphere(Hemisphere),
    /// `key=value` or `key:value` display/region/scale options.
    Named,
    Text(String),
}

impl Token {
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.contains(['=', ':']) {
            Token::Named
        } else if raw.is_empty() {
            Token::Empty
        } else if let Some(hemisphere) = Hemisphere::from_token(raw) {
            Token::Hemisphere(hemisphere)
        } else if let Ok(value) = raw.parse::<f64>() {
            Token::Number(value)
        } else {
            Token::Text(raw.to_string())
        }
    }

    /// Numeric value of a coordinate field, `None` when the token is not one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Empty => Some(0.0),
            _ => None,
        }
    }
}

/// Splits a template body on `|` and classifies each argument, dropping
/// named parameters wherever they appear.
pub fn tokenize(body: &str) -> Vec<Token> {
    body.split('|')
        .map(Token::classify)
        .filter(|token| *token != Token::Named)
        .inspect(|token| trace!("Token: {:?}", token))
        .collect()
}
