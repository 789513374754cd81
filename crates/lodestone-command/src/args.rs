//! Positional command arguments and the dispatcher's numeric coercion.

use std::fmt;

/// One positional argument after tokenization.
///
/// Numeric coercion is the only type inference the dispatcher performs:
/// a token that fully parses as a number arrives as [`Int`] or [`Float`],
/// everything else stays [`Text`]. There is no quoting or escaping, so a
/// token never contains a space.
///
/// [`Int`]: CommandArg::Int
/// [`Float`]: CommandArg::Float
/// [`Text`]: CommandArg::Text
#[derive(Debug, Clone, PartialEq)]
pub enum CommandArg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CommandArg {
    /// Coerces a raw token. Integers win over floats; non-finite float
    /// spellings (`NaN`, `inf`) stay textual.
    pub fn coerce(token: &str) -> Self {
        if let Ok(value) = token.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = token.parse::<f64>() {
            if value.is_finite() {
                return Self::Float(value);
            }
        }
        Self::Text(token.to_string())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view of the argument, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}
