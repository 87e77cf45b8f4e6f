//! Comma-separated value lists typed into cell fields.

use std::fmt;

/// A single entry of a parsed list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Token that parsed as a float.
    Number(f64),
    /// Token kept verbatim.
    Text(String),
}

impl Value {
    /// Get the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Check if this value is text.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Convert a comma-separated string into a list of numbers or strings.
///
/// Tokens are trimmed and empty ones dropped, so a trailing comma is
/// harmless. Each token that parses as a float becomes [`Value::Number`],
/// anything else is kept as [`Value::Text`].
pub fn parse_list(text: &str) -> Vec<Value> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(token.to_string()),
        })
        .collect()
}

/// Require every value to be numeric.
pub fn numbers(values: &[Value]) -> crate::Result<Vec<f64>> {
    values
        .iter()
        .map(|v| match v {
            Value::Number(n) => Ok(*n),
            Value::Text(s) => Err(crate::CellplotError::not_a_number(s.as_str())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_tokens_are_dropped() {
        assert!(parse_list(" , ,, ").is_empty());
    }

    #[test]
    fn mixed_tokens_keep_their_type() {
        assert_eq!(
            parse_list("1, two, 3e2"),
            vec![Value::Number(1.0), Value::from("two"), Value::Number(300.0)]
        );
    }

    #[test]
    fn numbers_rejects_first_text_token() {
        let err = numbers(&parse_list("1, x, y")).unwrap_err();
        assert_eq!(err.to_string(), "could not convert string to float: 'x'");
    }

    #[test]
    fn display_drops_trailing_zero() {
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }
}
