//! Argument values accepted by the message formatter

use super::formatter::number_to_string;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// One argument of a printf-style log call.
///
/// The first argument of a call is usually a `Str` pattern; the rest are
/// substituted into its placeholders or appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
}

impl FormatArg {
    /// Wrap any `Display` value as a string argument
    pub fn display(value: impl fmt::Display) -> Self {
        FormatArg::Str(value.to_string())
    }

    pub fn is_str(&self) -> bool {
        matches!(self, FormatArg::Str(_))
    }

    /// Numeric view used by `%d` and `%f`. `None` stands for NaN.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            FormatArg::Int(i) => Some(*i as f64),
            FormatArg::UInt(u) => Some(*u as f64),
            FormatArg::Float(f) if f.is_nan() => None,
            FormatArg::Float(f) => Some(*f),
            FormatArg::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FormatArg::Null => Some(0.0),
            FormatArg::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                let unsigned = trimmed
                    .strip_prefix(|c: char| c == '+' || c == '-')
                    .unwrap_or(trimmed);
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() || unsigned == "Infinity")
            }
            FormatArg::Json(value) => value.as_f64(),
        }
    }

    /// JSON text used by `%j`
    pub(crate) fn to_json(&self) -> String {
        match self {
            FormatArg::Json(value) => value.to_string(),
            FormatArg::Float(f) if !f.is_finite() => "null".to_string(),
            other => serde_json::to_string(other).unwrap_or_else(|_| other.inspect()),
        }
    }

    /// Debug-style rendering used for non-string arguments and `%o`
    pub(crate) fn inspect(&self) -> String {
        match self {
            FormatArg::Str(s) => quote_str(s),
            FormatArg::Json(value) => value.to_string(),
            other => other.to_string(),
        }
    }
}

/// Quote a string for inspection, escaping control characters.
///
/// Single quotes are preferred; double quotes or backticks are used when
/// they avoid escaping a `'` in the content.
fn quote_str(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c < ' ' || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Int(i) => write!(f, "{}", i),
            FormatArg::UInt(u) => write!(f, "{}", u),
            FormatArg::Float(fl) => f.write_str(&number_to_string(*fl)),
            FormatArg::Bool(b) => write!(f, "{}", b),
            FormatArg::Null => f.write_str("null"),
            FormatArg::Json(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        FormatArg::Str(s)
    }
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        FormatArg::Str(s.to_string())
    }
}

impl From<&String> for FormatArg {
    fn from(s: &String) -> Self {
        FormatArg::Str(s.clone())
    }
}

impl From<char> for FormatArg {
    fn from(c: char) -> Self {
        FormatArg::Str(c.to_string())
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatArg {
            fn from(i: $t) -> Self {
                FormatArg::Int(i as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatArg {
            fn from(u: $t) -> Self {
                FormatArg::UInt(u as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for FormatArg {
    fn from(f: f32) -> Self {
        FormatArg::Float(f as f64)
    }
}

impl From<f64> for FormatArg {
    fn from(f: f64) -> Self {
        FormatArg::Float(f)
    }
}

impl From<bool> for FormatArg {
    fn from(b: bool) -> Self {
        FormatArg::Bool(b)
    }
}

impl From<serde_json::Value> for FormatArg {
    fn from(value: serde_json::Value) -> Self {
        FormatArg::Json(value)
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormatArg::Null, Into::into)
    }
}

impl From<&FormatArg> for FormatArg {
    fn from(arg: &FormatArg) -> Self {
        arg.clone()
    }
}
