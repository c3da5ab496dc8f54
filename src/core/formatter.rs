//! Message formatting
//!
//! Turns the arguments of a log call into one string using printf-style
//! placeholders, then replaces embedded line breaks so a multi-line message
//! still forms a single record.
//!
//! Supported placeholders:
//!
//! | Pattern | Output |
//! |---------|--------|
//! | `%s` | string form of the argument |
//! | `%d` | number (`NaN` when the argument is not numeric) |
//! | `%i` | integer part of the number |
//! | `%f` | longest numeric prefix as a float |
//! | `%j` | JSON text |
//! | `%o`, `%O` | inspected value (strings quoted and escaped) |
//! | `%c` | consumes an argument, prints nothing |
//! | `%%` | a single `%` |
//!
//! A placeholder without a remaining argument is kept verbatim. Arguments left
//! over after the pattern is exhausted are appended, separated by spaces.

use super::format_arg::FormatArg;

/// Replacement inserted where a message contained a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// Newline followed by a tab, so continuation lines are indented
    #[default]
    Indented,
    /// Two backslashes and a tab, keeping a syslog record on one line
    Escaped,
}

impl LineBreak {
    pub fn replacement(&self) -> &'static str {
        match self {
            LineBreak::Indented => "\n\t",
            LineBreak::Escaped => "\\\\\t",
        }
    }
}

/// Interpolate `args` without touching line breaks
pub fn format_args(args: &[FormatArg]) -> String {
    let Some(first) = args.first() else {
        return String::new();
    };

    let pattern = match first {
        FormatArg::Str(s) => s,
        _ => {
            return args
                .iter()
                .map(FormatArg::inspect)
                .collect::<Vec<_>>()
                .join(" ");
        }
    };

    if args.len() == 1 {
        return pattern.clone();
    }

    let mut out = String::with_capacity(pattern.len() + 16 * args.len());
    let mut next = 1;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(conv) if next < args.len() && is_placeholder(conv) => {
                chars.next();
                render_placeholder(&mut out, conv, &args[next]);
                next += 1;
            }
            _ => out.push('%'),
        }
    }

    for arg in &args[next..] {
        out.push(' ');
        match arg {
            FormatArg::Str(s) => out.push_str(s),
            other => out.push_str(&other.inspect()),
        }
    }

    out
}

/// Interpolate `args` and replace every `\n` or `\r\n` with `line_break`
pub fn format_message(args: &[FormatArg], line_break: LineBreak) -> String {
    replace_line_breaks(&format_args(args), line_break.replacement())
}

pub fn replace_line_breaks(message: &str, replacement: &str) -> String {
    if !message.contains('\n') {
        return message.to_string();
    }

    let mut out = String::with_capacity(message.len() + 8);
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str(replacement);
            }
            '\n' => out.push_str(replacement),
            other => out.push(other),
        }
    }
    out
}

fn is_placeholder(c: char) -> bool {
    matches!(c, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c')
}

fn render_placeholder(out: &mut String, conv: char, arg: &FormatArg) {
    match conv {
        's' => out.push_str(&arg.to_string()),
        'd' => match arg {
            FormatArg::Int(i) => out.push_str(&i.to_string()),
            FormatArg::UInt(u) => out.push_str(&u.to_string()),
            other => out.push_str(&number_or_nan(other.as_number())),
        },
        'i' => out.push_str(&integer_part(arg)),
        'f' => out.push_str(&number_or_nan(float_part(arg))),
        'j' => out.push_str(&arg.to_json()),
        'o' | 'O' => out.push_str(&arg.inspect()),
        // %c carries CSS in browsers; it has no textual output
        _ => {}
    }
}

/// Number text with `NaN` and `Infinity` spelled out
pub(crate) fn number_to_string(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        f.to_string()
    }
}

fn number_or_nan(n: Option<f64>) -> String {
    n.map_or_else(|| "NaN".to_string(), number_to_string)
}

fn integer_part(arg: &FormatArg) -> String {
    match arg {
        FormatArg::Int(i) => i.to_string(),
        FormatArg::UInt(u) => u.to_string(),
        FormatArg::Float(f) if f.is_finite() => number_to_string(f.trunc()),
        FormatArg::Str(s) => leading_integer(s).unwrap_or_else(|| "NaN".to_string()),
        _ => "NaN".to_string(),
    }
}

/// Leading `[+-]digits` of a string, ignoring leading whitespace
fn leading_integer(s: &str) -> Option<String> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value = format!("{}{}", sign, digits.trim_start_matches('0'));
    if value.is_empty() || value == "-" {
        Some("0".to_string())
    } else {
        Some(value)
    }
}

fn float_part(arg: &FormatArg) -> Option<f64> {
    match arg {
        FormatArg::Str(s) => leading_float(s),
        FormatArg::Int(_) | FormatArg::UInt(_) | FormatArg::Float(_) => arg.as_number(),
        _ => None,
    }
}

/// Longest numeric prefix of a string, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with at most one dot, an optional
/// exponent, or a leading `Infinity`.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = s.as_bytes();
    let mut end = s.len() - unsigned.len();
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    // exponent only counts when digits follow it
    if let Some(b'e' | b'E') = bytes.get(end) {
        let mut exp = end + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp + digits;
        }
    }
    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(values: Vec<FormatArg>) -> Vec<FormatArg> {
        values
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(format_args(&[]), "");
        assert_eq!(format_args(&[FormatArg::from("plain %s 100%")]), "plain %s 100%");
        assert_eq!(format_args(&[FormatArg::from(42)]), "42");
    }

    #[test]
    fn test_placeholders() {
        let a = args(vec!["port=%d".into(), 8080.into()]);
        assert_eq!(format_args(&a), "port=8080");

        let a = args(vec!["%s is %s".into(), "x".into(), true.into()]);
        assert_eq!(format_args(&a), "x is true");

        let a = args(vec!["%j".into(), json!({"a": [1, 2]}).into()]);
        assert_eq!(format_args(&a), "{\"a\":[1,2]}");

        let a = args(vec!["%i/%f".into(), "42.9px".into(), "3.5kg".into()]);
        assert_eq!(format_args(&a), "42/3.5");

        let a = args(vec!["%o".into(), "quoted".into()]);
        assert_eq!(format_args(&a), "'quoted'");

        let a = args(vec!["a%cb".into(), "color: red".into()]);
        assert_eq!(format_args(&a), "ab");
    }

    #[test]
    fn test_not_a_number() {
        let a = args(vec!["%d".into(), "abc".into()]);
        assert_eq!(format_args(&a), "NaN");

        let a = args(vec!["%d".into(), f64::INFINITY.into()]);
        assert_eq!(format_args(&a), "Infinity");
    }

    #[test]
    fn test_percent_escape() {
        let a = args(vec!["100%% of %s".into(), "jobs".into()]);
        assert_eq!(format_args(&a), "100% of jobs");

        let a = args(vec!["%z %s".into(), "kept".into()]);
        assert_eq!(format_args(&a), "%z kept");
    }

    #[test]
    fn test_missing_and_extra_args() {
        let a = args(vec!["%s and %s".into(), "one".into()]);
        assert_eq!(format_args(&a), "one and %s");

        let a = args(vec!["count".into(), 3.into(), "items".into(), FormatArg::Null]);
        assert_eq!(format_args(&a), "count 3 items null");
    }

    #[test]
    fn test_non_string_first_argument() {
        let a = args(vec![1.into(), "two".into(), false.into()]);
        assert_eq!(format_args(&a), "1 'two' false");
    }

    #[test]
    fn test_line_breaks() {
        let a = args(vec!["hello\nworld\r\nagain".into()]);
        assert_eq!(format_message(&a, LineBreak::Indented), "hello\n\tworld\n\tagain");
        assert_eq!(
            format_message(&a, LineBreak::Escaped),
            "hello\\\\\tworld\\\\\tagain"
        );
    }

    #[test]
    fn test_lone_carriage_return_kept() {
        assert_eq!(replace_line_breaks("a\rb", "|"), "a\rb");
        assert_eq!(replace_line_breaks("a\r\r\nb", "|"), "a\r|b");
    }

    #[test]
    fn test_float_placeholder_prefixes() {
        let a = args(vec!["%f".into(), "2.5e3".into()]);
        assert_eq!(format_args(&a), "2500");

        let a = args(vec!["%f".into(), "-Infinity".into()]);
        assert_eq!(format_args(&a), "-Infinity");

        let a = args(vec!["%f|%f".into(), "1e".into(), "7E-2ms".into()]);
        assert_eq!(format_args(&a), "1|0.07");

        assert_eq!(leading_float("  +.5x"), Some(0.5));
        assert_eq!(leading_float("e5"), None);
        assert_eq!(leading_float("-"), None);
    }

    #[test]
    fn test_non_finite_numbers() {
        let a = args(vec!["x".into(), f64::INFINITY.into()]);
        assert_eq!(format_args(&a), "x Infinity");

        let a = args(vec!["%o %O".into(), f64::NEG_INFINITY.into(), f64::NAN.into()]);
        assert_eq!(format_args(&a), "-Infinity NaN");

        assert_eq!(format_args(&[FormatArg::from(f64::NEG_INFINITY)]), "-Infinity");
        assert_eq!(
            format_args(&[FormatArg::from(f64::INFINITY), FormatArg::from(1.5)]),
            "Infinity 1.5"
        );
    }

    #[test]
    fn test_inspected_strings_are_escaped() {
        let a = args(vec!["%o".into(), "a\nb".into()]);
        assert_eq!(format_message(&a, LineBreak::Indented), "'a\\nb'");

        let a = args(vec![1.into(), "it's\tfine".into()]);
        assert_eq!(format_message(&a, LineBreak::Escaped), "1 \"it's\\tfine\"");
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("  -0012abc").as_deref(), Some("-12"));
        assert_eq!(leading_integer("000").as_deref(), Some("0"));
        assert_eq!(leading_integer("x1"), None);
    }
}
