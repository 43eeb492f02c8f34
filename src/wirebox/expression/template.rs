// SPDX-License-Identifier: MIT

//! `$` placeholder substitution for property expressions

use crate::kit::value::Value;

pub const PLACEHOLDER: char = '$';

pub fn has_placeholder(template: &str) -> bool {
    template.contains(PLACEHOLDER)
}

/// Replace every `$` in `template` with `value`.
///
/// Outside quotes the value is rendered as a literal: strings become a
/// double-quoted literal, numbers and bools are written bare. Inside a
/// quoted literal the raw text is inserted, escaped for that quote.
pub fn substitute(template: &str, value: &Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(template.len() + raw.len());
    let mut quote: Option<char> = None;
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(_), '\\') => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            (Some(q), PLACEHOLDER) => out.push_str(&escape(&raw, q)),
            (Some(q), c) if c == q => {
                quote = None;
                out.push(c);
            }
            (None, '"' | '\'') => {
                quote = Some(c);
                out.push(c);
            }
            (None, PLACEHOLDER) => match value {
                Value::Str(s) => {
                    out.push('"');
                    out.push_str(&escape(s, '"'));
                    out.push('"');
                }
                _ => out.push_str(&raw),
            },
            _ => out.push(c),
        }
    }

    out
}

fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_rendered_bare() {
        assert_eq!(substitute("$>2&&$<4", &Value::from(3)), "3>2&&3<4");
        assert_eq!(substitute("$ == 1.5", &Value::from(1.5)), "1.5 == 1.5");
    }

    #[test]
    fn test_bool_rendered_bare() {
        assert_eq!(substitute("$ == false", &Value::from(false)), "false == false");
    }

    #[test]
    fn test_string_rendered_as_literal() {
        assert_eq!(
            substitute("$ == \"abc\"", &Value::from("abc")),
            "\"abc\" == \"abc\""
        );
    }

    #[test]
    fn test_string_inside_quotes_is_raw() {
        assert_eq!(
            substitute("\"$\"==\"this is a str\"", &Value::from("this is a str")),
            "\"this is a str\"==\"this is a str\""
        );
    }

    #[test]
    fn test_quotes_in_value_are_escaped() {
        assert_eq!(substitute("$", &Value::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(substitute("'$'", &Value::from("it's")), "'it\\'s'");
    }

    #[test]
    fn test_escaped_quote_does_not_close_literal() {
        assert_eq!(
            substitute("\"x\\\"$\" == $", &Value::from(1)),
            "\"x\\\"1\" == 1"
        );
    }

    #[test]
    fn test_has_placeholder() {
        assert!(has_placeholder("$>2"));
        assert!(!has_placeholder("plain"));
    }
}
