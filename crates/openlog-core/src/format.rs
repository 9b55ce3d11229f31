//! Line formatting helpers

use chrono::{NaiveDateTime, Timelike};

use crate::types::{format_number, Message};

/// Format a wall-clock time as `HH:MM:SS:mmm`
///
/// Hours are 24-hour and zero padded; milliseconds are not padded.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    let millis = (timestamp.nanosecond() % 1_000_000_000) / 1_000_000;
    format!("{}:{}", timestamp.format("%H:%M:%S"), millis)
}

/// Interpolate positionals into a line the way a Node host formats
/// `process.stdout` writes
///
/// Supports `%s %d %i %f %j %o %O %c %%`. Leftover positionals are
/// appended, each after a single space. Without positionals the
/// template is returned as is, `%%` included.
pub fn interpolate(template: &str, args: &[Message]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let Some(&directive) = chars.peek() else {
            out.push('%');
            break;
        };

        if directive == '%' {
            chars.next();
            out.push('%');
            continue;
        }

        if !matches!(directive, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c') {
            out.push('%');
            continue;
        }

        chars.next();
        match remaining.next() {
            Some(arg) => out.push_str(&apply_directive(directive, arg)),
            None => {
                out.push('%');
                out.push(directive);
            }
        }
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&arg.serialize());
    }

    out
}

fn apply_directive(directive: char, arg: &Message) -> String {
    match directive {
        'd' => format_number(arg.as_number().unwrap_or(f64::NAN)),
        'i' => format_number(arg.as_number().map_or(f64::NAN, f64::trunc)),
        'f' => format_number(arg.as_number().unwrap_or(f64::NAN)),
        'j' | 'o' | 'O' => to_json(arg),
        'c' => String::new(),
        _ => arg.serialize(),
    }
}

fn to_json(arg: &Message) -> String {
    match arg {
        Message::Text(text) => serde_json::Value::String(text.clone()).to_string(),
        Message::Undefined => "undefined".to_string(),
        other => other.serialize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 1)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&at(12, 34, 56, 789)), "12:34:56:789");
        assert_eq!(format_timestamp(&at(1, 2, 3, 4)), "01:02:03:4");
        assert_eq!(format_timestamp(&at(23, 0, 0, 0)), "23:00:00:0");
    }

    #[test]
    fn test_interpolate_directives() {
        let args = vec![Message::from("John"), Message::from(5)];
        assert_eq!(interpolate("hello %s, %d new", &args), "hello John, 5 new");

        let args = vec![Message::from(3.7), Message::from(3.7)];
        assert_eq!(interpolate("%i %f", &args), "3 3.7");

        let args = vec![Message::from(json!({"a": 1})), Message::from("s")];
        assert_eq!(interpolate("%j %j", &args), r#"{"a":1} "s""#);
    }

    #[test]
    fn test_interpolate_leftovers_and_escapes() {
        assert_eq!(interpolate("100%%", &[]), "100%%");
        assert_eq!(interpolate("100%% of %s", &[Message::from("cpu")]), "100% of cpu");
        assert_eq!(interpolate("%s missing", &[]), "%s missing");
        assert_eq!(interpolate("%s and %s", &[Message::from("a")]), "a and %s");
        assert_eq!(interpolate("50% off %s", &[Message::from(1)]), "50% off 1");
        assert_eq!(interpolate("trailing %", &[Message::from(1)]), "trailing % 1");

        let args = vec![Message::from("a"), Message::from(1), Message::Null];
        assert_eq!(interpolate("first %s", &args), "first a 1 null");
    }

    #[test]
    fn test_interpolate_css_and_nan() {
        let args = vec![Message::from("color: red"), Message::from("text")];
        assert_eq!(interpolate("%c%s", &args), "text");
        assert_eq!(interpolate("%d", &[Message::from("abc")]), "NaN");
    }
}
