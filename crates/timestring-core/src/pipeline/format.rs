//! Datetime column formatting.

use jiff::{fmt::strtime, tz::Offset};

use crate::{
    error::FormatError,
    models::{CellValue, Frame},
};

/// Conversions passed to jiff unchanged, flags and width included.
const PASSTHROUGH: &str = "aAbBCdDeFgGhHIjklmMnpPRsStTuUVwWyY";
/// Flags accepted between `%` and the conversion character.
const FLAGS: &str = "-_0^#";

/// Formats one value with a strftime-style pattern.
///
/// Only datetime values can be formatted; anything else, null included, is
/// an error. See [`strftime_pattern`] for the accepted directives.
pub fn format_value(value: &CellValue, pattern: &str) -> Result<String, String> {
    match value {
        CellValue::DateTime(datetime) => {
            let pattern = strftime_pattern(pattern, datetime.subsec_nanosecond(), None)?;
            strtime::format(pattern, *datetime).map_err(|e| e.to_string())
        }
        CellValue::Zoned(zoned) => {
            let pattern =
                strftime_pattern(pattern, zoned.subsec_nanosecond(), Some(zoned.offset()))?;
            strtime::format(pattern, zoned).map_err(|e| e.to_string())
        }
        other => Err(format!("expected a datetime, found a {} value", other.kind())),
    }
}

/// Rewrites a C strftime pattern into the jiff dialect for one value.
///
/// Directives follow C strftime in the C locale:
///
/// - `%f` is microseconds, always six digits
/// - `%c` is `%a %b %e %H:%M:%S %Y`, `%x` is `%m/%d/%y`, `%X` is `%H:%M:%S`
///   and `%r` is `%I:%M:%S %p`
/// - `%z`, `%:z` and `%Z` are empty for values without an offset; `%Z` is
///   `UTC` or `UTC±HH:MM` otherwise
///
/// Directives outside C strftime, such as jiff's `%Q`, `%N` or `%::z`, and a
/// trailing `%` are rejected.
fn strftime_pattern(pattern: &str, subsec_nanos: i32, offset: Option<Offset>) -> Result<String, String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = String::from("%");
        while let Some(flag) = chars.next_if(|c| FLAGS.contains(*c)) {
            directive.push(flag);
        }
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            directive.push(digit);
        }
        let mut colons = 0;
        while chars.next_if_eq(&':').is_some() {
            colons += 1;
        }
        let Some(conversion) = chars.next() else {
            return Err(format!("incomplete directive '{directive}' at end of pattern"));
        };

        match (conversion, colons) {
            ('%', 0) => out.push_str("%%"),
            ('f', 0) => out.push_str(&format!("{:06}", subsec_nanos / 1000)),
            ('c', 0) => out.push_str("%a %b %e %H:%M:%S %Y"),
            ('x', 0) => out.push_str("%m/%d/%y"),
            ('X', 0) => out.push_str("%H:%M:%S"),
            ('r', 0) => out.push_str("%I:%M:%S %p"),
            ('z', 0 | 1) => {
                if offset.is_some() {
                    out.push_str(&directive);
                    out.push_str(&":".repeat(colons));
                    out.push('z');
                }
            }
            ('Z', 0) => {
                if let Some(offset) = offset {
                    out.push_str(&offset_name(offset));
                }
            }
            (conversion, 0) if PASSTHROUGH.contains(conversion) => {
                out.push_str(&directive);
                out.push(conversion);
            }
            (conversion, colons) => {
                return Err(format!(
                    "unsupported directive '{directive}{}{conversion}'",
                    ":".repeat(colons)
                ));
            }
        }
    }
    Ok(out)
}

/// Name of a fixed offset as C strftime prints it for `%Z`.
fn offset_name(offset: Offset) -> String {
    let seconds = offset.seconds();
    if seconds == 0 {
        return "UTC".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let (hours, minutes, rest) = (seconds / 3600, seconds / 60 % 60, seconds % 60);
    if rest == 0 {
        format!("UTC{sign}{hours:02}:{minutes:02}")
    } else {
        format!("UTC{sign}{hours:02}:{minutes:02}:{rest:02}")
    }
}

/// Replaces `output_col` with `input_col` formatted by `pattern`.
///
/// `input_col` is removed from the frame whether or not formatting succeeds.
/// Formatting is all or nothing: if any row fails, `output_col` is left as it
/// was and the first failure is returned. Returns the number of rows
/// formatted.
pub fn format_column(
    frame: &mut Frame,
    input_col: &str,
    output_col: &str,
    pattern: &str,
) -> Result<usize, FormatError> {
    let input = frame
        .remove_column(input_col)
        .ok_or_else(|| FormatError::column(format!("input column '{input_col}' is missing")))?;

    let formatted = frame
        .index()
        .iter()
        .zip(&input.values)
        .map(|(key, value)| {
            format_value(value, pattern)
                .map(CellValue::Text)
                .map_err(|reason| FormatError::at_row(*key, reason))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rows = formatted.len();
    frame
        .insert_column(output_col, formatted)
        .map_err(|e| FormatError::column(e.to_string()))?;
    Ok(rows)
}
