//! Formatting helpers shared by the view projection and the renderers.

use numfmt::{Formatter, Precision};
use time::{Date, Month};

/// numfmt switches to scientific notation outside of this range.
const GROUPED_RANGE: std::ops::Range<f64> = 1.0..1e12;

/// Format an amount with exactly two decimal places and no symbol,
/// e.g. "1480.00".
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Format an amount as currency with thousands separators, e.g. "$1,480.00".
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return format!("{symbol}0.00");
    }

    let (prefix, magnitude) = if amount < 0.0 {
        (format!("-{symbol}"), amount.abs())
    } else {
        (symbol.to_owned(), amount)
    };

    if !GROUPED_RANGE.contains(&magnitude) {
        return format!("{prefix}{magnitude:.2}");
    }

    let Ok(formatter) = Formatter::currency(&prefix) else {
        return format!("{prefix}{magnitude:.2}");
    };
    let mut formatted_string = formatter
        .precision(Precision::Decimals(2))
        .fmt_string(magnitude);

    let digits = formatted_string
        .strip_prefix(prefix.as_str())
        .unwrap_or(&formatted_string);
    if digits.contains('e') {
        return format!("{prefix}{magnitude:.2}");
    }

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.len() < 3 || formatted_string.as_bytes()[formatted_string.len() - 3] != b'.'
    {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Format a date for display, e.g. "2 Jan 2024".
pub fn format_date_label(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_abbrev(date.month()),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
