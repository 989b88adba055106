//! Typed cell values and their display formatting.
//!
//! Columns produce a [`CellValue`] per row through their accessor; the
//! table sorts on the typed value and formats it for display. `Label`
//! cells carry pre-built markup and render raw, unescaped; everything
//! else goes through its typed formatter.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Contents of one table cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Nothing to show; sorts before every other value
    Empty,
    /// Plain text
    Text(String),
    /// Monetary amount, formatted with grouping and two decimals
    Currency(Decimal),
    /// Timestamp, formatted as a calendar date
    Date(DateTime<Utc>),
    /// Pre-built markup rendered raw (badges, status pills)
    Label(String),
}

impl CellValue {
    /// Display text for the cell. `Label` returns its markup unchanged;
    /// the caller decides to render it unescaped.
    pub fn render(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Currency(amount) => format_currency(amount),
            CellValue::Date(ts) => format_date(ts),
            CellValue::Label(markup) => markup.clone(),
        }
    }

    /// Whether this cell renders raw markup
    pub fn is_label(&self) -> bool {
        matches!(self, CellValue::Label(_))
    }

    /// Strict ordering over cell values.
    ///
    /// Like-typed values compare naturally; text and label cells compare
    /// as strings. Mixed types fall back to a fixed variant rank so the
    /// ordering stays total.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Currency(a), Currency(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (a, b) => match (a.as_text(), b.as_text()) {
                (Some(a), Some(b)) => a.cmp(b),
                _ => a.rank().cmp(&b.rank()),
            },
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) | CellValue::Label(text) => Some(text),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Currency(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) | CellValue::Label(_) => 3,
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

/// Formats a monetary amount: sign, dollar mark, thousands grouping,
/// always two decimals.
pub fn format_currency(amount: &Decimal) -> String {
    let raw = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{frac_part}")
}

/// Formats a timestamp as a calendar date, e.g. "Mar 01, 2026".
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(&dec!(0)), "$0.00");
        assert_eq!(format_currency(&dec!(999.9)), "$999.90");
        assert_eq!(format_currency(&dec!(1234.5)), "$1,234.50");
        assert_eq!(format_currency(&dec!(1234567.89)), "$1,234,567.89");
        assert_eq!(format_currency(&dec!(-45000)), "-$45,000.00");
    }

    #[test]
    fn date_renders_calendar_form() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 01, 2026");
    }

    #[test]
    fn render_dispatches_by_type() {
        assert_eq!(CellValue::Text("abc".into()).render(), "abc");
        assert_eq!(CellValue::Currency(dec!(10)).render(), "$10.00");
        assert_eq!(CellValue::Empty.render(), "");
        let label = CellValue::Label("<span class=\"pill\">ok</span>".into());
        assert!(label.is_label());
        assert_eq!(label.render(), "<span class=\"pill\">ok</span>");
    }

    #[test]
    fn like_typed_values_compare_naturally() {
        assert_eq!(
            CellValue::Currency(dec!(5)).compare(&CellValue::Currency(dec!(50))),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Text("b".into()).compare(&CellValue::Text("a".into())),
            Ordering::Greater
        );
        // Text and label cells compare as strings.
        assert_eq!(
            CellValue::Text("same".into()).compare(&CellValue::Label("same".into())),
            Ordering::Equal
        );
    }

    #[test]
    fn empty_sorts_first() {
        assert_eq!(
            CellValue::Empty.compare(&CellValue::Text("a".into())),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Currency(dec!(1)).compare(&CellValue::Empty),
            Ordering::Greater
        );
    }
}
