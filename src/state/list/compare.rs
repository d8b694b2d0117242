//! Column values and the comparator used for list sorting

use super::normalize::normalize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// A sortable/searchable column value
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(Cow<'a, str>),
    /// Numbers, and dates as epoch milliseconds
    Number(f64),
}

impl<'a> SortValue<'a> {
    pub fn text(value: &'a str) -> Self {
        SortValue::Text(Cow::Borrowed(value))
    }

    pub fn date(value: chrono::DateTime<chrono::Utc>) -> Self {
        SortValue::Number(value.timestamp_millis() as f64)
    }

    /// Text used when matching a search term
    pub fn as_search_text(&self) -> Cow<'_, str> {
        match self {
            SortValue::Text(s) => Cow::Borrowed(s.as_ref()),
            SortValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

/// Compare two column values. Numbers sort before text.
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => natural_cmp(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}

/// Case- and accent-insensitive comparison where digit runs compare by value,
/// so "item2" < "item10". Strings equal at that strength fall back to a
/// plain comparison to keep the order total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (na, nb) = (normalize(a), normalize(b));
    compare_chunks(&mut na.chars().peekable(), &mut nb.chars().peekable()).then_with(|| a.cmp(b))
}

fn compare_chunks(a: &mut Peekable<Chars<'_>>, b: &mut Peekable<Chars<'_>>) -> Ordering {
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let run_a = take_digits(a);
                let run_b = take_digits(b);
                let ord = compare_digit_runs(&run_a, &run_b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = ca.cmp(&cb);
                if ord != Ordering::Equal {
                    return ord;
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_aware() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("item10", "item2"), Ordering::Greater);
        assert_eq!(natural_cmp("lote 007", "lote 8"), Ordering::Less);
    }

    #[test]
    fn test_case_and_accent_insensitive_at_primary_strength() {
        assert_eq!(natural_cmp("abacaxi", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Água", "azul"), Ordering::Less);
        // Equal at primary strength still yields a deterministic order
        assert_ne!(natural_cmp("Sao", "São"), Ordering::Equal);
        assert_eq!(natural_cmp("Sao", "Sao"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("Nelore", "Nelore PO"), Ordering::Less);
    }

    #[test]
    fn test_compare_values_mixed() {
        assert_eq!(
            compare_values(&SortValue::Number(3.0), &SortValue::Number(12.5)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&SortValue::Number(1.0), &SortValue::text("a")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&SortValue::text("b"), &SortValue::text("a")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_date_becomes_epoch_millis() {
        let date = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(SortValue::date(date), SortValue::Number(1_700_000_000_000.0));
        assert_eq!(SortValue::Number(42.0).as_search_text(), "42");
    }
}
