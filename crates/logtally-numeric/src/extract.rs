use std::sync::LazyLock;

use regex::{Matches, Regex};

/// A number with whitespace on both sides.
///
/// The surrounding whitespace is part of the match, so a number at the very
/// start or end of the text, one touching punctuation, or one that shares its
/// single separating space with the previous match is not found.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-?\d*\.?\d*\s").expect("number pattern is valid"));

/// A single Unicode decimal digit, the class `\d` matches above
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Restartable scan of the numbers in a piece of text
#[derive(Clone, Copy, Debug)]
pub struct NumberScanner<'t> {
    text: &'t str,
}

impl<'t> NumberScanner<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Start a fresh scan from the beginning of the text
    pub fn iter(&self) -> Numbers<'t> {
        Numbers {
            matches: NUMBER_PATTERN.find_iter(self.text),
        }
    }
}

impl<'t> IntoIterator for &NumberScanner<'t> {
    type Item = f64;
    type IntoIter = Numbers<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the numbers found by a [`NumberScanner`]
#[derive(Debug)]
pub struct Numbers<'t> {
    matches: Matches<'static, 't>,
}

impl Iterator for Numbers<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.matches.by_ref().find_map(|m| parse_number(m.as_str()))
    }
}

/// Matches without a digit (a bare `-`, `.`, or two adjacent spaces) are skipped
fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw
        .trim()
        .chars()
        .map(to_ascii_digit)
        .collect::<Option<String>>()?;
    if !normalized.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    normalized.parse().ok()
}

/// Map any Unicode decimal digit (`١`, `５`, `𝟕`) to its ASCII form
fn to_ascii_digit(c: char) -> Option<char> {
    if c.is_ascii() {
        return Some(c);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    // Decimal digits come in runs of whole 0..=9 blocks; the run start is a zero
    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        zero -= 1;
    }
    char::from_digit((c as u32 - zero) % 10, 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Lazily yield every number in `text`
pub fn generator_numbers(text: &str) -> Numbers<'_> {
    NumberScanner::new(text).iter()
}

/// Sum every number `extract` finds in `text`
pub fn sum_profit<'t, F, I>(text: &'t str, extract: F) -> f64
where
    F: FnOnce(&'t str) -> I,
    I: IntoIterator<Item = f64>,
{
    extract(text).into_iter().fold(0.0, |total, n| total + n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INCOME: &str = "The total income of the employee consists of several parts: \
                          1000.01 as the main income, supplemented by additional \
                          receipts 27.45 and 324.00 dollars.";

    fn collect(text: &str) -> Vec<f64> {
        generator_numbers(text).collect()
    }

    #[test]
    fn test_sum_profit_over_income_text() {
        let total = sum_profit(INCOME, generator_numbers);
        assert!((total - 1351.46).abs() < 1e-9, "got {total}");
    }

    #[test]
    fn test_numbers_in_order() {
        assert_eq!(collect(INCOME), vec![1000.01, 27.45, 324.00]);
    }

    #[rstest]
    #[case("paid -12.5 back", vec![-12.5])]
    #[case("got .5 of it", vec![0.5])]
    #[case("about 7. units", vec![7.0])]
    #[case("total 42 coins", vec![42.0])]
    fn test_number_shapes(#[case] text: &str, #[case] expected: Vec<f64>) {
        assert_eq!(collect(text), expected);
    }

    #[rstest]
    #[case("12 at the start")]
    #[case("at the end 12")]
    #[case("price (12) in brackets")]
    #[case("price 12, with comma")]
    fn test_numbers_need_whitespace_on_both_sides(#[case] text: &str) {
        assert!(collect(text).is_empty());
    }

    #[test]
    fn test_shared_separator_drops_the_second_number() {
        // " 1 " consumes the space before "2"
        assert_eq!(collect("a 1 2 b"), vec![1.0]);
        assert_eq!(collect("a 1  2 b"), vec![1.0, 2.0]);
    }

    #[rstest]
    #[case("a \u{0661}\u{0662} b", vec![12.0])]
    #[case("pay \u{FF11}\u{FF15}.5 now", vec![15.5])]
    #[case("bold \u{1D7D5} digit", vec![7.0])]
    #[case("mixed -\u{0966}.2\u{0969} rupees", vec![-0.23])]
    fn test_unicode_decimal_digits(#[case] text: &str, #[case] expected: Vec<f64>) {
        assert_eq!(collect(text), expected);
    }

    #[rstest]
    #[case("two  spaces")]
    #[case("a - b")]
    #[case("a . b")]
    fn test_digitless_matches_are_skipped(#[case] text: &str) {
        assert!(collect(text).is_empty());
    }

    #[test]
    fn test_scanner_is_restartable() {
        let scanner = NumberScanner::new(INCOME);
        let first: Vec<f64> = scanner.iter().collect();
        let second: Vec<f64> = (&scanner).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        assert_eq!(sum_profit("no numbers here", generator_numbers), 0.0);
        assert_eq!(sum_profit("", |_| Vec::new()), 0.0);
    }

    #[test]
    fn test_sum_profit_accepts_any_extractor() {
        let total = sum_profit("x 1 y 2 z", |text| generator_numbers(text).map(|n| n * 2.0));
        assert_eq!(total, 6.0);
    }
}
