//! Natural and lexicographic string ordering.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]+").unwrap());

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Embedded digit runs compare as numbers: `2a` < `10a`.
    #[default]
    Natural,
    /// Plain codepoint order: `10a` < `2a`.
    Lexicographic,
}

/// Compare `a` to `b` under `mode`. `reverse` swaps the operands rather than negating the result.
pub fn compare(a: &str, b: &str, mode: SortMode, reverse: bool) -> Ordering {
    let (a, b) = if reverse { (b, a) } else { (a, b) };
    match mode {
        SortMode::Lexicographic => a.cmp(b),
        SortMode::Natural => compare_naturally(a, b),
    }
}

/// Compare the digit runs of `a` and `b` pairwise as numbers. When neither string has any
/// digits, fall back to lexicographic order. A run sequence that is a strict prefix of the
/// other sorts first.
pub fn compare_naturally(a: &str, b: &str) -> Ordering {
    let mut xs = digit_runs(a).peekable();
    let mut ys = digit_runs(b).peekable();
    if xs.peek().is_none() && ys.peek().is_none() {
        return a.cmp(b);
    }
    loop {
        match (xs.next(), ys.next()) {
            (Some(x), Some(y)) => match compare_digit_runs(x, y) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Maximal ASCII digit runs of `s`, left to right.
pub fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    DIGIT_RUNS.find_iter(s).map(|m| m.as_str())
}

/// Numeric value of every digit run in `s`. Runs too large for `u64` are skipped.
pub fn strip_numbers(s: &str) -> Vec<u64> {
    digit_runs(s).filter_map(|run| run.parse().ok()).collect()
}

/// Numeric comparison of two digit strings of any length.
fn compare_digit_runs(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_numbers_reads_left_to_right() {
        assert_eq!(strip_numbers("ab11cdd2k.144"), vec![11, 2, 144]);
        assert_eq!(strip_numbers("847.1._42_.31-knot"), vec![847, 1, 42, 31]);
        assert!(strip_numbers("Ignacio Vazquez-Abrams").is_empty());
    }

    #[test]
    fn natural_orders_numbers_by_value() {
        assert_eq!(compare("2a", "10a", SortMode::Natural, false), Ordering::Less);
        assert_eq!(compare("10a", "2a", SortMode::Natural, false), Ordering::Greater);
        assert_eq!(compare("ch9", "ch10", SortMode::Natural, false), Ordering::Less);
    }

    #[test]
    fn lexicographic_orders_by_codepoint() {
        assert_eq!(
            compare("10a", "2a", SortMode::Lexicographic, false),
            Ordering::Less
        );
        assert_eq!(
            compare("a", "aa", SortMode::Lexicographic, false),
            Ordering::Less
        );
    }

    #[test]
    fn empty_strings_are_equal() {
        assert_eq!(compare("", "", SortMode::Natural, false), Ordering::Equal);
        assert_eq!(
            compare("", "", SortMode::Lexicographic, true),
            Ordering::Equal
        );
    }

    #[test]
    fn no_digits_falls_back_to_lexicographic() {
        assert_eq!(
            compare("alfa", "bravo", SortMode::Natural, false),
            Ordering::Less
        );
        assert_eq!(
            compare("bravo", "alfa", SortMode::Natural, false),
            Ordering::Greater
        );
    }

    #[test]
    fn digits_on_one_side_only_still_compares_numerically() {
        // The digitless side has an empty run sequence, which is a prefix of any other.
        assert_eq!(compare("zulu", "alfa1", SortMode::Natural, false), Ordering::Less);
        assert_eq!(compare("alfa1", "zulu", SortMode::Natural, false), Ordering::Greater);
    }

    #[test]
    fn shorter_run_sequence_sorts_first() {
        assert_eq!(compare("1-2", "1-2-3", SortMode::Natural, false), Ordering::Less);
        assert_eq!(compare("x1y2", "a1", SortMode::Natural, false), Ordering::Greater);
    }

    #[test]
    fn equal_runs_compare_equal() {
        assert_eq!(
            compare("01 - intro", "1 - outro", SortMode::Natural, false),
            Ordering::Equal
        );
    }

    #[test]
    fn reverse_swaps_operands() {
        assert_eq!(compare("2a", "10a", SortMode::Natural, true), Ordering::Greater);
        assert_eq!(
            compare("10a", "2a", SortMode::Lexicographic, true),
            Ordering::Greater
        );
    }

    #[test]
    fn huge_runs_do_not_overflow() {
        let big = "track99999999999999999999999";
        let bigger = "track100000000000000000000000";
        assert_eq!(compare(big, bigger, SortMode::Natural, false), Ordering::Less);
        assert_eq!(compare("007", "7", SortMode::Natural, false), Ordering::Equal);
    }

    #[test]
    fn natural_sort_is_stable_over_slices() {
        let mut names = vec!["10 ten", "2 two", "1 one", "alfa", "20 twenty"];
        names.sort_by(|a, b| compare(a, b, SortMode::Natural, false));
        assert_eq!(names, vec!["alfa", "1 one", "2 two", "10 ten", "20 twenty"]);
    }
}
