// src/collate.rs
// Numeric-aware comparison for display codes and Persian labels: digit runs
// compare by value (so "2" sorts before "10"), text runs compare after
// unifying the Arabic/Persian Yeh and Kaf codepoint split.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::codes::fold_digits;

// The two letters whose Arabic forms (ي, ك) show up in server data mixed
// with their Persian forms (ی, ک), plus Alef Maqsura which keyboards emit
// for final Yeh.
static LETTER_FOLD: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([('ي', 'ی'), ('ى', 'ی'), ('ك', 'ک')])
});

fn fold_letter(c: char) -> char {
    LETTER_FOLD.get(&c).copied().unwrap_or(c)
}

#[derive(Debug, PartialEq, Eq)]
enum Chunk {
    // leading zeros already stripped; "0" when the run was all zeros
    Number(String),
    Text(String),
}

fn chunks(input: &str) -> Vec<Chunk> {
    let folded = fold_digits(input);
    let mut out = Vec::new();
    let mut text = String::new();
    let mut iter = folded.chars().peekable();
    while let Some(&c) = iter.peek() {
        if c.is_ascii_digit() {
            if !text.is_empty() {
                out.push(Chunk::Text(std::mem::take(&mut text)));
            }
            let mut run = String::new();
            while let Some(&d) = iter.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                run.push(d);
                iter.next();
            }
            let stripped = run.trim_start_matches('0');
            out.push(Chunk::Number(if stripped.is_empty() {
                "0".to_string()
            } else {
                stripped.to_string()
            }));
        } else {
            text.push(fold_letter(c));
            iter.next();
        }
    }
    if !text.is_empty() {
        out.push(Chunk::Text(text));
    }
    out
}

// Magnitude order without parsing: values carry no leading zeros, so a
// longer run is a bigger number.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Total order over code/label strings. Equal logical values that differ
/// only in zero-padding or digit script fall back to plain string order so
/// the result stays deterministic.
pub fn compare(a: &str, b: &str) -> Ordering {
    let ca = chunks(a);
    let cb = chunks(b);
    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Number(na), Chunk::Number(nb)) => compare_numbers(na, nb),
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
            (Chunk::Text(ta), Chunk::Text(tb)) => ta.cmp(tb),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_compare_by_value() {
        assert_eq!(compare("2", "10"), Ordering::Less);
        assert_eq!(compare("10", "2"), Ordering::Greater);
        assert_eq!(compare("OB-2", "OB-10"), Ordering::Less);
        assert_eq!(compare("1.2", "1.10"), Ordering::Less);
    }

    #[test]
    fn persian_digits_participate_numerically() {
        assert_eq!(compare("۲", "۱۰"), Ordering::Less);
        assert_eq!(compare("۱۰", "2"), Ordering::Greater);
    }

    #[test]
    fn zero_padding_does_not_flip_order() {
        assert_eq!(compare("02", "10"), Ordering::Less);
        assert_eq!(compare("010", "9"), Ordering::Greater);
    }

    #[test]
    fn arabic_letter_variants_collate_together() {
        // same word spelled with Arabic vs Persian Yeh / Kaf
        assert_eq!(chunks("علي"), chunks("علی"));
        assert_eq!(chunks("كتاب"), chunks("کتاب"));
        // folded-equal strings still order deterministically
        assert_ne!(compare("علي", "علی"), Ordering::Equal);
    }

    #[test]
    fn total_order_is_deterministic_on_padding_ties() {
        assert_ne!(compare("01", "1"), Ordering::Equal);
        assert_eq!(compare("01", "01"), Ordering::Equal);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(compare("1", "1.1"), Ordering::Less);
        assert_eq!(compare("1.1", "1"), Ordering::Greater);
    }
}
