// src/codes.rs
// Code canonicalization: digit folding, prefix handling, flat and
// hierarchical comparable forms. Malformed input degrades to best-effort
// string cleanup; nothing here returns an error.

use crate::types::{CanonicalMode, CodeScheme};

// --- Digit folding ---

/// Maps Persian (۰–۹) and Arabic-Indic (٠–٩) digits to Western 0–9.
/// Everything else passes through untouched.
pub(crate) fn fold_digit(c: char) -> char {
    match c {
        '۰'..='۹' => (b'0' + (c as u32 - '۰' as u32) as u8) as char,
        '٠'..='٩' => (b'0' + (c as u32 - '٠' as u32) as u8) as char,
        _ => c,
    }
}

pub fn fold_digits(raw: &str) -> String {
    raw.chars().map(fold_digit).collect()
}

// --- Prefix stripping ---

// Matches the known prefix case-insensitively, then a single "-" or ".",
// then trims whatever leading separators remain.
fn strip_code_prefix<'a>(code: &'a str, prefix: Option<&str>) -> &'a str {
    let prefix = match prefix {
        Some(p) if !p.is_empty() => p,
        _ => return code,
    };
    let head = match code.get(..prefix.len()) {
        Some(head) => head,
        None => return code,
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return code;
    }
    let mut rest = &code[prefix.len()..];
    if let Some(stripped) = rest.strip_prefix('-').or_else(|| rest.strip_prefix('.')) {
        rest = stripped;
    }
    rest.trim_start_matches(|c: char| c == '-' || c == '.' || c.is_whitespace())
}

// --- Segment handling ---

// All-digit segments lose leading zeros ("012" -> "12", "000" -> "0").
// Empty or non-numeric segments are kept verbatim as opaque strings.
fn canonical_segment(seg: &str) -> String {
    let seg = seg.trim();
    if !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()) {
        let stripped = seg.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    } else {
        seg.to_string()
    }
}

fn path_segments(raw: &str, prefix: Option<&str>) -> Vec<String> {
    let folded = fold_digits(raw.trim());
    let stripped = strip_code_prefix(&folded, prefix);
    if stripped.is_empty() {
        return Vec::new();
    }
    stripped.split('.').map(canonical_segment).collect()
}

/// Canonical dot-segments of `raw`, relative to the scheme's base when the
/// code lives under it. A code that does not start with the base keeps its
/// full path.
pub fn segments(raw: &str, scheme: &CodeScheme) -> Vec<String> {
    let mut segs = path_segments(raw, scheme.prefix.as_deref());
    if let Some(base) = scheme.base.as_deref() {
        let base_segs = path_segments(base, scheme.prefix.as_deref());
        if !base_segs.is_empty()
            && segs.len() > base_segs.len()
            && segs[..base_segs.len()] == base_segs[..]
        {
            segs.drain(..base_segs.len());
        }
    }
    segs
}

// --- Public canonical forms ---

/// Reduces `raw` to the comparable form the calling page uses: digits only
/// for flat codes, normalized dot-segments for hierarchical ones.
pub fn canonicalize(raw: &str, scheme: &CodeScheme, mode: CanonicalMode) -> String {
    match mode {
        CanonicalMode::Flat => {
            let folded = fold_digits(raw.trim());
            strip_code_prefix(&folded, scheme.prefix.as_deref())
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect()
        }
        CanonicalMode::Hierarchical => segments(raw, scheme).join("."),
    }
}

/// Re-applies the display prefix. Empty canonicals stay empty so malformed
/// rows render a blank code cell rather than a bare prefix.
pub fn to_display_code(canonical: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.is_empty() && !canonical.is_empty() => format!("{}-{}", p, canonical),
        _ => canonical.to_string(),
    }
}

/// Duplicate check against the codes already on the page, under the page's
/// canonicalization mode.
pub fn is_registered(
    existing: &[String],
    candidate: &str,
    scheme: &CodeScheme,
    mode: CanonicalMode,
) -> bool {
    let wanted = canonicalize(candidate, scheme, mode);
    existing
        .iter()
        .any(|code| canonicalize(code, scheme, mode) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ob() -> CodeScheme {
        CodeScheme::with_prefix("OB")
    }

    #[test]
    fn folds_persian_and_arabic_indic_digits() {
        assert_eq!(fold_digits("۱۲۳"), "123");
        assert_eq!(fold_digits("٤٥٦"), "456");
        assert_eq!(fold_digits("a۷b٨"), "a7b8");
    }

    #[test]
    fn prefix_and_digit_insensitive() {
        let scheme = ob();
        assert_eq!(
            canonicalize("OB-012", &scheme, CanonicalMode::Flat),
            canonicalize("۰۱۲", &scheme, CanonicalMode::Flat),
        );
        assert_eq!(
            canonicalize("ob.12", &scheme, CanonicalMode::Hierarchical),
            canonicalize("OB-۱۲", &scheme, CanonicalMode::Hierarchical),
        );
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let scheme = ob();
        for raw in ["OB-012.03", "۱۲.۰۵", "7.08.9", "", "x.y", "OB-"] {
            for mode in [CanonicalMode::Flat, CanonicalMode::Hierarchical] {
                let once = canonicalize(raw, &scheme, mode);
                let twice = canonicalize(&once, &scheme, mode);
                assert_eq!(once, twice, "raw={:?} mode={:?}", raw, mode);
            }
        }
    }

    #[test]
    fn hierarchical_strips_leading_zeros_per_segment() {
        let scheme = CodeScheme::default();
        assert_eq!(
            canonicalize("012.003.000", &scheme, CanonicalMode::Hierarchical),
            "12.3.0"
        );
    }

    #[test]
    fn non_numeric_segments_survive_verbatim() {
        let scheme = CodeScheme::default();
        assert_eq!(
            canonicalize("12.x7.1", &scheme, CanonicalMode::Hierarchical),
            "12.x7.1"
        );
        assert_eq!(
            canonicalize("5.", &scheme, CanonicalMode::Hierarchical),
            "5."
        );
    }

    #[test]
    fn base_scopes_the_path() {
        let scheme = CodeScheme::scoped("PB", "PB-12");
        assert_eq!(
            canonicalize("PB-12.3.1", &scheme, CanonicalMode::Hierarchical),
            "3.1"
        );
        // outside the base: full path kept
        assert_eq!(
            canonicalize("PB-13.3", &scheme, CanonicalMode::Hierarchical),
            "13.3"
        );
        // the base itself is not shortened to an empty key
        assert_eq!(
            canonicalize("PB-12", &scheme, CanonicalMode::Hierarchical),
            "12"
        );
    }

    #[test]
    fn display_code_reapplies_prefix() {
        assert_eq!(to_display_code("12.3", Some("OB")), "OB-12.3");
        assert_eq!(to_display_code("12.3", None), "12.3");
        assert_eq!(to_display_code("", Some("OB")), "");
    }

    #[test]
    fn duplicate_check_matches_per_mode() {
        let scheme = ob();
        let existing = vec!["OB-12".to_string(), "OB-7.1".to_string()];
        assert!(is_registered(&existing, "۱۲", &scheme, CanonicalMode::Flat));
        assert!(is_registered(
            &existing,
            "ob-07.01",
            &scheme,
            CanonicalMode::Hierarchical
        ));
        assert!(!is_registered(
            &existing,
            "OB-7.2",
            &scheme,
            CanonicalMode::Hierarchical
        ));
    }
}
