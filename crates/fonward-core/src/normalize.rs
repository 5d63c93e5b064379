use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a string into a case- and diacritic-insensitive comparison form:
/// canonical decomposition, combining marks dropped, lowercased.
///
/// `ß` is substituted with the literal `ss` because it has no base+mark
/// decomposition. Everything else without a decomposition passes through
/// unchanged; the fold is best-effort and never fails.
///
/// This is plain diacritic folding, not German transliteration: `ü`
/// becomes `u`, never `ue`.
pub fn fold_for_match(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch == 'ß' {
            out.push_str("ss");
            continue;
        }
        for lc in ch.to_lowercase() {
            out.push(lc);
        }
    }
    out
}
