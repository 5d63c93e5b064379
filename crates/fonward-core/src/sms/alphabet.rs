//! GSM 03.38 default alphabet tables.
//!
//! Two explicit constants: the 128-entry base alphabet (index = 7-bit code)
//! and the extended-character table mapping each escapable character to the
//! base-alphabet index transmitted after the escape marker. The tables are
//! order-sensitive and deliberately not derived from one another.

/// The escape marker, base-alphabet position 0x1B.
pub const ESCAPE: char = '\u{1b}';

const ESCAPE_INDEX: usize = 0x1b;

#[rustfmt::skip]
pub const BASE_ALPHABET: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', ESCAPE, 'Æ', 'æ', 'ß', 'É',
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// Extended characters and the base-alphabet index each one escapes to.
pub const EXTENDED: [(char, usize); 9] = [
    ('^', 0x14),
    ('{', 0x28),
    ('}', 0x29),
    ('\\', 0x2f),
    ('[', 0x3c),
    ('~', 0x3d),
    (']', 0x3e),
    ('|', 0x40),
    ('€', 0x65),
];

/// True when `ch` is a base-alphabet character. The escape marker itself is
/// excluded: position 0x1B is never a literal passthrough character.
pub fn is_base(ch: char) -> bool {
    BASE_ALPHABET
        .iter()
        .position(|&c| c == ch)
        .is_some_and(|idx| idx != ESCAPE_INDEX)
}

/// The base-alphabet character transmitted after the escape marker for an
/// extended character, or `None` when `ch` is not in the extended set.
pub fn extended_target(ch: char) -> Option<char> {
    EXTENDED
        .iter()
        .find(|&&(extended, _)| extended == ch)
        .map(|&(_, idx)| BASE_ALPHABET[idx])
}

#[cfg(test)]
mod tests {
    use super::{extended_target, is_base, BASE_ALPHABET, ESCAPE};

    #[test]
    fn alphabet_has_fixed_landmarks() {
        assert_eq!(BASE_ALPHABET[0x00], '@');
        assert_eq!(BASE_ALPHABET[0x1b], ESCAPE);
        assert_eq!(BASE_ALPHABET[0x41], 'A');
        assert_eq!(BASE_ALPHABET[0x65], 'e');
        assert_eq!(BASE_ALPHABET[0x7f], 'à');
    }

    #[test]
    fn escape_marker_is_not_a_base_character() {
        assert!(!is_base(ESCAPE));
        assert!(is_base('@'));
        assert!(is_base('ü'));
    }

    #[test]
    fn euro_escapes_to_lowercase_e() {
        assert_eq!(extended_target('€'), Some('e'));
        assert_eq!(extended_target('{'), Some('('));
        assert_eq!(extended_target('|'), Some('¡'));
        assert_eq!(extended_target('a'), None);
    }
}
