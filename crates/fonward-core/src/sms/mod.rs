pub mod alphabet;

pub use alphabet::ESCAPE;

/// Septets available in a single-segment SMS.
pub const SEGMENT_SEPTETS: usize = 160;
/// Septets available per segment once a message needs concatenation
/// headers.
pub const MULTIPART_SEGMENT_SEPTETS: usize = 153;

/// Visible stand-in for characters outside the GSM alphabet.
pub const UNSUPPORTED_REPLACEMENT: char = '_';

/// An SMS body mapped into the GSM 7-bit default alphabet. `length` counts
/// septets: one per base character, two per escaped extended character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSms {
    pub text: String,
    pub length: usize,
}

/// True when `ch` can be transmitted without substitution, either as a base
/// character or via an escape sequence.
pub fn is_transmittable(ch: char) -> bool {
    alphabet::is_base(ch) || alphabet::extended_target(ch).is_some()
}

/// Maps `input` into the GSM default alphabet and reports its septet
/// length.
///
/// Base characters pass through and cost 1; the nine extended characters
/// become the escape marker plus their mapped base character and cost 2;
/// anything else degrades to [`UNSUPPORTED_REPLACEMENT`] at cost 1. The
/// fold is lossy but deterministic and never fails.
pub fn encode(input: &str) -> EncodedSms {
    let mut text = String::with_capacity(input.len());
    let mut length = 0;

    for ch in input.chars() {
        if alphabet::is_base(ch) {
            text.push(ch);
            length += 1;
        } else if let Some(target) = alphabet::extended_target(ch) {
            text.push(ESCAPE);
            text.push(target);
            length += 2;
        } else {
            text.push(UNSUPPORTED_REPLACEMENT);
            length += 1;
        }
    }

    EncodedSms { text, length }
}

#[cfg(test)]
mod tests {
    use super::{encode, is_transmittable, EncodedSms, ESCAPE};

    #[test]
    fn ascii_passes_through() {
        assert_eq!(
            encode("Hello"),
            EncodedSms {
                text: "Hello".to_string(),
                length: 5,
            }
        );
    }

    #[test]
    fn extended_character_costs_two() {
        let encoded = encode("a€b");
        assert_eq!(encoded.length, 4);
        assert_eq!(encoded.text, format!("a{ESCAPE}eb"));
        assert_eq!(encoded.text.chars().filter(|&c| c == ESCAPE).count(), 1);
    }

    #[test]
    fn every_extended_character_escapes() {
        let encoded = encode("|^€{}[~]\\");
        assert_eq!(encoded.length, 18);
        assert_eq!(encoded.text.chars().filter(|&c| c == ESCAPE).count(), 9);
    }

    #[test]
    fn unsupported_characters_become_underscores() {
        assert_eq!(
            encode("日本語"),
            EncodedSms {
                text: "___".to_string(),
                length: 3,
            }
        );
    }

    #[test]
    fn literal_escape_input_is_replaced() {
        let encoded = encode("a\u{1b}b");
        assert_eq!(encoded.text, "a_b");
        assert_eq!(encoded.length, 3);
    }

    #[test]
    fn gsm_letters_keep_their_accents() {
        // ü and é are base-alphabet characters, not extended ones.
        let encoded = encode("Grüß dich, René");
        assert_eq!(encoded.text, "Grüß dich, René");
        assert_eq!(encoded.length, 15);
    }

    #[test]
    fn transmittable_probe() {
        assert!(is_transmittable('a'));
        assert!(is_transmittable('€'));
        assert!(!is_transmittable('語'));
        assert!(!is_transmittable(ESCAPE));
    }
}
