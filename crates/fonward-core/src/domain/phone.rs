/// Strips a user-entered phone number down to the bare digit string expected
/// by [`crate::carrier::CarrierTrie::longest_prefix`]. A leading `+` and any
/// formatting characters (spaces, parentheses, dashes, dots) are dropped;
/// extension markers terminate the number. Returns `None` when no digit
/// survives.
pub fn normalize_phone_for_dialing(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut saw_digit = false;

    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
            saw_digit = true;
            continue;
        }

        if matches!(ch, 'x' | 'X' | '#' | ';' | ',') {
            if !saw_digit {
                return None;
            }
            break;
        }
    }

    if !saw_digit {
        return None;
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::normalize_phone_for_dialing;

    #[test]
    fn strips_formatting() {
        let value = normalize_phone_for_dialing("  (0664) 555-1212  ").unwrap();
        assert_eq!(value, "06645551212");
    }

    #[test]
    fn drops_leading_plus() {
        let value = normalize_phone_for_dialing("+43 664 555 1212").unwrap();
        assert_eq!(value, "436645551212");
    }

    #[test]
    fn ignores_extensions() {
        let value = normalize_phone_for_dialing("0664 555 1212 x89").unwrap();
        assert_eq!(value, "06645551212");
    }

    #[test]
    fn rejects_extension_only_values() {
        assert!(normalize_phone_for_dialing("ext 123").is_none());
        assert!(normalize_phone_for_dialing("x123").is_none());
    }

    #[test]
    fn rejects_empty() {
        assert!(normalize_phone_for_dialing("   ").is_none());
    }
}
