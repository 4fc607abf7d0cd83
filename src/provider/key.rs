//! Message-key normalization.

/// Maximum key length accepted by the external key-value source.
const MAX_KEY_LENGTH: usize = 253;

/// Normalize a message key into the restricted alphabet of the external
/// source.
///
/// Message keys coming from the UI layer may contain arbitrary characters
/// (a properties-style key such as `checkout.total €`), while the source
/// only accepts `[A-Za-z0-9._-]` with a length cap of 253. Every character
/// outside that set becomes `_`; the normalized result is then truncated to
/// the cap. Best effort: distinct keys may collide after normalization.
#[must_use]
pub fn normalize_message_key(message_key: &str) -> String {
    message_key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' }
        })
        .take(MAX_KEY_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::already_valid("checkout.total", "checkout.total")]
    #[case::keeps_full_alphabet("a-B_9.z", "a-B_9.z")]
    #[case::space("hello world", "hello_world")]
    #[case::punctuation("price (incl. tax)!", "price__incl._tax__")]
    #[case::unicode("größe", "gr__e")]
    #[case::empty("", "")]
    fn test_normalize_replaces_invalid_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_message_key(input), expected);
    }

    #[rstest]
    fn test_normalize_truncates_to_cap() {
        let long_key = "k".repeat(300);

        let normalized = normalize_message_key(&long_key);

        assert_eq!(normalized.chars().count(), 253);
        assert_eq!(normalized, "k".repeat(253));
    }

    #[rstest]
    fn test_normalize_keeps_keys_at_cap() {
        let key = "k".repeat(253);

        assert_eq!(normalize_message_key(&key), key);
    }

    #[rstest]
    fn test_normalize_counts_characters_not_bytes() {
        // Multi-byte input is replaced per character, so the cap applies to
        // the normalized character count.
        let long_key = "ä".repeat(300);

        let normalized = normalize_message_key(&long_key);

        assert_eq!(normalized, "_".repeat(253));
    }
}
