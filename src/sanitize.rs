//! Control-character cleaning applied to formatted messages.
//!
//! Whitespace-like control characters collapse to a single space so a
//! multi-line payload stays on one log line; every other control character
//! is rewritten as an uppercase `\xHH` escape so it survives terminals and
//! line-oriented collectors. Everything from U+0020 upward, including
//! multi-byte UTF-8 sequences, passes through untouched.

/// Characters below U+0020 that become a single space instead of a hex
/// escape: tab, newline, vertical tab, form feed, carriage return.
const SPACED: [char; 5] = ['\t', '\n', '\u{0B}', '\u{0C}', '\r'];

/// Returns `message` with ASCII control characters neutralized.
pub fn clean_message(message: &str) -> String {
    let mut cleaned = String::with_capacity(message.len());
    for ch in message.chars() {
        if SPACED.contains(&ch) {
            cleaned.push(' ');
        } else if (ch as u32) < 0x20 {
            cleaned.push_str(&format!("\\x{:02X}", ch as u32));
        } else {
            cleaned.push(ch);
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_controls_become_single_spaces() {
        assert_eq!(clean_message("a\tb\nc"), "a b c");
        assert_eq!(clean_message("x\ry\u{0B}z\u{0C}w"), "x y z w");
    }

    #[test]
    fn other_controls_become_uppercase_hex_escapes() {
        assert_eq!(clean_message("\u{0}"), "\\x00");
        assert_eq!(clean_message("a\u{1}b"), "a\\x01b");
        assert_eq!(clean_message("end\u{1F}"), "end\\x1F");
    }

    #[test]
    fn printable_ascii_is_untouched() {
        let text = "Hello, World! 0123 ~";
        assert_eq!(clean_message(text), text);
    }

    #[test]
    fn multi_byte_utf8_is_preserved_whole() {
        assert_eq!(clean_message("中文 ok"), "中文 ok");
        assert_eq!(clean_message("emoji 🙂 intact"), "emoji 🙂 intact");
        // 2-byte, 3-byte and 4-byte sequences around control characters
        assert_eq!(clean_message("é\u{0}中\t🙂"), "é\\x00中 🙂");
    }

    #[test]
    fn spaced_controls_are_never_hex_encoded() {
        let cleaned = clean_message("tab\there");
        assert!(!cleaned.contains("\\x09"));
        assert_eq!(cleaned, "tab here");
    }
}
