//! Address presentation formatting
//!
//! Splits raw address strings for truncated rendering. No address
//! validation happens here - the functions operate on whatever string
//! they are given, and malformed or too-short input produces degenerate
//! segments rather than an error.

use crate::shared::constants::{ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN};
use crate::shared::types::AddressSegments;

/// Split an address with the default prefix and suffix lengths (6/5).
pub fn segment(address: &str) -> AddressSegments {
    segment_with(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}

/// Split an address into prefix, middle, and suffix segments.
///
/// For addresses of at least `prefix_len + suffix_len` characters the
/// segments concatenate back to the input exactly. Shorter addresses get
/// an empty middle with prefix and suffix truncated to the available
/// characters, so the two may cover overlapping ranges. Operates on
/// characters, so multi-byte input cannot panic.
pub fn segment_with(address: &str, prefix_len: usize, suffix_len: usize) -> AddressSegments {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len >= prefix_len + suffix_len {
        AddressSegments {
            prefix: chars[..prefix_len].iter().collect(),
            middle: chars[prefix_len..len - suffix_len].iter().collect(),
            suffix: chars[len - suffix_len..].iter().collect(),
        }
    } else {
        AddressSegments {
            prefix: chars[..prefix_len.min(len)].iter().collect(),
            middle: String::new(),
            suffix: chars[len - suffix_len.min(len)..].iter().collect(),
        }
    }
}

/// Truncate an address to `prefix...suffix` form for inline display.
/// Addresses short enough to show in full are returned unchanged.
pub fn truncated(address: &str) -> String {
    let len = address.chars().count();
    if len < ADDRESS_PREFIX_LEN + ADDRESS_SUFFIX_LEN {
        return address.to_string();
    }
    let segments = segment(address);
    if segments.middle.is_empty() {
        return address.to_string();
    }
    format!("{}...{}", segments.prefix, segments.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVM_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    #[test]
    fn test_segments_concatenate_exactly() {
        let segments = segment(EVM_ADDRESS);
        assert_eq!(segments.prefix, "0x742d");
        assert_eq!(segments.suffix, "4d8b6");
        assert_eq!(
            format!("{}{}{}", segments.prefix, segments.middle, segments.suffix),
            EVM_ADDRESS
        );
    }

    #[test]
    fn test_eleven_character_boundary() {
        // Exactly prefix_len + suffix_len: empty middle, no overlap
        let segments = segment("0x123456789");
        assert_eq!(segments.prefix, "0x1234");
        assert_eq!(segments.middle, "");
        assert_eq!(segments.suffix, "56789");
        assert_eq!(
            format!("{}{}{}", segments.prefix, segments.middle, segments.suffix),
            "0x123456789"
        );
    }

    #[test]
    fn test_short_address_overlap_truncates() {
        // 8 characters: prefix takes the first 6, suffix the last 5,
        // covering overlapping ranges of the input
        let segments = segment("abcdefgh");
        assert_eq!(segments.prefix, "abcdef");
        assert_eq!(segments.middle, "");
        assert_eq!(segments.suffix, "defgh");
    }

    #[test]
    fn test_empty_address() {
        let segments = segment("");
        assert_eq!(segments.prefix, "");
        assert_eq!(segments.middle, "");
        assert_eq!(segments.suffix, "");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let segments = segment("日本語のアドレス文字列テスト");
        assert_eq!(segments.prefix.chars().count(), 6);
        assert_eq!(segments.suffix.chars().count(), 5);
    }

    #[test]
    fn test_custom_lengths() {
        let segments = segment_with(EVM_ADDRESS, 10, 8);
        assert_eq!(segments.prefix, "0x742d35Cc");
        assert_eq!(segments.suffix, "C4b4d8b6");
        assert_eq!(
            format!("{}{}{}", segments.prefix, segments.middle, segments.suffix),
            EVM_ADDRESS
        );
    }

    #[test]
    fn test_truncated_display_form() {
        assert_eq!(truncated(EVM_ADDRESS), "0x742d...4d8b6");
        // Exactly at the boundary there is nothing to elide
        assert_eq!(truncated("0x123456789"), "0x123456789");
        assert_eq!(truncated("0x1234"), "0x1234");
        assert_eq!(truncated(""), "");
    }
}
