//! UTF-8 to extended 8-bit code page filter
//!
//! Fonts are indexed by single-byte codes, so text is filtered before any
//! width or jump-table lookup:
//!
//! | UTF-8 input        | Output          |
//! |--------------------|-----------------|
//! | `0x00..=0x7F`      | unchanged       |
//! | `0xC2 xx`          | `xx`            |
//! | `0xC3 xx`          | `xx \| 0xC0`     |
//! | `0xE2 0x82 0xAC` € | `0x80`          |
//! | anything else      | dropped         |
//!
//! The carry (previous lead byte) lives in the iterator, so separate strings
//! never share state.

/// Iterator adapter that filters UTF-8 bytes down to the font code page
#[derive(Debug, Clone)]
pub struct Transliterate<I> {
    bytes: I,
    lead: u8,
}

impl<I> Transliterate<I> {
    /// Wrap a byte iterator
    pub fn new(bytes: I) -> Self {
        Self { bytes, lead: 0 }
    }

    fn convert(&mut self, byte: u8) -> Option<u8> {
        if byte < 0x80 {
            self.lead = 0;
            // NUL never reaches the font
            return (byte != 0).then_some(byte);
        }

        let lead = core::mem::replace(&mut self.lead, byte);
        match (lead, byte) {
            (0xC2, _) => Some(byte),
            (0xC3, _) => Some(byte | 0xC0),
            // Euro sign: E2 82 AC
            (0x82, 0xAC) => Some(0x80),
            _ => None,
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for Transliterate<I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            let byte = self.bytes.next()?;
            if let Some(out) = self.convert(byte) {
                return Some(out);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.bytes.size_hint().1)
    }
}

/// Filter UTF-8 bytes down to the font code page
pub fn transliterate<I: IntoIterator<Item = u8>>(bytes: I) -> Transliterate<I::IntoIter> {
    Transliterate::new(bytes.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn filter(text: &[u8]) -> Vec<u8> {
        transliterate(text.iter().copied()).collect()
    }

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(filter(b"Hello, world!"), b"Hello, world!");
    }

    #[test]
    fn test_latin1_supplement() {
        // ä ö ü ß
        assert_eq!(filter("äöüß".as_bytes()), [0xE4, 0xF6, 0xFC, 0xDF]);
        // ° and £ use the C2 lead
        assert_eq!(filter("°£".as_bytes()), [0xB0, 0xA3]);
    }

    #[test]
    fn test_euro_sign() {
        assert_eq!(filter("5€".as_bytes()), [b'5', 0x80]);
    }

    #[test]
    fn test_unknown_lead_dropped_without_desync() {
        // œ is C5 93: not in the table
        assert_eq!(filter("aœb".as_bytes()), b"ab");
        // Three-byte sequences other than € vanish entirely
        assert_eq!(filter("x→y".as_bytes()), b"xy");
    }

    #[test]
    fn test_state_is_per_iterator() {
        // A dangling lead byte in one string must not leak into the next
        let first = filter(&[b'a', 0xC3]);
        let second = filter(&[0xA4]);
        assert_eq!(first, b"a");
        assert!(second.is_empty());
    }

    #[test]
    fn test_nul_dropped() {
        assert_eq!(filter(b"a\0b"), b"ab");
    }
}
