//! Reference and header labels written into caller-owned buffers.

use core::str;

/// `Juan 3:16`
pub fn reference_label<'a>(book_name: &str, chapter: u16, verse: u16, out: &'a mut [u8]) -> &'a str {
    let mut len = push_str_truncated(book_name, out, 0);
    len = push_byte(b' ', out, len);
    len += write_u16_ascii(chapter, &mut out[len..]);
    len = push_byte(b':', out, len);
    len += write_u16_ascii(verse, &mut out[len..]);
    str::from_utf8(&out[..len]).unwrap_or("")
}

/// `Génesis 1`
pub fn chapter_label<'a>(book_name: &str, chapter: u16, out: &'a mut [u8]) -> &'a str {
    let mut len = push_str_truncated(book_name, out, 0);
    len = push_byte(b' ', out, len);
    len += write_u16_ascii(chapter, &mut out[len..]);
    str::from_utf8(&out[..len]).unwrap_or("")
}

/// Copies whole characters of `text` into `out[len..]`, stopping before the
/// first one that does not fit. Returns the new length.
fn push_str_truncated(text: &str, out: &mut [u8], mut len: usize) -> usize {
    for ch in text.chars() {
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if len + encoded.len() > out.len() {
            break;
        }
        out[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
    }
    len
}

fn push_byte(byte: u8, out: &mut [u8], len: usize) -> usize {
    match out.get_mut(len) {
        Some(slot) => {
            *slot = byte;
            len + 1
        }
        None => len,
    }
}

/// Writes `value` in decimal. Digits that do not fit are dropped from the right.
pub fn write_u16_ascii(mut value: u16, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 5];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reference() {
        let mut buf = [0u8; 32];
        assert_eq!(reference_label("Juan", 3, 16, &mut buf), "Juan 3:16");
        assert_eq!(reference_label("Salmos", 119, 105, &mut buf), "Salmos 119:105");
    }

    #[test]
    fn formats_chapter_header_with_accents() {
        let mut buf = [0u8; 32];
        assert_eq!(chapter_label("Génesis", 1, &mut buf), "Génesis 1");
    }

    #[test]
    fn truncates_on_char_boundary() {
        // `É` is two bytes wide.
        let mut buf = [0u8; 3];
        assert_eq!(chapter_label("Éxodo", 2, &mut buf), "Éx");

        let mut buf = [0u8; 4];
        assert_eq!(chapter_label("Éxodo", 2, &mut buf), "Éxo");
    }

    #[test]
    fn numbers_fit_or_are_cut() {
        let mut buf = [0u8; 5];
        assert_eq!(write_u16_ascii(0, &mut buf), 1);
        assert_eq!(&buf[..1], b"0");
        assert_eq!(write_u16_ascii(65_535, &mut buf), 5);
        assert_eq!(&buf, b"65535");

        let mut small = [0u8; 2];
        assert_eq!(write_u16_ascii(150, &mut small), 2);
        assert_eq!(&small, b"15");
    }
}
