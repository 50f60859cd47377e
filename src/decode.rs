use std::borrow::Cow;

/// Percent-decodes one path segment.
///
/// Returns `None` when the segment contains a malformed escape sequence or
/// does not decode to valid UTF-8. Request paths are untrusted network input,
/// so decode failures are reported to the matcher rather than ignored; it
/// treats them as a non-match.
///
/// Decoding happens *after* the path has been split into segments, which is
/// what keeps an encoded slash (`%2F`) from ever acting as a separator.
pub(crate) fn decode_segment(segment: &str) -> Option<Cow<'_, str>> {
    if !segment.as_bytes().contains(&b'%') {
        return Some(Cow::Borrowed(segment));
    }

    let bytes = segment.as_bytes();
    let mut buf = Vec::with_capacity(bytes.len());
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'%' => {
                let d1 = *bytes.get(idx + 1)?;
                let d2 = *bytes.get(idx + 2)?;
                buf.push(hex_pair_to_char(d1, d2)?);
                idx += 3;
            }
            byte => {
                buf.push(byte);
                idx += 1;
            }
        }
    }

    String::from_utf8(buf).ok().map(Cow::Owned)
}

/// Decode a ASCII hex-encoded pair to an integer.
///
/// Returns `None` if either portion of the decoded pair does not evaluate to a valid hex value.
///
/// - `0x33 ('3'), 0x30 ('0') => 0x30 ('0')`
/// - `0x34 ('4'), 0x31 ('1') => 0x41 ('A')`
/// - `0x36 ('6'), 0x31 ('1') => 0x61 ('a')`
#[inline(always)]
fn hex_pair_to_char(d1: u8, d2: u8) -> Option<u8> {
    let d_high = char::from(d1).to_digit(16)?;
    let d_low = char::from(d2).to_digit(16)?;

    // left shift high nibble by 4 bits
    Some((d_high as u8) << 4 | (d_low as u8))
}
