//! Hex and bit-string formatting used throughout the field trees.

/// Two digit uppercase hex for a single byte.
#[must_use]
pub fn hex_byte(b: u8) -> String {
    format!("{b:02X}")
}

/// Uppercase hex for a multi-byte value, left padded to an even number of digits.
#[must_use]
pub fn hex_value(v: u32) -> String {
    let s = format!("{v:X}");
    if s.len() % 2 == 1 {
        format!("0{s}")
    } else {
        s
    }
}

/// One uppercase hex string per byte.
#[must_use]
pub fn hex_list(buf: &[u8]) -> Vec<String> {
    buf.iter().map(|b| hex_byte(*b)).collect()
}

/// Space separated uppercase hex, e.g. `"00 2C 86 5C"`.
#[must_use]
pub fn hex_join(buf: &[u8]) -> String {
    hex_list(buf).join(" ")
}

/// The 8 character binary form of `b`, most significant bit first.
#[must_use]
pub fn bin8(b: u8) -> String {
    format!("{b:08b}")
}

/// `len` characters of the binary form of `b` starting at bit position `start`,
/// where position 0 is the most significant bit.
///
/// # Panics
/// If `start + len > 8`.
#[must_use]
pub fn bin_slice(b: u8, start: usize, len: usize) -> String {
    bin8(b)[start..start + len].to_string()
}

/// Extracts the bit field of `b` selected by `mask`, shifted down to bit 0.
#[must_use]
pub fn bits(b: u8, mask: u8) -> u8 {
    if mask == 0 {
        return 0;
    }
    (b & mask) >> mask.trailing_zeros()
}

/// Parses whitespace separated or contiguous hex, e.g. `"55 00 07"` or `"550007"`.
pub fn parse_hex(s: &str) -> crate::Result<Vec<u8>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}
