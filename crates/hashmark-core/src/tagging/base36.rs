//! Base-36 encoding of big-endian unsigned integers

/// Symbols for the values 0..36, most significant first
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Symbol used to left-pad short encodings
pub const FILLER: char = '0';

/// Encode `bytes`, read as one big-endian unsigned integer, in base 36.
///
/// The value zero (including an empty slice) encodes to the empty string.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut number: Vec<u8> = bytes.iter().copied().skip_while(|b| *b == 0).collect();
    let mut symbols = Vec::new();

    // Schoolbook long division by 36, one remainder per pass
    while !number.is_empty() {
        let mut quotient = Vec::with_capacity(number.len());
        let mut remainder: u32 = 0;
        for &byte in &number {
            let acc = (remainder << 8) | u32::from(byte);
            let digit = acc / 36;
            remainder = acc % 36;
            if !quotient.is_empty() || digit != 0 {
                quotient.push(digit as u8);
            }
        }
        symbols.push(ALPHABET[remainder as usize]);
        number = quotient;
    }

    symbols.iter().rev().map(|&b| char::from(b)).collect()
}

/// Encode `bytes` in base 36 at exactly `width` symbols.
///
/// Short encodings are left-padded with [`FILLER`]; long ones keep their
/// `width` most significant symbols.
#[must_use]
pub fn encode_fixed(bytes: &[u8], width: usize) -> String {
    let mut encoded = format!("{:0>width$}", encode(bytes));
    encoded.truncate(width);
    encoded
}

/// Check that `value` only uses symbols from [`ALPHABET`]
#[must_use]
pub fn is_base36(value: &str) -> bool {
    value.bytes().all(|b| ALPHABET.contains(&b))
}
