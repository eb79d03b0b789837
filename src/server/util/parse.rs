/// Checks that a value is a non-empty run of ASCII digits.
///
/// Discord snowflakes and decimal permission bitmasks both take this form.
///
/// # Arguments
/// - `value` - The string to check
///
/// # Returns
/// - `true` - Every character is `0`-`9` and there is at least one
/// - `false` - Empty, signed, whitespace, or any other character present
pub fn is_decimal_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Reduces a decimal string of any length to its value modulo 2^64.
///
/// Wrapping multiply-add is exact modulo 2^64, so the low 64 bits of arbitrarily
/// large values survive intact. Bit tests against those low bits are therefore
/// exact regardless of how large the full value is.
///
/// # Returns
/// - `Some(u64)` - Low 64 bits of the value
/// - `None` - `value` is not a run of decimal digits
pub fn low_bits_of_decimal(value: &str) -> Option<u64> {
    if !is_decimal_digits(value) {
        return None;
    }

    Some(value.bytes().fold(0u64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
    }))
}
