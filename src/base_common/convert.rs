/// Worst-case number of base-58 digits for `len` bytes (log 256 / log 58 < 1.38).
pub const fn encoded_capacity(len: usize) -> usize {
    len * 138 / 100 + 1
}

/// Worst-case number of bytes for `len` base-58 digits (log 58 / log 256 < 0.733).
pub const fn decoded_capacity(len: usize) -> usize {
    len * 733 / 1000 + 1
}

/// Computes `digits * multiplier + carry` in place, where `digits[..length]` is a number in
/// `base`, least significant digit first. Returns the new length.
///
/// Digits at or past `length` are never read, so the result has no leading zero digits.
/// Panics if `digits` cannot hold the result; callers size it with the capacities above.
pub fn multiply_add(digits: &mut [u8], length: usize, multiplier: usize, base: usize, mut carry: usize) -> usize {
    for digit in &mut digits[..length] {
        carry += (*digit as usize) * multiplier;
        *digit = (carry % base) as u8;
        carry /= base;
    }
    let mut length = length;
    while carry > 0 {
        digits[length] = (carry % base) as u8;
        length += 1;
        carry /= base;
    }
    length
}
