/// Sum of the Unicode code points of `input`.
pub fn checksum(input: &str) -> u64 {
    input.chars().map(|c| c as u64).sum()
}

/// Toy xorshift mix over the checksum, rendered as 8 lowercase hex digits.
///
/// The shifts run on the full 64-bit value and only the final result is
/// masked to 32 bits, so `v >> 17` sees the bits pushed up by `v << 13`.
pub fn mix_hash(input: &str) -> String {
    let mut v = checksum(input);
    v ^= v << 13;
    v ^= v >> 17;
    v ^= v << 5;
    format!("{:08x}", v & 0xFFFF_FFFF)
}

/// Length of `input` in characters, in base 8 without prefix.
pub fn octal_length(input: &str) -> String {
    format!("{:o}", input.chars().count())
}

/// Length of `input` in characters, in base 2 without prefix.
pub fn binary_length(input: &str) -> String {
    format!("{:b}", input.chars().count())
}

/// XOR of every code point, reduced mod 255 (always in `0..=254`).
pub fn xor_bytes(input: &str) -> u32 {
    input.chars().fold(0u32, |acc, c| acc ^ c as u32) % 255
}

/// Checksum as uppercase hex, no prefix and no padding.
pub fn sum_hex(input: &str) -> String {
    format!("{:X}", checksum(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_sums_code_points() {
        assert_eq!(checksum("ABC"), 198);
        assert_eq!(checksum("NEO"), 226);
        assert_eq!(checksum("SERAPH"), 451);
        assert_eq!(checksum(""), 0);
    }

    #[test]
    fn checksum_counts_code_points_not_bytes() {
        // U+00E9 is two bytes in UTF-8 but a single code point of 233.
        assert_eq!(checksum("\u{e9}"), 233);
    }

    #[test]
    fn mix_hash_known_values() {
        assert_eq!(mix_hash("ORACLE"), "06eef40d");
        assert_eq!(mix_hash("SERAPH"), "07345a3f");
        assert_eq!(mix_hash(""), "00000000");
    }

    #[test]
    fn radix_lengths() {
        assert_eq!(octal_length("BluePill"), "10");
        assert_eq!(octal_length("AGENTSMITH"), "12");
        assert_eq!(binary_length("KEYMAKER"), "1000");
        assert_eq!(octal_length(""), "0");
    }

    #[test]
    fn xor_bytes_known_values() {
        assert_eq!(xor_bytes("ORACLE"), 22);
        assert_eq!(xor_bytes("A"), 65);
        // 0xFF alone folds to 255, which wraps to 0.
        assert_eq!(xor_bytes("\u{ff}"), 0);
    }

    #[test]
    fn sum_hex_is_uppercase_unpadded() {
        assert_eq!(sum_hex("OSIRIS"), "1D9");
        assert_eq!(sum_hex("NEO"), "E2");
        assert_eq!(sum_hex(""), "0");
    }
}
