//! Pure transforms applied to phase operands.
//!
//! Every function here is deterministic and free of I/O. [`Transform`] names
//! one of them so a phase table can refer to it as data.

pub mod numeric;
pub mod text;

use std::fmt;

pub use numeric::{binary_length, checksum, mix_hash, octal_length, sum_hex, xor_bytes};
pub use text::{
    base64_encode, count_consonants, count_unique_letters, count_vowels, reverse, rot13,
    shift_cipher,
};

/// Result of a transform, formatted for the wire by its `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Rendered as base-10 decimal.
    Int(u64),
    /// Sent as-is.
    Text(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Int(n) => write!(f, "{n}"),
            Output::Text(s) => f.write_str(s),
        }
    }
}

/// A transform selectable from a phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Checksum,
    ShiftCipher(u32),
    Rot13,
    MixHash,
    OctalLength,
    BinaryLength,
    Base64Encode,
    Reverse,
    CountConsonants,
    CountVowels,
    CountUniqueLetters,
    XorBytes,
    SumHex,
    /// Echo the operand unchanged.
    Identity,
}

impl Transform {
    pub fn apply(&self, input: &str) -> Output {
        match *self {
            Transform::Checksum => Output::Int(checksum(input)),
            Transform::ShiftCipher(shift) => Output::Text(shift_cipher(input, shift)),
            Transform::Rot13 => Output::Text(rot13(input)),
            Transform::MixHash => Output::Text(mix_hash(input)),
            Transform::OctalLength => Output::Text(octal_length(input)),
            Transform::BinaryLength => Output::Text(binary_length(input)),
            Transform::Base64Encode => Output::Text(base64_encode(input)),
            Transform::Reverse => Output::Text(reverse(input)),
            Transform::CountConsonants => Output::Int(count_consonants(input) as u64),
            Transform::CountVowels => Output::Int(count_vowels(input) as u64),
            Transform::CountUniqueLetters => Output::Int(count_unique_letters(input) as u64),
            Transform::XorBytes => Output::Int(u64::from(xor_bytes(input))),
            Transform::SumHex => Output::Text(sum_hex(input)),
            Transform::Identity => Output::Text(input.to_string()),
        }
    }

    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Checksum => "checksum",
            Transform::ShiftCipher(_) => "shift-cipher",
            Transform::Rot13 => "rot13",
            Transform::MixHash => "mix-hash",
            Transform::OctalLength => "octal-length",
            Transform::BinaryLength => "binary-length",
            Transform::Base64Encode => "base64",
            Transform::Reverse => "reverse",
            Transform::CountConsonants => "consonant-count",
            Transform::CountVowels => "vowel-count",
            Transform::CountUniqueLetters => "unique-letters",
            Transform::XorBytes => "xor-bytes",
            Transform::SumHex => "sum-hex",
            Transform::Identity => "identity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_outputs_render_decimal() {
        assert_eq!(Transform::Checksum.apply("SERAPH").to_string(), "451");
        assert_eq!(Transform::XorBytes.apply("ORACLE").to_string(), "22");
        assert_eq!(Transform::CountVowels.apply("AGENTSMITH"), Output::Int(3));
    }

    #[test]
    fn text_outputs_render_verbatim() {
        assert_eq!(Transform::ShiftCipher(13).apply("ZION").to_string(), "MVBA");
        assert_eq!(Transform::SumHex.apply("OSIRIS").to_string(), "1D9");
        assert_eq!(Transform::Identity.apply("UNLOCK").to_string(), "UNLOCK");
    }

    #[test]
    fn rot13_matches_shift_13() {
        assert_eq!(
            Transform::Rot13.apply("PERSEPHONE"),
            Transform::ShiftCipher(13).apply("PERSEPHONE")
        );
    }
}
