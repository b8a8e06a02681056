use super::{Phase, Vocabulary};
use crate::transform::Transform;

pub const STAGES: &str = "stages";
pub const MATRIX_SHIFT: &str = "matrix-shift";

// The stage prompts carry no operand; these are the ones the server checks.
pub(super) fn stages() -> Vocabulary {
    Vocabulary {
        name: STAGES.into(),
        phases: vec![
            Phase::fixed("Stage 1 initiated", "SERAPH", Transform::Checksum),
            Phase::fixed("Stage 2", "ZION", Transform::ShiftCipher(13)),
            Phase::fixed("Stage 3", "ORACLE", Transform::MixHash),
            Phase::fixed("Stage 4", "BluePill", Transform::OctalLength),
            Phase::fixed("Stage 5", "MEROVINGIAN", Transform::Base64Encode),
            Phase::capture("Stage 6"),
        ],
    }
}

pub(super) fn matrix_shift() -> Vocabulary {
    Vocabulary {
        name: MATRIX_SHIFT.into(),
        phases: vec![
            Phase::quoted("Phase: b64-encode", Transform::Base64Encode),
            Phase::quoted("Phase: len-octal", Transform::OctalLength),
            Phase::quoted("Phase: reverse", Transform::Reverse),
            Phase::quoted("Phase: sum-gopher", Transform::Checksum),
            Phase::quoted("Phase: consonant-count", Transform::CountConsonants),
            Phase::quoted("Phase: len-binary", Transform::BinaryLength),
            Phase::quoted("Phase: unique-letters", Transform::CountUniqueLetters),
            Phase::quoted("Phase: vowel-count", Transform::CountVowels),
            Phase::quoted("Phase: xor-bytes", Transform::XorBytes),
            Phase::quoted("Phase: rot13-confs", Transform::Rot13),
            Phase::quoted("Phase: sum-hex", Transform::SumHex),
            Phase::quoted("Phase: hex-pseudo", Transform::MixHash),
            Phase::claim("Ghost Twin solidified"),
        ],
    }
}
