use std::collections::HashSet;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Shift each uppercase letter by `shift` positions, wrapping within A–Z.
///
/// Characters outside A–Z are passed through untouched.
pub fn shift_cipher(input: &str, shift: u32) -> String {
    let shift = (shift % 26) as u8;
    input
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                let offset = (c as u8 - b'A' + shift) % 26;
                (b'A' + offset) as char
            } else {
                c
            }
        })
        .collect()
}

/// ROT13: [`shift_cipher`] with a shift of 13.
pub fn rot13(input: &str) -> String {
    shift_cipher(input, 13)
}

/// Standard RFC 4648 base64 of the UTF-8 bytes, with padding.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Uppercase letters A–Z not in `{A, E, I, O, U}`; everything else is ignored.
pub fn count_consonants(input: &str) -> usize {
    input
        .chars()
        .filter(|c| c.is_ascii_uppercase() && !VOWELS.contains(c))
        .count()
}

/// Characters in `{A, E, I, O, U}` (case-sensitive).
pub fn count_vowels(input: &str) -> usize {
    input.chars().filter(|c| VOWELS.contains(c)).count()
}

/// Number of distinct characters, case-sensitive.
pub fn count_unique_letters(input: &str) -> usize {
    input.chars().collect::<HashSet<_>>().len()
}
