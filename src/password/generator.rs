//! Password generator module
//!
//! Produces a random password that always satisfies the strength rules: one
//! character from each required class, filler drawn from the combined
//! alphabet, then a full shuffle so the guaranteed characters land at random
//! positions. Randomness comes from the OS CSPRNG.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use super::validator::{MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

fn character_range(start: char, end: char) -> Vec<u8> {
    (start as u8..=end as u8).collect()
}

/// Generate a random password of `length` characters.
///
/// The length is clamped up to the strength rules' minimum, so the output is
/// always accepted by [`super::validator::validate_password`].
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng;
    let length = length.max(MIN_PASSWORD_LENGTH);

    let uppercase = character_range('A', 'Z');
    let lowercase = character_range('a', 'z');
    let digits = character_range('0', '9');
    let symbols: Vec<u8> = SPECIAL_CHARACTERS.bytes().collect();

    let mut password = Vec::with_capacity(length);

    // One guaranteed character per class.
    for class in [&uppercase, &lowercase, &digits, &symbols] {
        password.push(*class.choose(&mut rng).expect("character class is non-empty"));
    }

    let combined: Vec<u8> =
        [uppercase.as_slice(), lowercase.as_slice(), digits.as_slice(), symbols.as_slice()]
            .concat();

    while password.len() < length {
        password.push(*combined.choose(&mut rng).expect("combined alphabet is non-empty"));
    }

    password.shuffle(&mut rng);
    String::from_utf8(password).expect("password bytes are ASCII")
}
