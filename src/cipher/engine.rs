//! Cipher engine: apply a shift sequence to text in either direction

use crate::types::{Direction, ALPHABET};

/// Apply a shift sequence to `text`, encrypting or decrypting.
///
/// Alphabetic characters are shifted within their own case; everything
/// else passes through unchanged and does not consume a key position.
/// The key cursor wraps before each use, so the key cycles with period
/// `shifts.len()` regardless of intervening non-alphabetic characters.
///
/// `shifts` must be non-empty; `derive_shift_sequence` guarantees that
/// for every sequence it produces.
pub fn apply_cipher(text: &str, shifts: &[u8], direction: Direction) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            i %= shifts.len();
            let was_lower = ch.is_ascii_lowercase();
            let idx = ch.to_ascii_uppercase() as u8 - b'A';
            let shifted = match direction {
                Direction::Encrypt => (idx + shifts[i]) % 26,
                Direction::Decrypt => (idx + 26 - shifts[i]) % 26,
            };
            let mapped = ALPHABET[shifted as usize] as char;
            out.push(if was_lower {
                mapped.to_ascii_lowercase()
            } else {
                mapped
            });
            i += 1;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Encrypt `text` with a derived shift sequence.
pub fn encrypt(text: &str, shifts: &[u8]) -> String {
    apply_cipher(text, shifts, Direction::Encrypt)
}

/// Decrypt `text` with a derived shift sequence.
pub fn decrypt(text: &str, shifts: &[u8]) -> String {
    apply_cipher(text, shifts, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::derive_shift_sequence;
    use rand::Rng;

    #[test]
    fn test_classic_vector() {
        let shifts = derive_shift_sequence("KEY").unwrap();
        assert_eq!(shifts, vec![10, 4, 24]);
        assert_eq!(encrypt("ATTACKATDAWN", &shifts), "KXRKGIKXBKAL");
        assert_eq!(decrypt("KXRKGIKXBKAL", &shifts), "ATTACKATDAWN");
    }

    #[test]
    fn test_punctuation_and_case_preserved() {
        let shifts = derive_shift_sequence("key").unwrap();
        let ciphertext = encrypt("Hello, World!", &shifts);
        assert_eq!(ciphertext, "Rijvs, Uyvjn!");

        // Same length, same classification at every position
        for (p, c) in "Hello, World!".chars().zip(ciphertext.chars()) {
            assert_eq!(p.is_ascii_alphabetic(), c.is_ascii_alphabetic());
            if p.is_ascii_alphabetic() {
                assert_eq!(p.is_ascii_uppercase(), c.is_ascii_uppercase());
            } else {
                assert_eq!(p, c);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let shifts = derive_shift_sequence("Vigenere").unwrap();
        let plain = "The quick brown fox jumps over 13 lazy dogs!";
        assert_eq!(decrypt(&encrypt(plain, &shifts), &shifts), plain);
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        let shifts = derive_shift_sequence("RandomKey").unwrap();

        for _ in 0..100 {
            let len = rng.gen_range(0..200);
            let plain: String = (0..len)
                .map(|_| rng.gen_range(0x20u8..0x7f) as char)
                .collect();
            assert_eq!(decrypt(&encrypt(&plain, &shifts), &shifts), plain);
        }
    }

    #[test]
    fn test_non_alphabetic_does_not_advance_cursor() {
        let shifts = derive_shift_sequence("KEY").unwrap();

        // Interleaving non-alphabetic characters must not change which
        // shift each letter receives.
        let plain = "ATTACKATDAWN";
        let spaced = "AT-TA CK, AT... DA WN!";
        let spaced_out = encrypt(spaced, &shifts);
        let letters_only: String = spaced_out
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        assert_eq!(letters_only, encrypt(plain, &shifts));
    }

    #[test]
    fn test_key_cycling_period() {
        let shifts = derive_shift_sequence("ABCDE").unwrap();
        let plain = "A".repeat(26);
        let ciphertext = encrypt(&plain, &shifts);

        // With all-'A' plaintext the output letter exposes the raw shift.
        for (n, ch) in ciphertext.chars().enumerate() {
            let applied = ch as u8 - b'A';
            assert_eq!(applied, shifts[n % shifts.len()]);
        }
    }

    #[test]
    fn test_output_length_equals_input_length() {
        let shifts = derive_shift_sequence("k").unwrap();
        for text in ["", "a", "?!?!", "Mixed CASE text, 42.", "\tnewline\n"] {
            assert_eq!(encrypt(text, &shifts).chars().count(), text.chars().count());
        }
    }

    #[test]
    fn test_single_letter_key_is_caesar() {
        // Shift of 3 reproduces the Caesar cipher.
        let shifts = derive_shift_sequence("d").unwrap();
        assert_eq!(encrypt("attack", &shifts), "dwwdfn");
        assert_eq!(encrypt("XYZ", &shifts), "ABC");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let shifts = derive_shift_sequence("KEY").unwrap();
        assert_eq!(encrypt("héllo", &shifts), "répjy");
        assert_eq!(decrypt(&encrypt("naïve … text", &shifts), &shifts), "naïve … text");
    }
}
