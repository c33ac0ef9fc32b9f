//! Key schedule: derive per-position shifts from a textual key

use crate::types::KeyError;

/// Derive the shift sequence for a key: one value in 0..26 per key
/// character, in key order, case-insensitive.
///
/// This is the only producer of shift sequences. It rejects empty and
/// non-alphabetic keys outright rather than coercing them, so every
/// sequence handed to the engine is guaranteed non-empty and in range.
pub fn derive_shift_sequence(key: &str) -> Result<Vec<u8>, KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    let mut shifts = Vec::with_capacity(key.len());
    for ch in key.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(KeyError::NotAlphabetic(ch));
        }
        shifts.push(ch.to_ascii_uppercase() as u8 - b'A');
    }

    Ok(shifts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_key() {
        assert_eq!(derive_shift_sequence("AbC").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_known_key() {
        assert_eq!(derive_shift_sequence("KEY").unwrap(), vec![10, 4, 24]);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(derive_shift_sequence(""), Err(KeyError::Empty));
    }

    #[test]
    fn test_non_alphabetic_key_rejected() {
        assert_eq!(
            derive_shift_sequence("abc1"),
            Err(KeyError::NotAlphabetic('1'))
        );
        assert_eq!(
            derive_shift_sequence("a b"),
            Err(KeyError::NotAlphabetic(' '))
        );
    }

    #[test]
    fn test_length_matches_key() {
        let shifts = derive_shift_sequence("polyalphabetic").unwrap();
        assert_eq!(shifts.len(), "polyalphabetic".len());
        assert!(shifts.iter().all(|&s| s < 26));
    }
}
