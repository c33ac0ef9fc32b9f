//! Common types and constants

use thiserror::Error;

/// The cipher alphabet: index `i` maps to letter `b'A' + i`
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Label for the produced text
    pub fn output_label(self) -> &'static str {
        match self {
            Direction::Encrypt => "Ciphertext",
            Direction::Decrypt => "Plaintext",
        }
    }
}

/// Reasons a cipher key is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("key must not be empty")]
    Empty,

    #[error("key must contain only letters A-Z, found {0:?}")]
    NotAlphabetic(char),
}
