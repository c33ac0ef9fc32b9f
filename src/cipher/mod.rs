//! Vigenère cipher core: key schedule and cipher engine

pub mod engine;
pub mod key;

pub use engine::{apply_cipher, decrypt, encrypt};
pub use key::derive_shift_sequence;
