//! Text preparation for corpus input.
//!
//! Tokenization and markup stripping happen before words reach the corrector.

pub mod text;
