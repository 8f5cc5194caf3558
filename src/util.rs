//! Shared utility modules.

pub mod select;
