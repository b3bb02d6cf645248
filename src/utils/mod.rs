//! Bit, conversion and formatting helpers shared by the generator and the CLI.

pub mod bits;
pub mod converter;
pub mod format;
