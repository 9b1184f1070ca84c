//! Serialization boundaries for expressions and deductions.

pub mod json;
