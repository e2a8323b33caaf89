//! Layout generation and validation.
//!
//! A layout is the ordered list of `Position`s tiles may occupy. Layouts are
//! pure data: no randomness, and the same variant always yields the same
//! slots in the same order.

pub mod generator;
pub mod validate;

pub use generator::generate;
pub use validate::validate_layout;
