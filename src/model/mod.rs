//! Pure data structures describing the managed SSM document.

pub mod document;

pub use document::*;
