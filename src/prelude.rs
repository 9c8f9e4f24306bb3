//! Derive macros shared by the crate's types and errors.

pub use derive_more::Display;
