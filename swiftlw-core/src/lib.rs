//! Core utilities and types for the swiftlw Swift client generator.
//!
//! This crate provides the fundamental building blocks used across the
//! swiftlw ecosystem: string case utilities and the schema type descriptor.

mod descriptor;
mod utils;

// Schema type shapes
pub use descriptor::TypeDescriptor;
// String utilities
pub use utils::{camelize, initial_caps, sanitize_name, words_to_identifier};
