//! Language-agnostic naming and annotation machinery for swiftlw.
//!
//! This crate turns raw schema names into legal target-language identifiers
//! and post-processes model graphs for the renderer. Language specifics
//! (reserved words, type tables, symbol names) are injected through an
//! immutable [`LanguageConfig`] built once at generator startup.
//!
//! # Module Organization
//!
//! - [`language`] - [`LanguageConfig`] and the [`TypeMapper`] trait
//! - [`naming`] - identifier legalization rule chain and escape helpers
//! - [`enums`] - enum case, default value, and type naming
//! - [`schema`] - model/property/operation info types carried through a run
//! - [`annotate`] - post-processing pass flagging escaped names and
//!   optional scalars
//! - [`diagnostic`] - non-fatal warning collection

pub mod annotate;
pub mod diagnostic;
pub mod enums;
pub mod error;
pub mod language;
pub mod naming;
pub mod schema;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use language::{LanguageConfig, TypeMapper};
