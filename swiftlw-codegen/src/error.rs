//! Fatal errors for a generation run.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for swiftlw-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// An operation with no usable name cannot be emitted: there is no
    /// valid identifier to call, so the run must abort.
    #[error("operation id '{operation_id}' has no usable method name")]
    #[diagnostic(
        code(swiftlw::empty_operation_id),
        help("every operation must declare a non-empty operationId")
    )]
    EmptyOperationId { operation_id: String },
}
