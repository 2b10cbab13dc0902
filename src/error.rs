// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

/// Errors returned by print record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// Operation invoked on a record of the wrong kind, or on an undefined record.
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// No usable minutiae, or a malformed precondition on the input data.
    #[error("Invalid data: {0}")]
    InvalidData(String),
    /// Malformed, truncated or corrupt serialized print.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Operation requested on an incompatible template kind.
    #[error("Not supported: {0}")]
    NotSupported(String),
    #[error("{0}")]
    General(String),
}

/// Errors raised while serializing or parsing variant data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("Invalid type string: {0}")]
    InvalidTypeString(String),
    #[error("Value does not match type {expected}")]
    TypeMismatch { expected: String },
    #[error("Fixed-size value of type {ty} has size {found}, expected {expected}")]
    InvalidFixedSize { ty: String, expected: usize, found: usize },
    #[error("Invalid framing offset {offset} (container size {size})")]
    InvalidFraming { offset: usize, size: usize },
    #[error("Invalid boolean byte: {0}")]
    InvalidBoolean(u8),
    #[error("String is not nul-terminated or contains interior nul bytes")]
    UnterminatedString,
    #[error("String is not valid UTF-8")]
    InvalidUtf8,
    #[error("Maybe value is missing its trailing marker byte")]
    InvalidMaybe,
    #[error("Variant has no type signature")]
    MissingSignature,
    #[error("Nesting depth exceeds {0}")]
    DepthExceeded(usize),
}

impl From<VariantError> for PrintError {
    fn from(e: VariantError) -> Self {
        PrintError::InvalidFormat(e.to_string())
    }
}

pub type PrintResult<T> = core::result::Result<T, PrintError>;
pub type Result<T> = PrintResult<T>;
pub type VariantResult<T> = core::result::Result<T, VariantError>;
