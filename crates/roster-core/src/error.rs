//! Error types for the roster crates.
//!
//! This module provides a unified error type with explicit variants for
//! missing records, input validation, storage access, and outbound
//! transport failures.

use thiserror::Error;

/// The unified error type for roster operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup, update, or delete named an id that is not in the collection.
    #[error("user {id} not found")]
    NotFound { id: u32 },

    /// Input validation errors (missing or malformed fields).
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The persisted collection could not be read or parsed.
    #[error("storage read error: {0}")]
    StorageRead(#[from] StorageReadError),

    /// The collection could not be written back.
    #[error("storage write error: {0}")]
    StorageWrite(#[from] StorageWriteError),

    /// Network transport errors reaching an external collaborator.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("field '{field}' must not be empty")]
    Empty { field: &'static str },

    /// The email does not look like an address.
    #[error("invalid email '{value}': {reason}")]
    Email { value: String, reason: String },

    /// A birth date or date bound that does not parse.
    #[error("invalid birth date '{value}': {reason}")]
    BirthDate { value: String, reason: String },

    /// A value contains a character the stored row format cannot carry.
    #[error("field '{field}' must not contain {found:?}")]
    ForbiddenCharacter { field: &'static str, found: char },

    /// An upload whose content type is not an accepted image format.
    #[error("unsupported content type '{found}'")]
    UnsupportedContentType { found: String },
}

/// Failures reading or parsing the persisted collection.
#[derive(Debug, Error)]
pub enum StorageReadError {
    /// The storage medium could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row that cannot be parsed into a record.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// The header row is absent or lists unexpected columns.
    #[error("invalid header row, expected '{expected}'")]
    InvalidHeader { expected: &'static str },
}

/// Failures writing the collection back to the medium.
#[derive(Debug, Error)]
pub enum StorageWriteError {
    /// The storage medium could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Transport-level errors from external HTTP sources.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The source answered with a non-success status.
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}
