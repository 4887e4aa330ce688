//! Error types for ringtone descriptor loading.

use thiserror::Error;

/// Result type for ringtone operations.
pub type Result<T> = std::result::Result<T, RtttlError>;

/// Errors that can occur when decoding a ringtone descriptor.
///
/// Only structural problems fail a load. Everything else a descriptor can
/// get wrong (bad default assignments, unrecognized duration digits, missing
/// octaves) degrades to a default and is reported through `log::debug!`
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtttlError {
    /// Descriptor did not split into 2 or 3 colon-separated fields.
    #[error("expected 2 or 3 colon-separated fields, found {found}")]
    FieldCount {
        /// Number of fields found.
        found: usize,
    },

    /// Descriptor name field is empty.
    #[error("descriptor has an empty tune name")]
    EmptyName,

    /// Descriptor decoded to zero notes.
    #[error("descriptor decoded to an empty note list")]
    EmptyTune,
}
