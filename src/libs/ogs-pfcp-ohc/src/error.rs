//! PFCP Error Types
//!
//! Error types for Outer Header Creation decoding.

use thiserror::Error;

use crate::description::OhcField;

/// PFCP Error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PfcpError {
    /// Payload cannot even hold the 2-byte description
    #[error("Outer Header Creation payload too short: need at least 2 bytes, got {available}")]
    PayloadTooShort { available: usize },

    /// A flagged sub-field does not fit in the remaining payload
    #[error(
        "Outer Header Creation: insufficient bytes for {field} at offset {offset} \
         (needed {needed}, available {available})"
    )]
    TruncatedField {
        field: OhcField,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Buffer too short for operation
    #[error("Buffer too short: needed {needed} bytes, available {available}")]
    BufferTooShort { needed: usize, available: usize },

    /// IE header declares more value bytes than the buffer holds
    #[error("IE length mismatch: declared {declared} bytes, available {available}")]
    IeLengthMismatch { declared: usize, available: usize },

    /// Invalid IE type
    #[error("Invalid IE type: {0}")]
    InvalidIeType(u16),
}

impl PfcpError {
    /// Field whose read failed, if this is a truncated-field error
    pub fn field(&self) -> Option<OhcField> {
        match self {
            Self::TruncatedField { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Payload offset at which decoding stopped
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::TruncatedField { offset, .. } => Some(*offset),
            Self::PayloadTooShort { .. } => Some(0),
            _ => None,
        }
    }
}

/// PFCP Result type
pub type PfcpResult<T> = Result<T, PfcpError>;
