//! Error types for the temporal and RSA key decoders

use crate::rsa::WalkStep;
use nom::error::{ErrorKind, ParseError};
use std::fmt;

/// Temporal literal could not be decoded
///
/// Covers unparsable fields, values which do not form a valid calendar date or time, and
/// zero dates rejected by [`ZeroDatePolicy::Fail`](../temporal/enum.ZeroDatePolicy.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalError {
    InvalidFormat,
}

/// RSA public key could not be decoded
#[derive(Debug, PartialEq)]
pub enum FormatError {
    /// No `-----BEGIN ...-----` / `-----END ...-----` pair was found
    MissingPemBoundary,
    /// PEM block is not a public key block
    UnsupportedPemLabel(String),
    Base64(base64::DecodeError),

    /// Tag or length marker not among the shapes accepted at this step
    UnexpectedMarker {
        step: WalkStep,
        offset: usize,
        found: Vec<u8>,
    },
    /// Algorithm identifier is not `rsaEncryption` with NULL parameters
    AlgorithmMismatch { offset: usize, found: Vec<u8> },
    /// Declared length is not usable (zero-length integer, for ex.)
    InvalidLength { step: WalkStep, offset: usize },
    /// Input ended before the step could complete
    Truncated { step: WalkStep, offset: usize },

    NomError(ErrorKind),
}

impl<I> ParseError<I> for FormatError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        FormatError::NomError(kind)
    }
    fn append(_input: I, kind: ErrorKind, _other: Self) -> Self {
        FormatError::NomError(kind)
    }
}

impl From<base64::DecodeError> for FormatError {
    fn from(e: base64::DecodeError) -> Self {
        FormatError::Base64(e)
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TemporalError::InvalidFormat => f.write_str("invalid temporal literal"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatError::MissingPemBoundary => f.write_str("missing PEM boundary"),
            FormatError::UnsupportedPemLabel(label) => {
                write!(f, "unsupported PEM label '{}'", label)
            }
            FormatError::Base64(e) => write!(f, "invalid base64 in PEM body: {}", e),
            FormatError::UnexpectedMarker {
                step,
                offset,
                found,
            } => write!(
                f,
                "unexpected marker {:02x?} at offset {} ({})",
                found, offset, step
            ),
            FormatError::AlgorithmMismatch { offset, found } => write!(
                f,
                "unexpected algorithm identifier {:02x?} at offset {}",
                found, offset
            ),
            FormatError::InvalidLength { step, offset } => {
                write!(f, "invalid length at offset {} ({})", offset, step)
            }
            FormatError::Truncated { step, offset } => {
                write!(f, "truncated input at offset {} ({})", offset, step)
            }
            FormatError::NomError(kind) => write!(f, "parse error: {:?}", kind),
        }
    }
}

impl std::error::Error for TemporalError {}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Base64(e) => Some(e),
            _ => None,
        }
    }
}

/// Holds the result of temporal decoding functions
pub type TemporalResult<T> = Result<T, TemporalError>;

/// Holds the result of RSA key decoding functions
pub type KeyResult<T> = Result<T, FormatError>;
