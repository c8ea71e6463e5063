//! Purpose: Error model shared by the JSON and SQL adapters.
//! Exports: `Error`, `ErrorKind`.
//! Role: Single error type returned from inbound/outbound adapter calls.
//! Invariants: Decode errors keep the decoder's message and error value untouched.
//! Invariants: Scan mismatches always carry both the expected and the found scalar type.
use std::error::Error as StdError;
use std::fmt;

use crate::core::scalar_type::ScalarType;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// JSON decode of a present value failed.
    Decode,
    /// JSON encode of a set value failed.
    Encode,
    /// The driver handed over a scalar whose type differs from the target's.
    ScanTypeMismatch,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    expected: Option<ScalarType>,
    found: Option<ScalarType>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            expected: None,
            found: None,
            source: None,
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Decode)
            .with_message(err.to_string())
            .with_source(err)
    }

    pub(crate) fn encode(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Encode)
            .with_message(err.to_string())
            .with_source(err)
    }

    pub(crate) fn scan_mismatch(expected: ScalarType, found: ScalarType) -> Self {
        Self::new(ErrorKind::ScanTypeMismatch)
            .with_message(format!("cannot scan {found} into {expected}"))
            .with_types(expected, found)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Scalar type the scan target accepts, for `ScanTypeMismatch`.
    pub fn expected(&self) -> Option<ScalarType> {
        self.expected
    }

    /// Scalar type the driver actually produced, for `ScanTypeMismatch`.
    pub fn found(&self) -> Option<ScalarType> {
        self.found
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_types(mut self, expected: ScalarType, found: ScalarType) -> Self {
        self.expected = Some(expected);
        self.found = Some(found);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Borrows the underlying JSON error of a `Decode` or `Encode` failure.
    pub fn json_source(&self) -> Option<&serde_json::Error> {
        self.source
            .as_ref()
            .and_then(|source| source.downcast_ref::<serde_json::Error>())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
