//! Shared error types for the verification pipeline.

use thiserror::Error;

/// Lexical failure from the selector grammar parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match the `name(type,type,...)` shape: missing
    /// parentheses, nested parentheses, disallowed characters, or trailing
    /// garbage.
    #[error("signature `{0}` does not match the `name(type,...)` shape")]
    Shape(String),
}

/// Structural failure from the ABI type acceptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("unknown ABI type `{0}`")]
    UnknownType(String),

    /// Integer widths must be a multiple of 8 in 8..=256.
    #[error("invalid integer width in `{0}`")]
    InvalidIntWidth(String),

    /// Fixed bytes widths must be in 1..=32.
    #[error("invalid bytes width in `{0}`")]
    InvalidBytesWidth(String),

    /// Fixed array lengths must be positive decimal integers.
    #[error("invalid array length in `{0}`")]
    InvalidArrayLength(String),
}

/// Why a record was refused by the verifier.
///
/// Every variant carries enough context to log and move on; nothing past the
/// verification boundary panics or propagates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("malformed signature: {0}")]
    MalformedSignature(#[from] ParseError),

    #[error("invalid ABI type: {0}")]
    InvalidAbiType(#[from] AbiError),

    /// The acceptor's canonical rendering differs from the input text,
    /// typically because the input used a width alias such as `uint`.
    #[error("round-trip mismatch: acceptor renders `{canonical}`, input was `{input}`")]
    SignatureRoundtripMismatch { canonical: String, input: String },

    /// The selector computed from the signature does not match the one the
    /// file name declares. Both values are reported for diagnosis.
    #[error("hash mismatch for `{signature}`: declared {declared}, computed {computed}")]
    HashMismatch {
        signature: String,
        declared: String,
        computed: String,
    },
}
