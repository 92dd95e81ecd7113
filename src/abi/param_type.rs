use crate::errors::AbiError;
use std::fmt;

/// An elementary ABI type token, possibly wrapped in array suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Address,
    Bool,
    String,
    Bytes,
    /// `bytesN`, 1 <= N <= 32.
    FixedBytes(usize),
    /// `uintN`, N a multiple of 8 in 8..=256. `uint` is an alias for
    /// `uint256`; the canonical rendering always carries the width.
    Uint(usize),
    /// `intN`, same width rules as `Uint`. `int` aliases `int256`.
    Int(usize),
    Function,
    /// Dynamic array, `T[]`.
    Array(Box<ParamType>),
    /// Fixed-length array, `T[N]` with N > 0.
    FixedArray(Box<ParamType>, usize),
}

impl ParamType {
    /// Parse a single type token. Array suffixes are peeled from the right,
    /// so `uint256[4][]` is a dynamic array of fixed arrays.
    pub fn parse(token: &str) -> Result<Self, AbiError> {
        if let Some(element) = token.strip_suffix("[]") {
            return Ok(Self::Array(Box::new(Self::parse(element)?)));
        }
        if let Some(stripped) = token.strip_suffix(']') {
            let open = stripped
                .rfind('[')
                .ok_or_else(|| AbiError::UnknownType(token.to_string()))?;
            let length: usize = stripped[open + 1..]
                .parse()
                .map_err(|_| AbiError::InvalidArrayLength(token.to_string()))?;
            if length == 0 {
                return Err(AbiError::InvalidArrayLength(token.to_string()));
            }
            let element = Self::parse(&stripped[..open])?;
            return Ok(Self::FixedArray(Box::new(element), length));
        }
        Self::elementary(token)
    }

    fn elementary(token: &str) -> Result<Self, AbiError> {
        match token {
            "address" => Ok(Self::Address),
            "bool" => Ok(Self::Bool),
            "string" => Ok(Self::String),
            "bytes" => Ok(Self::Bytes),
            "function" => Ok(Self::Function),
            "uint" => Ok(Self::Uint(256)),
            "int" => Ok(Self::Int(256)),
            _ => Self::sized(token),
        }
    }

    fn sized(token: &str) -> Result<Self, AbiError> {
        if let Some(digits) = token.strip_prefix("uint") {
            return Ok(Self::Uint(Self::int_width(token, digits)?));
        }
        if let Some(digits) = token.strip_prefix("int") {
            return Ok(Self::Int(Self::int_width(token, digits)?));
        }
        if let Some(digits) = token.strip_prefix("bytes") {
            let width: usize = digits
                .parse()
                .map_err(|_| AbiError::UnknownType(token.to_string()))?;
            if width == 0 || width > 32 {
                return Err(AbiError::InvalidBytesWidth(token.to_string()));
            }
            return Ok(Self::FixedBytes(width));
        }
        Err(AbiError::UnknownType(token.to_string()))
    }

    fn int_width(token: &str, digits: &str) -> Result<usize, AbiError> {
        let width: usize = digits
            .parse()
            .map_err(|_| AbiError::UnknownType(token.to_string()))?;
        if width == 0 || width > 256 || width % 8 != 0 {
            return Err(AbiError::InvalidIntWidth(token.to_string()));
        }
        Ok(width)
    }
}

impl fmt::Display for ParamType {
    /// Canonical rendering; width aliases are always expanded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
            Self::Bytes => write!(f, "bytes"),
            Self::FixedBytes(width) => write!(f, "bytes{width}"),
            Self::Uint(width) => write!(f, "uint{width}"),
            Self::Int(width) => write!(f, "int{width}"),
            Self::Function => write!(f, "function"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::FixedArray(element, length) => write!(f, "{element}[{length}]"),
        }
    }
}
