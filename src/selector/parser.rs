use crate::errors::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Accepts `name(type,type,...)`. The name may not contain parentheses
    /// and the argument list is limited to alphanumerics, commas, and array
    /// brackets, which keeps tuple types out of the grammar entirely.
    ///
    /// Uppercase letters are not part of the ABI spec, but the general shape
    /// is still valid here; the type acceptor rejects them later.
    static ref SELECTOR_RE: Regex =
        Regex::new(r"^([^()]+)\(([A-Za-z0-9,\[\]]*)\)$").unwrap();
}

/// Structural form of a signature: a function name and its top-level
/// argument type tokens, in order. Tokens are kept raw; decomposing them is
/// the type acceptor's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorDeclaration {
    pub name: String,
    pub arguments: Vec<String>,
}

impl SelectorDeclaration {
    /// Canonical signature text: no whitespace, exact comma separation,
    /// casing preserved.
    pub fn canonical_text(&self) -> String {
        format!("{}({})", self.name, self.arguments.join(","))
    }
}

/// Decompose a raw signature string into its declaration.
///
/// An empty argument list (`foo()`) yields zero arguments, not an error.
pub fn parse(signature: &str) -> Result<SelectorDeclaration, ParseError> {
    let captures = SELECTOR_RE
        .captures(signature)
        .ok_or_else(|| ParseError::Shape(signature.to_string()))?;

    let name = captures[1].to_string();
    let args = &captures[2];
    let arguments = if args.is_empty() {
        Vec::new()
    } else {
        args.split(',').map(str::to_string).collect()
    };

    Ok(SelectorDeclaration { name, arguments })
}
