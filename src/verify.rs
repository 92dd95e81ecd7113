//! Entry verification: the gate every record passes before it may enter the
//! canonical store.
//!
//! Verification is deliberately redundant. The selector is computed directly
//! from the normalized text, and the signature is independently re-parsed
//! through the structural ABI acceptor whose canonical rendering must match
//! the input exactly. The second path catches tokens that are lexically
//! legal but not real types, and aliased spellings that would hash
//! differently from their canonical form.

use crate::abi::Function;
use crate::errors::Rejection;
use crate::selector::hasher::{selector_of, Selector};
use crate::selector::parser;

/// Verify one candidate signature against the selector its file declares.
///
/// Returns the trimmed signature text on success; every failure is a
/// structured [`Rejection`] carrying the context needed to log and continue.
pub fn verify(declared: Selector, raw: &str) -> Result<String, Rejection> {
    let trimmed = raw.trim();

    let decl = parser::parse(trimmed)?;
    let function = Function::from_declaration(&decl)?;

    let canonical = function.signature();
    if canonical != trimmed {
        return Err(Rejection::SignatureRoundtripMismatch {
            canonical,
            input: trimmed.to_string(),
        });
    }

    let computed = selector_of(trimmed);
    if computed != declared {
        return Err(Rejection::HashMismatch {
            signature: trimmed.to_string(),
            declared: hex::encode(declared),
            computed: hex::encode(computed),
        });
    }

    Ok(trimmed.to_string())
}
