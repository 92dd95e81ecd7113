//! Structural ABI acceptor.
//!
//! This is the stricter second verification path: argument tokens that pass
//! the lexical grammar must additionally be recognized here as real ABI
//! types, and the re-rendered canonical signature must match the input
//! text. Tuples stay out of scope; only elementary types and their array
//! suffixes are modeled.

pub mod function;
pub mod param_type;

pub use function::Function;
pub use param_type::ParamType;
