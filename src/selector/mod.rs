//! Selector grammar parsing and hashing.
//!
//! A selector is the 4-byte identifier derived from a function's canonical
//! signature text, e.g. `transfer(address,uint256)` -> `a9059cbb`. This
//! module decomposes signature strings (`parser`) and derives their
//! identifying hash (`hasher`).

pub mod hasher;
pub mod parser;

pub use hasher::{selector, selector_of, Selector};
pub use parser::{parse, SelectorDeclaration};
