// Export modules for library usage
pub mod abi;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod io;
pub mod selector;
pub mod store;
pub mod verify;

// Re-export commonly used types
pub use crate::abi::{Function, ParamType};
pub use crate::errors::{AbiError, ParseError, Rejection};
pub use crate::selector::{parse, selector_of, Selector, SelectorDeclaration};
pub use crate::store::{CanonicalStore, RecordOutcome, StoreBuilder};
pub use crate::verify::verify;
