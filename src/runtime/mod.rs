//! Virtual file runtime.
//!
//! `store.rs` is compiled here so it can be tested, and is also emitted
//! verbatim as the preamble of every generated module.

mod store;


pub use store::{Entry, Error, File, Store, Whence, MAX_SIZE};

/// Source text of the runtime, as embedded into generated modules.
pub const RUNTIME_SOURCE: &str = include_str!("store.rs");
