//! Static source registry for the tondex tolk contracts.
//!
//! The set of contracts is closed and known at compile time. The registry
//! is built once at startup and never mutated; everything downstream
//! (the build driver, the compiler adapter) reads it through shared
//! references.

mod contract;
mod registry;

pub use contract::{ContractName, UnknownContract};
pub use registry::{ContractEntry, RegistryError, SourceRegistry, SOURCE_ROOT};
