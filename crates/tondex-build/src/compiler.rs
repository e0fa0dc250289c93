//! The compiler seam and compiled-artifact types.

use std::collections::HashMap;

use async_trait::async_trait;
use tondex_sources::{ContractName, SourceRegistry};

use crate::error::Result;

/// A compiled tolk contract.
///
/// Held in memory for the duration of a build; writing the Fift listing or
/// the code cell out to the filesystem is future work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledContract {
    /// Fift assembly listing produced by the compiler.
    pub fift: String,
    /// Serialized code cell (bag-of-cells bytes). Empty when the compiler
    /// was not asked to produce one.
    pub boc: Vec<u8>,
}

/// Artifacts from one compile-all invocation, keyed by contract name.
///
/// Every key must name a contract present in the registry that was
/// compiled; the runner rejects orphan keys.
pub type CompileResultSet = HashMap<ContractName, CompiledContract>;

/// Bulk compilation of every contract in a source registry.
#[async_trait]
pub trait Compiler {
    /// Compile every entry in `registry`, returning artifacts keyed by
    /// contract name. The first failure aborts the batch.
    async fn compile_all(&self, registry: &SourceRegistry) -> Result<CompileResultSet>;
}
