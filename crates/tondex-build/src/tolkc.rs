//! Adapter for the external `tolk` compiler executable.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tondex_sources::{ContractEntry, SourceRegistry};

use crate::compiler::{CompileResultSet, CompiledContract, Compiler};
use crate::error::{BuildError, Result};

/// Compiles contracts by invoking the `tolk` executable once per entry.
///
/// Entries are compiled sequentially in registry order. The Fift listing is
/// read from the compiler's stdout; a non-zero exit aborts the batch with
/// the captured stderr.
pub struct TolkcCompiler {
    program: PathBuf,
    root: PathBuf,
}

impl TolkcCompiler {
    /// Use the `tolk` executable from PATH, rooted at the current directory.
    pub fn new() -> Self {
        Self::with_program("tolk")
    }

    /// Use a specific compiler executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            root: PathBuf::from("."),
        }
    }

    /// Set the root directory the registry paths are resolved against.
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = dir.into();
        self
    }

    async fn compile_one(&self, entry: &ContractEntry) -> Result<CompiledContract> {
        let source = self.root.join(&entry.path);
        if !source.exists() {
            return Err(BuildError::SourceNotFound(source));
        }

        let output = Command::new(&self.program)
            .arg(&source)
            .current_dir(&self.root)
            .output()
            .await
            .map_err(|e| BuildError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildError::compiler(
                entry.name,
                format!(
                    "exit code {:?}: {}",
                    output.status.code(),
                    stderr.trim()
                ),
            ));
        }

        Ok(CompiledContract {
            fift: String::from_utf8_lossy(&output.stdout).into_owned(),
            boc: Vec::new(),
        })
    }
}

#[async_trait]
impl Compiler for TolkcCompiler {
    async fn compile_all(&self, registry: &SourceRegistry) -> Result<CompileResultSet> {
        let mut results = CompileResultSet::new();

        for entry in registry.iter() {
            tracing::debug!("Compiling contract: {}", entry.name);
            let artifact = self.compile_one(entry).await?;
            results.insert(entry.name, artifact);
        }

        Ok(results)
    }
}

impl Default for TolkcCompiler {
    fn default() -> Self {
        Self::new()
    }
}
