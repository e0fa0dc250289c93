//! Error types for the build driver.

use std::path::PathBuf;

use thiserror::Error;
use tondex_sources::ContractName;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("tolk failed on '{contract}': {message}")]
    Compiler {
        contract: ContractName,
        message: String,
    },

    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("compiler returned an artifact for unregistered contract '{name}'")]
    OrphanResult { name: ContractName },
}

impl BuildError {
    pub fn compiler(contract: ContractName, message: impl Into<String>) -> Self {
        BuildError::Compiler {
            contract,
            message: message.into(),
        }
    }
}
