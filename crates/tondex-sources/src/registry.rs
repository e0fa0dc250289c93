//! Source registry mapping contract names to their tolk source files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::contract::ContractName;

/// Root of the contract source tree, relative to the project root.
pub const SOURCE_ROOT: &str = "sources/contracts/tolk";

/// A single registered contract source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEntry {
    /// Contract identifier.
    pub name: ContractName,
    /// Source file path, relative to the project root.
    pub path: PathBuf,
}

impl ContractEntry {
    pub fn new(name: ContractName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }
}

/// Errors from registry construction.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate registry entry for '{0}'")]
    DuplicateName(ContractName),

    #[error("empty source path for '{0}'")]
    EmptyPath(ContractName),

    #[error("source path for '{0}' must be relative, got {path}", path = .1.display())]
    AbsolutePath(ContractName, PathBuf),
}

/// An immutable mapping from contract name to source path.
///
/// Built once at startup and never mutated afterwards. Iteration follows
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    entries: Vec<ContractEntry>,
}

impl SourceRegistry {
    /// Build a registry from a list of entries.
    ///
    /// Names must be unique and paths must be non-empty relative paths.
    pub fn new(entries: Vec<ContractEntry>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.path.as_os_str().is_empty() {
                return Err(RegistryError::EmptyPath(entry.name));
            }
            if entry.path.is_absolute() {
                return Err(RegistryError::AbsolutePath(entry.name, entry.path.clone()));
            }
            if !seen.insert(entry.name) {
                return Err(RegistryError::DuplicateName(entry.name));
            }
        }

        Ok(Self { entries })
    }

    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in DEX source map.
    pub fn dex() -> Self {
        let root = Path::new(SOURCE_ROOT);
        Self {
            entries: vec![
                ContractEntry::new(ContractName::TonVault, root.join("ton-vault.tolk")),
                ContractEntry::new(
                    ContractName::LiquidityDeposit,
                    root.join("liquidity-deposit.tolk"),
                ),
                ContractEntry::new(ContractName::AmmPool, root.join("amm-pool.tolk")),
            ],
        }
    }

    /// Look up the entry for a contract.
    pub fn get(&self, name: ContractName) -> Option<&ContractEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Whether the registry has an entry for `name`.
    pub fn contains(&self, name: ContractName) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ContractEntry> {
        self.entries.iter()
    }

    /// Iterate over the registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = ContractName> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
