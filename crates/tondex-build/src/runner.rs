//! Build runner that orchestrates a one-shot compile of the registry.

use std::sync::mpsc::Sender;

use tondex_sources::SourceRegistry;

use crate::compiler::{CompileResultSet, Compiler};
use crate::error::{BuildError, Result};

/// A sink for the status line, allowing redirection away from stdout.
pub type ReportSink = Sender<String>;

/// Options for a build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    registry: SourceRegistry,
    verbose: bool,
    report_sink: Option<ReportSink>,
}

impl BuildOptions {
    /// Options for building the built-in DEX registry.
    pub fn new() -> Self {
        Self {
            registry: SourceRegistry::dex(),
            verbose: false,
            report_sink: None,
        }
    }

    /// Build a different registry.
    pub fn registry(mut self, registry: SourceRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Redirect the status line to a channel instead of stdout.
    pub fn report_sink(mut self, sink: ReportSink) -> Self {
        self.report_sink = Some(sink);
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a completed build.
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of contracts the compiler produced artifacts for.
    pub compiled: usize,
    /// The artifacts themselves, keyed by contract name.
    pub artifacts: CompileResultSet,
}

/// Drives a full build of all registered contracts.
pub struct BuildRunner<C> {
    compiler: C,
    options: BuildOptions,
}

impl<C: Compiler> BuildRunner<C> {
    pub fn new(compiler: C, options: BuildOptions) -> Self {
        Self { compiler, options }
    }

    /// Compile every registered contract and report the summary count.
    ///
    /// Invokes the compiler exactly once and emits one status line on
    /// success. The count is the result set's key count, which for a
    /// partial result may be smaller than the registry. A compile failure
    /// propagates out before any line is emitted.
    ///
    /// No state is carried between invocations; the registry is immutable
    /// across calls.
    pub async fn run(&self) -> Result<BuildSummary> {
        if self.options.verbose {
            eprintln!(
                "Building {} registered contracts",
                self.options.registry.len()
            );
        }

        let artifacts = self.compiler.compile_all(&self.options.registry).await?;

        // Every result key must name a registered contract
        for name in artifacts.keys() {
            if !self.options.registry.contains(*name) {
                return Err(BuildError::OrphanResult { name: *name });
            }
        }

        let compiled = artifacts.len();
        self.report(format!("Successfully compiled {} tolk contracts", compiled));

        Ok(BuildSummary {
            compiled,
            artifacts,
        })
    }

    /// Send the status line to the sink, or stdout if no sink is configured.
    fn report(&self, line: String) {
        if let Some(ref sink) = self.options.report_sink {
            // If the channel is disconnected, the line is dropped
            let _ = sink.send(line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_builder() {
        let (tx, _rx) = std::sync::mpsc::channel();
        let opts = BuildOptions::new()
            .registry(SourceRegistry::empty())
            .verbose(true)
            .report_sink(tx);

        assert!(opts.registry.is_empty());
        assert!(opts.verbose);
        assert!(opts.report_sink.is_some());
    }

    #[test]
    fn test_default_options_use_dex_registry() {
        let opts = BuildOptions::default();
        assert_eq!(opts.registry.len(), 3);
    }
}
