//! Build driver for the tondex tolk contracts.
//!
//! Drives a one-shot compile of every contract in the source registry
//! through the [`Compiler`] seam and reports a summary count. The default
//! compiler shells out to the external `tolk` executable; tests substitute
//! their own implementation.

pub mod compiler;
pub mod error;
pub mod runner;
pub mod tolkc;

pub use compiler::{CompileResultSet, CompiledContract, Compiler};
pub use error::{BuildError, Result};
pub use runner::{BuildOptions, BuildRunner, BuildSummary, ReportSink};
pub use tolkc::TolkcCompiler;
