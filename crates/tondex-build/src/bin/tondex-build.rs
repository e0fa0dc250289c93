//! tondex build CLI.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tondex_build::{BuildOptions, BuildRunner, TolkcCompiler};

#[derive(Parser, Debug)]
#[command(name = "tondex-build")]
#[command(about = "Compiles the registered tondex tolk contracts and reports a summary")]
#[command(version)]
struct Args {
    /// Root directory containing the sources/ tree
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Path to the tolk compiler executable
    #[arg(long, value_name = "PATH", default_value = "tolk")]
    tolk: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if args.verbose { "debug" } else { "info" })
        }))
        .with_writer(std::io::stderr)
        .init();

    let compiler = TolkcCompiler::with_program(args.tolk).root(args.root);
    let options = BuildOptions::new().verbose(args.verbose);
    let runner = BuildRunner::new(compiler, options);

    if let Err(e) = runner.run().await {
        eprintln!("Build failed: {}", e);
        process::exit(1);
    }
}
