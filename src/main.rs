use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use ccan_depends::adapters::fs::provider::DirMetadataProvider;
use ccan_depends::app::engine::DependsEngine;
use ccan_depends::cli;
use ccan_depends::domain::module_id::ModuleId;

/// Spits out a module's archive dependencies (recursively unless --direct).
#[derive(Debug, Parser)]
#[command(name = "ccan-depends", version)]
struct Args {
    /// Module directory, relative to the archive root (e.g. ccan/opt)
    dir: String,

    /// Direct dependencies only, no transitive closure
    #[arg(long)]
    direct: bool,

    /// Include compile-time dependencies that need manual build configuration
    #[arg(long)]
    compile: bool,

    /// Archive root directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Namespace prefix for the listing
    #[arg(long, default_value = "ccan/")]
    prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let provider = Arc::new(DirMetadataProvider::new(args.root));
    let engine = DependsEngine::new(provider, args.prefix);

    cli::resolve_and_print(
        &engine,
        ModuleId::new(args.dir),
        !args.direct,
        args.compile,
    )
}
