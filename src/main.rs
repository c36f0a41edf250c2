//! proxygen CLI - generate guarded delegation proxies from descriptors
//!
//! Commands:
//!   proxygen generate <descriptor.json>... -o <dir>  - generate proxy sources

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use proxygen::model::SourceType;
use proxygen::{ClassGenerator, FsSink, GeneratorConfig, PolicyRegistry};

#[derive(Parser)]
#[command(name = "proxygen")]
#[command(about = "Generate guarded delegation proxies from type descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate proxy sources from descriptor files
    Generate {
        /// JSON type-descriptor files, one source type each
        descriptors: Vec<PathBuf>,

        /// Root directory for generated sources
        #[arg(long, short = 'o', default_value = "generated")]
        out_dir: PathBuf,

        /// Log generation steps
        #[arg(long)]
        debug: bool,

        /// Additional annotation names to mirror onto generated elements
        #[arg(long = "mirror")]
        mirror: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            descriptors,
            out_dir,
            debug,
            mirror,
        } => generate_command(&descriptors, out_dir, debug, mirror),
    }
}

fn generate_command(
    descriptors: &[PathBuf],
    out_dir: PathBuf,
    debug: bool,
    mirror: Vec<String>,
) -> anyhow::Result<()> {
    if descriptors.is_empty() {
        anyhow::bail!("no descriptor files given");
    }

    let mut config = GeneratorConfig::new().with_debug(debug);
    config.mirror_allow = mirror;

    let registry = PolicyRegistry::new();
    let mut sink = FsSink::new(out_dir);
    let mut failed = 0usize;

    for path in descriptors {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let source: SourceType = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid descriptor {}: {}", path.display(), e))?;

        let mut generator = ClassGenerator::new(&source, config.clone(), &registry);
        if generator.compose(&mut sink) {
            println!("generated Proxy_{} ({})", source.flat_name, source.package);
        } else {
            failed += 1;
            eprintln!("failed: {}", source.qualified_name);
            eprint!("{}", generator.errors());
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} descriptor(s) failed", failed, descriptors.len());
    }
    Ok(())
}
