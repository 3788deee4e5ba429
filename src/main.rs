use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gst::{Transpiler, TranspilerConfig, UnsupportedPolicy, parser};

/// Translate Python assignments and `if` headers into Go statements.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Python source file; reads stdin when omitted
    input: Option<PathBuf>,

    /// YAML file with transpiler settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to handle statements outside the supported subset
    #[arg(long, value_enum, env = "GST_UNSUPPORTED")]
    unsupported: Option<UnsupportedPolicy>,

    /// Escape quotes, backslashes and control characters in string literals
    #[arg(long, env = "GST_ESCAPE_STRINGS")]
    escape_strings: bool,

    /// Log each translated statement to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            TranspilerConfig::from_yaml(&raw)
                .with_context(|| format!("Loading {}", path.display()))?
        }
        None => TranspilerConfig::default(),
    };
    if let Some(policy) = cli.unsupported {
        config.unsupported = policy;
    }
    if cli.escape_strings {
        config.escape_strings = true;
    }

    let (source, origin) = if let Some(path) = &cli.input {
        let source =
            fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        (source, path.display().to_string())
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Reading stdin")?;
        (buffer, "stdin".to_string())
    };

    let program = parser::parse(&source).with_context(|| format!("Parsing {origin}"))?;
    let output = Transpiler::new(config)
        .transpile(&program)
        .with_context(|| format!("Translating {origin}"))?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
