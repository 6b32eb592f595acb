//! owlproto CLI
//!
//! Compiles an OWL ontology into a proto3 schema:
//! load triples → extract classes → resolve properties → resolve inheritance
//! → render. The schema goes to stdout (or `--out`); logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use owlproto_rdfowl::{RdfFormat, TripleStore};
use owlproto_schema::{compile, SchemaConfig};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "owlproto")]
#[command(author, version, about = "Compile an OWL ontology into a proto3 schema")]
struct Cli {
    /// Ontology document (RDF/XML, Turtle or N-Triples); `-` reads stdin.
    ontology: PathBuf,

    /// Input syntax (nt, ttl, rdfxml); guessed from the extension by default.
    #[arg(long)]
    format: Option<RdfFormat>,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Namespace prefix; only classes and properties under it are modeled.
    #[arg(long)]
    namespace: Option<String>,

    /// Name for the `package` line.
    #[arg(long)]
    package: Option<String>,

    /// Field type for properties without an in-namespace range.
    #[arg(long)]
    default_type: Option<String>,

    /// Wrap width for class comments.
    #[arg(long)]
    comment_width: Option<usize>,

    /// Write the schema here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also write the resolved class model as JSON.
    #[arg(long)]
    model_json: Option<PathBuf>,

    /// More log output (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<SchemaConfig> {
    let mut config = match &cli.config {
        Some(path) => SchemaConfig::from_json_file(path)?,
        None => SchemaConfig::default(),
    };
    if let Some(namespace) = &cli.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(package) = &cli.package {
        config.package = package.clone();
    }
    if let Some(default_type) = &cli.default_type {
        config.default_type = default_type.clone();
    }
    if let Some(width) = cli.comment_width {
        config.comment_width = width;
    }
    config.validate()?;
    Ok(config)
}

fn load_ontology(path: &Path, format: Option<RdfFormat>) -> Result<TripleStore> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read ontology from stdin")?;
        let format = format.unwrap_or(RdfFormat::RdfXml);
        return owlproto_rdfowl::load_bytes(&bytes, format)
            .context("failed to load ontology from stdin");
    }

    owlproto_rdfowl::load_file(path, format)
        .with_context(|| format!("failed to load ontology {}", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let store = load_ontology(&cli.ontology, cli.format)?;
    tracing::info!(statements = store.len(), "ontology loaded");

    let schema = compile(&store, &config)?;
    let text = schema.render();

    if let Some(path) = &cli.model_json {
        fs::write(path, schema.model_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  {} {}", "→".cyan(), path.display());
    }

    match &cli.out {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "  {} {} ({} messages)",
                "→".cyan(),
                path.display(),
                schema.registry.len()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("failed to write schema to stdout")?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
