use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use cuadra_core::{Statement, parse_pages};
use cuadra_export::{summarize, write_statement_csv};
use cuadra_ingest::ExtractedDocument;

#[derive(Parser, Debug)]
#[command(name = "cuadra", version, about = "BBVA EECC statement text to structured records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export statements to CSV (one output per input document)
    Export {
        /// Extractor hand-offs: .json dumps, or raw layout text files
        files: Vec<PathBuf>,

        /// Creation timestamp (RFC 3339 or PDF "D:" form); overrides the
        /// dump metadata and is required for raw text inputs
        #[arg(long)]
        created: Option<String>,

        /// Output path (single input only; default: input with .csv extension)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Keep the cover and back pages of raw text inputs
        #[arg(long)]
        keep_edge_pages: bool,
    },

    /// Print per-holder totals for one statement
    Summary {
        file: PathBuf,

        /// Creation timestamp (RFC 3339 or PDF "D:" form)
        #[arg(long)]
        created: Option<String>,

        /// Keep the cover and back pages of raw text inputs
        #[arg(long)]
        keep_edge_pages: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export {
            files,
            created,
            out,
            keep_edge_pages,
        } => {
            if files.is_empty() {
                bail!("no input files (pass one or more extractor hand-offs)");
            }
            if out.is_some() && files.len() > 1 {
                bail!("--out only applies to a single input");
            }

            // Each document fails or exports on its own; one bad
            // statement must not stop the batch.
            let mut failures = 0usize;
            for file in &files {
                let target = out
                    .clone()
                    .unwrap_or_else(|| file.with_extension("csv"));
                match export_one(file, created.as_deref(), &target, keep_edge_pages) {
                    Ok(rows) => println!(
                        "{}: {} operations -> {}",
                        file.display(),
                        rows,
                        target.display()
                    ),
                    Err(err) => {
                        eprintln!("{}: {err:#}", file.display());
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} of {} documents failed", files.len());
            }
        }

        Command::Summary {
            file,
            created,
            keep_edge_pages,
        } => {
            let statement = parse_document(&file, created.as_deref(), keep_edge_pages)?;
            println!("Statement created {}\n", statement.creation_date.to_rfc3339());
            for summary in summarize(&statement) {
                println!(
                    "{} - {} | {} operations | PEN {:.2} | USD {:.2}",
                    summary.name,
                    summary.card_last4,
                    summary.operations,
                    summary.total_pen,
                    summary.total_usd
                );
            }
        }
    }

    Ok(())
}

/// Load one extraction hand-off. A `.json` path is an extractor dump;
/// anything else is raw layout text, for which `--created` supplies what
/// the document metadata would.
fn load_document(
    path: &Path,
    created: Option<&str>,
    keep_edge_pages: bool,
) -> Result<ExtractedDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut doc = if path.extension().is_some_and(|ext| ext == "json") {
        ExtractedDocument::from_json(&text)
            .with_context(|| format!("decoding {}", path.display()))?
    } else {
        ExtractedDocument::from_layout_text(&text, None, keep_edge_pages)
    };

    if let Some(created) = created {
        doc.created = Some(created.to_string());
    }
    Ok(doc)
}

fn parse_document(path: &Path, created: Option<&str>, keep_edge_pages: bool) -> Result<Statement> {
    let doc = load_document(path, created, keep_edge_pages)?;
    let created = doc.creation_date()?;
    parse_pages(&doc.pages, created).with_context(|| format!("parsing {}", path.display()))
}

fn export_one(
    path: &Path,
    created: Option<&str>,
    target: &Path,
    keep_edge_pages: bool,
) -> Result<usize> {
    let statement = parse_document(path, created, keep_edge_pages)?;
    let rows: usize = statement.holders.iter().map(|h| h.operations.len()).sum();

    let out = fs::File::create(target)
        .with_context(|| format!("creating {}", target.display()))?;
    write_statement_csv(out, &statement)?;
    Ok(rows)
}
