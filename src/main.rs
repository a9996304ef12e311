//! prdpatch: section-aware editing for markdown PRDs.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use prdpatch::compliance::{self, ComplianceReport};
use prdpatch::config::Config;
use prdpatch::edit_plan::EditPlan;
use prdpatch::offsets::utf16_len;
use prdpatch::patch::{self, GenerationTarget, InsertMode, Selection};
use prdpatch::preview;
use prdpatch::store::{DraftStore, FsStore};
use prdpatch::{input, Document, Error, Result};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "prdpatch")]
#[command(about = "Section-aware editing for markdown PRDs", long_about = None)]
struct Args {
    /// Config file (default: prdpatch.toml in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the heading hierarchy of a draft
    Sections {
        /// Draft to parse
        file: PathBuf,
    },
    /// Check drafts against the section template
    Check {
        /// Files or directories to check
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// File extensions to match
        #[arg(long, short = 'e', value_name = "EXT")]
        ext: Vec<String>,

        /// Exit with failure if any draft misses a required section
        #[arg(long)]
        strict: bool,
    },
    /// Resolve a section label to its line range
    Locate {
        /// Draft to search
        file: PathBuf,
        /// Section label, or the full-document label
        section: String,
    },
    /// Place text into a draft and print (or save) the result
    Patch {
        #[command(flatten)]
        placement: Placement,

        /// Save the result back to the draft
        #[arg(long)]
        write: bool,
    },
    /// Show a unified diff of a placement without saving
    Preview {
        #[command(flatten)]
        placement: Placement,

        /// Lines of context around each hunk
        #[arg(long, default_value_t = 3)]
        context: usize,
    },
    /// Apply an edit plan JSON file
    Apply {
        /// Plan to apply
        plan: PathBuf,

        /// Compute the result without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Print an empty draft containing every template section
    Skeleton {
        /// Document title
        #[arg(long, default_value = "Untitled PRD")]
        title: String,
    },
}

#[derive(clap::Args)]
struct Placement {
    /// Draft to edit
    file: PathBuf,

    /// Section to replace (default: the full-document label)
    #[arg(long, short = 's')]
    section: Option<String>,

    /// Insert at the selection even if the section exists
    #[arg(long)]
    cursor: bool,

    /// Selection start in UTF-16 code units (default: end of draft)
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Selection end in UTF-16 code units (default: selection start)
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    /// Text to place
    #[arg(long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read the text to place from a file (default: stdin)
    #[arg(long, value_name = "PATH")]
    text_file: Option<PathBuf>,
}

impl Placement {
    fn request(&self, content: &str, cfg: &Config) -> GenerationTarget {
        let end_of_draft = i64::try_from(utf16_len(content)).unwrap_or(i64::MAX);
        let start = self.start.unwrap_or(end_of_draft);
        GenerationTarget {
            section: self
                .section
                .clone()
                .unwrap_or_else(|| cfg.full_document_label.clone()),
            mode: if self.cursor {
                InsertMode::AtCursor
            } else {
                InsertMode::ReplaceSection
            },
            selection: Selection {
                start,
                end: self.end.unwrap_or(start),
            },
        }
    }

    fn text(&self) -> io::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.text_file {
            return std::fs::read_to_string(path);
        }
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let mut cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let store = FsStore::new(".", cfg.backup);

    match args.command {
        Command::Sections { file } => {
            let doc = load(&store, &file, &cfg)?;
            if args.json {
                print_json(doc.tree())?;
            } else {
                for node in doc.headers() {
                    let indent = usize::from(node.level - 1) * 2;
                    println!(
                        "{:indent$}{}  [{}..{})",
                        "",
                        node.heading_line(),
                        node.start_line,
                        node.end_line
                    );
                }
            }
        }
        Command::Check { paths, ext, strict } => {
            // Override config with command line args
            if !ext.is_empty() {
                cfg.file_extensions = ext;
            }
            let files = input::find_documents(paths, &cfg.file_extensions)?;
            if files.is_empty() {
                eprintln!("No matching files found");
                return Ok(ExitCode::SUCCESS);
            }

            let template = cfg.template();
            let mut reports = Vec::with_capacity(files.len());
            for file in &files {
                let doc = load(&store, file, &cfg)?;
                reports.push(FileReport {
                    file: file.display().to_string(),
                    report: compliance::check(doc.headers(), &template),
                });
            }

            if args.json {
                print_json(&reports)?;
            } else {
                for entry in &reports {
                    print_report(entry);
                }
            }
            if strict && reports.iter().any(|r| !r.report.is_compliant()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Locate { file, section } => {
            let doc = load(&store, &file, &cfg)?;
            let range = doc.locate_with_sentinel(&section, &cfg.full_document_label);
            let matches = doc.matching_headers(&section);
            if matches.len() > 1 {
                tracing::warn!(
                    section = %section,
                    candidates = matches.len(),
                    "label matches several headings, using the first"
                );
            }
            if args.json {
                print_json(&range)?;
            } else if range.exists {
                println!("lines {}..{}", range.start_line, range.end_line);
            } else {
                println!("not found (would insert at line {})", range.start_line);
            }
        }
        Command::Patch { placement, write } => {
            let doc = load(&store, &placement.file, &cfg)?;
            let request = placement.request(doc.content(), &cfg);
            let text = placement.text()?;
            let applied = patch::apply_generated(&doc, &request, &text, &cfg.full_document_label);
            if applied.fell_back {
                eprintln!(
                    "Section '{}' not found, inserted at cursor instead",
                    request.section
                );
            }
            if write {
                store.save(&id_of(&placement.file), &applied.result.new_content)?;
            }
            if args.json {
                print_json(&applied)?;
            } else if !write {
                print!("{}", applied.result.new_content);
            }
        }
        Command::Preview { placement, context } => {
            let doc = load(&store, &placement.file, &cfg)?;
            let request = placement.request(doc.content(), &cfg);
            let text = placement.text()?;
            let preview =
                preview::preview_generated(&doc, &request, &text, &cfg.full_document_label);
            if preview.fell_back {
                eprintln!(
                    "Section '{}' not found, previewing cursor insertion",
                    request.section
                );
            }
            if args.json {
                print_json(&preview)?;
            } else {
                let diff = diffy::DiffOptions::new()
                    .set_context_len(context)
                    .create_patch(&preview.original, &preview.modified);
                print!("{diff}");
            }
        }
        Command::Apply { plan, dry_run } => {
            let plan = EditPlan::from_json(&std::fs::read_to_string(plan)?)?;
            let outcomes = if dry_run {
                plan.compute(&store, cfg.format(), &cfg.full_document_label)?
            } else {
                plan.apply(&store, cfg.format(), &cfg.full_document_label)?
            };
            if args.json {
                print_json(&outcomes)?;
            } else {
                for outcome in &outcomes {
                    let fallbacks = outcome.applied.iter().filter(|a| a.fell_back).count();
                    println!(
                        "{}: {} edit(s), {} cursor fallback(s){}",
                        outcome.file_name,
                        outcome.applied.len(),
                        fallbacks,
                        if outcome.is_unchanged() { ", unchanged" } else { "" }
                    );
                }
            }
        }
        Command::Skeleton { title } => {
            print!("{}", cfg.template().skeleton(&title));
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: ComplianceReport,
}

fn id_of(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn load(store: &FsStore, path: &Path, cfg: &Config) -> Result<Document> {
    let content = store.load(&id_of(path))?;
    Ok(Document::with_format(content, cfg.format()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(Error::Output)?;
    println!("{json}");
    Ok(())
}

fn print_report(entry: &FileReport) {
    let report = &entry.report;
    println!("{}: {}% complete", entry.file, report.completeness_percent);
    for label in &report.present_labels {
        println!("  + {label}");
    }
    for missing in &report.missing_required {
        println!("  - {} (required)", missing.label);
    }
    for missing in &report.missing_recommended {
        println!("  ~ {} (recommended)", missing.label);
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
