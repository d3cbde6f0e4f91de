use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use redmark::keystore::{FileKeyStore, KeyStore};
use redmark::model::WritingResult;
use redmark::provider::{decode_analysis, decode_dictionary};
use redmark::reconcile::{self, RenderUnit};
use redmark::{article, ReconcileError};
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "redmark")]
#[command(about = "Validate and render AI-generated writing-correction diffs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a provider response against the submitted text
    Validate {
        /// Path to the provider response JSON
        response: PathBuf,

        /// Response kind to decode
        #[arg(short, long, value_enum, default_value_t = ResponseKind::Writing)]
        kind: ResponseKind,

        /// File holding the text the user submitted (the original)
        #[arg(short, long)]
        original: Option<PathBuf>,

        /// File holding the expected corrected text
        #[arg(short, long)]
        current: Option<PathBuf>,
    },

    /// Render a writing-correction response as a highlighted diff
    Render {
        /// Path to the provider response JSON
        response: PathBuf,
    },

    /// Derive a segment diff locally from two text files
    Diff {
        /// The original text file
        original: PathBuf,

        /// The revised text file
        revised: PathBuf,

        /// Emit the segment array as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },

    /// List markdown articles in a directory
    Articles {
        /// Directory containing .md files
        dir: PathBuf,
    },

    /// Manage the provider API key
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

#[derive(Subcommand)]
enum KeyCommands {
    /// Store an API key
    Set { key: String },
    /// Show whether a key is configured
    Show,
    /// Remove the stored key
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResponseKind {
    Writing,
    Analysis,
    Dictionary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            response,
            kind,
            original,
            current,
        } => cmd_validate(&response, kind, original.as_deref(), current.as_deref()),

        Commands::Render { response } => cmd_render(&response),

        Commands::Diff {
            original,
            revised,
            json,
        } => cmd_diff(&original, &revised, json),

        Commands::Articles { dir } => cmd_articles(&dir),

        Commands::Key { command } => cmd_key(command),
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_response(path: &Path) -> Result<serde_json::Value> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn cmd_validate(
    response: &Path,
    kind: ResponseKind,
    original: Option<&Path>,
    current: Option<&Path>,
) -> Result<()> {
    let value = read_response(response)?;
    let original_text = original.map(read_text).transpose()?;
    let current_text = current.map(read_text).transpose()?;

    let outcome = match kind {
        ResponseKind::Writing => {
            let result: WritingResult = serde_json::from_value(value)
                .context("response does not match the writing-result shape")?;
            reconcile::validate(
                &result.segments,
                original_text.as_deref(),
                current_text.as_deref(),
            )
        }
        ResponseKind::Analysis => {
            decode_analysis(value, original_text.as_deref().unwrap_or_default())
                .context("analysis response rejected")?;
            Ok(())
        }
        ResponseKind::Dictionary => {
            decode_dictionary(value).context("dictionary response rejected")?;
            Ok(())
        }
    };

    match outcome {
        Ok(()) => {
            println!("{}", "response reconciles cleanly".green().bold());
            Ok(())
        }
        Err(ReconcileError::ReconciliationMismatch {
            view,
            expected,
            reconstructed,
        }) => {
            eprintln!(
                "{}",
                format!("{view} text does not reconcile").red().bold()
            );
            display_diff(&expected, &reconstructed);
            anyhow::bail!("validation failed: {view} reconstruction mismatch");
        }
        Err(err @ ReconcileError::MalformedSegment { .. }) => {
            eprintln!("{}", err.to_string().red().bold());
            anyhow::bail!("validation failed");
        }
    }
}

fn cmd_render(response: &Path) -> Result<()> {
    let value = read_response(response)?;
    let result: WritingResult =
        serde_json::from_value(value).context("response does not match the writing-result shape")?;

    // Structural checks only: original text is not available here.
    if let Err(err) = reconcile::validate(&result.segments, None, None) {
        eprintln!("{}", err.to_string().red().bold());
        eprintln!("{}", "falling back to plain text".yellow());
        println!("{}", result.plain_text());
        return Ok(());
    }

    if !result.general_feedback.is_empty() {
        println!("{}\n", result.general_feedback.dimmed());
    }
    print_units(&result.segments);
    Ok(())
}

fn cmd_diff(original: &Path, revised: &Path, json: bool) -> Result<()> {
    let original_text = read_text(original)?;
    let revised_text = read_text(revised)?;
    let segments = reconcile::derive_segments(&original_text, &revised_text);

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print_units(&segments);
    }
    Ok(())
}

fn print_units(segments: &[redmark::Segment]) {
    for unit in reconcile::render(segments) {
        match unit {
            RenderUnit::Plain(text) => print!("{text}"),
            RenderUnit::Insertion { text, .. } => print!("{}", text.green()),
            RenderUnit::Deletion { text, .. } => print!("{}", text.red().strikethrough()),
            RenderUnit::LineBreak => println!(),
        }
    }
    println!();
}

fn cmd_articles(dir: &Path) -> Result<()> {
    let articles = article::load_articles(dir)
        .with_context(|| format!("failed to load articles from {}", dir.display()))?;

    if articles.is_empty() {
        println!("{}", "no articles found".yellow());
        return Ok(());
    }

    for article in &articles {
        let date = if article.date.is_empty() {
            "undated".to_string()
        } else {
            article.date.clone()
        };
        println!(
            "{}  {}  {}",
            date.dimmed(),
            article.title.bold(),
            format!("[{}] by {} ({})", article.category, article.author, article.id).dimmed()
        );
    }
    Ok(())
}

fn cmd_key(command: KeyCommands) -> Result<()> {
    let store = FileKeyStore::open_default()?;

    match command {
        KeyCommands::Set { key } => {
            store.set(&key)?;
            println!(
                "{}",
                format!("key stored at {}", store.path().display()).green()
            );
        }
        KeyCommands::Show => match store.get()? {
            Some(key) => {
                let visible = key.chars().take(4).collect::<String>();
                println!("key configured: {visible}… ({} chars)", key.len());
            }
            None => println!("{}", "no key configured".yellow()),
        },
        KeyCommands::Clear => {
            store.clear()?;
            println!("{}", "key cleared".green());
        }
    }
    Ok(())
}

/// Show a unified diff between the expected and reconstructed text.
fn display_diff(expected: &str, reconstructed: &str) {
    eprintln!("{}", "--- expected".dimmed());
    eprintln!("{}", "+++ reconstructed".dimmed());

    let diff = TextDiff::from_lines(expected, reconstructed);
    for change in diff.iter_all_changes() {
        let line = change.value();
        match change.tag() {
            ChangeTag::Delete => eprint!("{}", format!("-{line}").red()),
            ChangeTag::Insert => eprint!("{}", format!("+{line}").green()),
            ChangeTag::Equal => eprint!(" {line}"),
        }
        if !line.ends_with('\n') {
            eprintln!();
        }
    }
}
