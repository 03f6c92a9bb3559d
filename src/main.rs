//! Gist CLI - Extractive Text Summarizer
//!
//! Command-line interface for summarizing text, PDF and Word documents.

use clap::{Args, Parser, Subcommand};
use gist::{
    clamp_sentence_count, load_document, Config, GistError, ResourceProvider, Result, Statistics,
    Summarizer,
};
use log::{error, warn};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gist")]
#[command(version)]
#[command(about = "Extractive text summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct InputArgs {
    /// Input document (.txt, .md, .pdf, .docx), or "-" for stdin
    #[arg(short, long)]
    input: Option<String>,

    /// Direct text input (alternative to --input)
    #[arg(short, long)]
    text: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text into its most representative sentences
    Summarize {
        #[command(flatten)]
        source: InputArgs,

        /// Number of sentences in the summary (default from config: 3)
        #[arg(short = 'n', long)]
        sentences: Option<usize>,

        /// Print the summary and statistics as JSON
        #[arg(long)]
        json: bool,

        /// Show every sentence's score, best first
        #[arg(long)]
        explain: bool,
    },

    /// Show how text is split into sentences
    Sentences {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Print the plain text extracted from a document
    Extract {
        /// Input document (.txt, .md, .pdf, .docx)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(cli.config).and_then(|config| match cli.command {
        Commands::Summarize {
            source,
            sentences,
            json,
            explain,
        } => summarize_text(&config, &source, sentences, json, explain),

        Commands::Sentences { source } => show_sentences(&config, &source),

        Commands::Extract { input } => {
            println!("{}", load_document(&input)?);
            Ok(())
        }
    });

    match result {
        Ok(()) => {}
        Err(e @ (GistError::Extraction(_) | GistError::UnsupportedFormat(_))) => {
            warn!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn read_input(source: &InputArgs) -> Result<String> {
    match (&source.input, &source.text) {
        (Some(path), _) if path == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (Some(path), _) => load_document(path),
        (_, Some(text)) => Ok(text.clone()),
        (None, None) => Err(GistError::InvalidInput(
            "No input provided. Use --input <file>, --input - for stdin, or --text <text>"
                .to_string(),
        )),
    }
}

fn summarize_text(
    config: &Config,
    source: &InputArgs,
    sentences: Option<usize>,
    json: bool,
    explain: bool,
) -> Result<()> {
    let text = read_input(source)?;
    if text.trim().is_empty() {
        warn!("Please provide some text to summarize.");
        return Ok(());
    }

    let requested = sentences.unwrap_or(config.summary.default_sentences);
    if requested == 0 || requested > config.summary.max_sentences {
        return Err(GistError::InvalidInput(format!(
            "sentence count must be between 1 and {}",
            config.summary.max_sentences
        )));
    }

    // Resources must be ready before anything is tokenized
    let provider = ResourceProvider::new(config.resources.clone());
    let summarizer = Summarizer::new(&provider, config)?;

    let available = summarizer.sentences(&text).len();
    if available == 0 {
        warn!("Could not find any sentences in the provided text.");
        return Ok(());
    }

    let summary = summarizer.summarize(&text, clamp_sentence_count(requested, available));

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== Summary ===\n");
    println!("{}", summary.text);
    println!();
    print_statistics(&summary.statistics);

    if explain {
        println!("\n=== Sentence Scores ===\n");
        for (rank, scored) in summarizer.rank(&text).iter().enumerate() {
            println!(
                "{:>3}. [{:.4}] (#{}) {}",
                rank + 1,
                scored.score,
                scored.position + 1,
                scored.text
            );
        }
    }

    Ok(())
}

fn print_statistics(stats: &Statistics) {
    println!("=== Statistics ===\n");
    println!("  {:<18} {:>10} {:>10}", "", "Original", "Summary");
    println!(
        "  {:<18} {:>10} {:>10}",
        "Characters",
        group_digits(stats.original_char_count),
        group_digits(stats.summary_char_count)
    );
    println!(
        "  {:<18} {:>10} {:>10}",
        "Words",
        group_digits(stats.original_word_count),
        group_digits(stats.summary_word_count)
    );
    println!(
        "  {:<18} {:>10} {:>10}",
        "Sentences",
        group_digits(stats.original_sentence_count),
        group_digits(stats.summary_sentence_count)
    );
    println!();
    println!("  Text reduction: {:.2}%", stats.reduction_percentage());
}

fn show_sentences(config: &Config, source: &InputArgs) -> Result<()> {
    let text = read_input(source)?;

    let provider = ResourceProvider::new(config.resources.clone());
    let summarizer = Summarizer::new(&provider, config)?;

    let sentences = summarizer.sentences(&text);
    if sentences.is_empty() {
        warn!("Could not find any sentences in the provided text.");
        return Ok(());
    }

    for (i, sentence) in sentences.iter().enumerate() {
        println!("{:>4}  {}", i + 1, sentence);
    }
    println!("\n{} sentences", group_digits(sentences.len()));

    Ok(())
}

/// Format a count with thousands separators
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
