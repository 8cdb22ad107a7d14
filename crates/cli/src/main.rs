// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! shlexer - split shell-style input into tokens

mod env;
mod output;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shlexer::{line_context, LexError, Lexer, LexerConfig, TextSource};

use output::{OutputFormat, TokenWriter};

#[derive(Parser)]
#[command(
    name = "shlexer",
    version,
    about = "Split shell-style input into tokens"
)]
struct Cli {
    /// File to tokenize (reads stdin when absent or `-`)
    file: Option<PathBuf>,

    /// Use POSIX quoting rules (the default)
    #[arg(long, overrides_with = "no_posix")]
    posix: bool,

    /// Keep quotes in tokens and disable escapes
    #[arg(long = "no-posix")]
    no_posix: bool,

    /// Emit runs of `();<>|&` as separate tokens
    #[arg(long)]
    punctuation: bool,

    /// Split on whitespace only
    #[arg(long)]
    whitespace_split: bool,

    /// Treat `#` as an ordinary character
    #[arg(long)]
    no_comments: bool,

    /// Keyword that includes the file named by the next token
    #[arg(long, value_name = "KEYWORD")]
    source: Option<String>,

    /// Base lexer config (TOML); flags override it
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = build_config(&cli, env::config_path())?;
    let (text, infile) = read_input(cli.file.as_deref())?;
    tracing::debug!(
        input = %infile.as_deref().unwrap_or("<stdin>"),
        bytes = text.len(),
        "tokenizing"
    );

    // `tokenize` flushes before handing the lock back.
    let stdout = tokenize(&text, infile, config, io::stdout().lock(), cli.output)?;
    drop(stdout);
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Build the lexer config: `--config` (or `default_path`, normally from
/// `SHLEXER_CONFIG`), then flags.
fn build_config(cli: &Cli, default_path: Option<PathBuf>) -> Result<LexerConfig> {
    let mut config = match cli.config.clone().or(default_path) {
        Some(path) => load_config(&path)?,
        None => LexerConfig::default(),
    };

    if cli.posix {
        config = config.posix(true);
    }
    if cli.no_posix {
        config = config.posix(false);
    }
    if cli.punctuation {
        config = config.punctuation(true);
    }
    if cli.whitespace_split {
        config = config.whitespace_split(true);
    }
    if cli.no_comments {
        config = config.commenters("");
    }
    if let Some(keyword) = &cli.source {
        config = config.source_keyword(keyword.clone());
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<LexerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config = LexerConfig::from_toml_str(&text)
        .with_context(|| format!("in config '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded lexer config");
    Ok(config)
}

/// Read the whole input into memory, naming it after its path.
fn read_input(file: Option<&Path>) -> Result<(String, Option<String>)> {
    match file {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            Ok((text, Some(path.display().to_string())))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok((text, None))
        }
    }
}

/// Lex `text` and write every token to `out`.
///
/// Tokens already written stay written when a later token fails.
fn tokenize<W: Write>(
    text: &str,
    infile: Option<String>,
    config: LexerConfig,
    out: W,
    format: OutputFormat,
) -> Result<W> {
    let mut lexer = Lexer::new(Box::new(TextSource::new(text)), infile.clone(), config);
    let mut writer = TokenWriter::new(out, format);
    loop {
        match lexer.get_token() {
            Ok(Some(tok)) => writer.token(tok)?,
            Ok(None) => break,
            Err(err) => {
                writer.flush()?;
                return Err(lex_failure(&err, text, infile.as_deref()));
            }
        }
    }
    writer.finish()
}

/// Render a lexer error with its leader, plus the offending line when it
/// lies in the top-level input.
fn lex_failure(err: &LexError, text: &str, infile: Option<&str>) -> anyhow::Error {
    let mut msg = err.diagnostic();
    if let Some(location) = err.location() {
        if location.infile.as_deref() == infile {
            if let Some(context) = line_context(text, location.line) {
                msg.push('\n');
                msg.push_str(&context);
            }
        }
    }
    anyhow::anyhow!(msg)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
