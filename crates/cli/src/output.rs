// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes tokens as they are produced.
///
/// Text output is streamed one `Token: "..."` line at a time, so tokens read
/// before an error still reach the terminal. JSON output is buffered and
/// written as a single array by [`TokenWriter::finish`].
pub struct TokenWriter<W: Write> {
    out: W,
    format: OutputFormat,
    buffered: Vec<String>,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            buffered: Vec::new(),
        }
    }

    pub fn token(&mut self, tok: String) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "Token: {:?}", tok)?,
            OutputFormat::Json => self.buffered.push(tok),
        }
        Ok(())
    }

    /// Flush anything already written, without emitting buffered JSON.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Write any buffered output and hand back the writer.
    pub fn finish(mut self) -> anyhow::Result<W> {
        if self.format == OutputFormat::Json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(&self.buffered)?)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
