// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Nested inclusion: pushing and popping sources.

use std::io;
use std::path::{Path, PathBuf};

use super::{Lexer, State};
use crate::error::LexError;
use crate::source::{CharSource, FileSource};
use crate::stack::{Lookahead, SourceFrame};

/// A source opened by an inclusion directive.
#[derive(Debug)]
pub struct Included {
    /// Name of the included source, used for diagnostics and to anchor
    /// nested relative includes.
    pub infile: String,
    pub source: Box<dyn CharSource>,
}

/// Opens the source named by an inclusion directive.
///
/// Called with the file name token and the name of the including source.
/// `Ok(None)` skips the inclusion.
pub type IncludeHook = Box<dyn FnMut(&str, Option<&str>) -> io::Result<Option<Included>>>;

/// Resolve an inclusion file name the way a C preprocessor resolves
/// `#include "..."`: relative names are taken relative to the directory of
/// the including file.
///
/// One layer of surrounding double quotes is stripped first, since in
/// non-POSIX mode quoted tokens keep their quotes.
pub fn resolve_include_path(name: &str, infile: Option<&str>) -> PathBuf {
    let name = strip_double_quotes(name);
    let path = Path::new(name);
    match infile {
        Some(infile) if path.is_relative() => Path::new(infile)
            .parent()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

fn strip_double_quotes(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(name)
}

/// Default hook: open the resolved path as a file.
pub(super) fn open_included(name: &str, infile: Option<&str>) -> io::Result<Option<Included>> {
    let path = resolve_include_path(name, infile);
    let source = FileSource::open(&path)?;
    Ok(Some(Included {
        infile: path.display().to_string(),
        source: Box::new(source),
    }))
}

impl Lexer {
    /// Suspend the active source and continue reading from `source`.
    ///
    /// The line number restarts at 1 and is restored when `source` is popped.
    pub fn push_source(&mut self, source: Box<dyn CharSource>, infile: Option<String>) {
        self.suspend(source, infile, Lookahead::default());
    }

    /// Push `source`, storing `lookahead` with the suspended source so it is
    /// replayed only once that source resumes.
    fn suspend(
        &mut self,
        source: Box<dyn CharSource>,
        infile: Option<String>,
        lookahead: Lookahead,
    ) {
        match &infile {
            Some(name) => tracing::debug!(file = %name, "pushing to file"),
            None => tracing::debug!(stream = %source.describe(), "pushing to stream"),
        }
        let previous = std::mem::replace(&mut self.source, source);
        let previous_infile = std::mem::replace(&mut self.infile, infile);
        self.stack.push(
            SourceFrame::new(previous_infile, previous, self.lineno).with_lookahead(lookahead),
        );
        self.lineno = 1;
        self.state = State::Start;
    }

    /// Close the active source and resume the most recently suspended one.
    ///
    /// Returns false, leaving the active source alone, when nothing is
    /// suspended.
    pub fn pop_source(&mut self) -> bool {
        let Some(frame) = self.stack.pop() else {
            return false;
        };
        self.source.close();
        let SourceFrame {
            infile,
            source,
            lineno,
            lookahead,
        } = frame;
        self.source = source;
        self.infile = infile;
        self.lineno = lineno;
        self.state = State::Start;
        // Tokens pushed while the popped source was active stay in front.
        self.pushback.extend(lookahead.tokens);
        self.pushback_chars = lookahead.chars;
        tracing::debug!(
            stream = %self.source.describe(),
            line = self.lineno,
            "popping source"
        );
        true
    }

    /// Handle an inclusion directive: the next raw token names the file.
    pub(super) fn include_next(&mut self) -> Result<(), LexError> {
        let Some(name) = self.read_token()? else {
            tracing::debug!("inclusion directive at end of input");
            return Ok(());
        };
        if let Some(limit) = self.config.max_include_depth {
            if self.stack.len() >= limit {
                return Err(LexError::IncludeDepth {
                    limit,
                    location: self.location(),
                });
            }
        }
        let included = (self.include_hook)(&name, self.infile.as_deref()).map_err(|source| {
            LexError::Inclusion {
                path: strip_double_quotes(&name).to_string(),
                location: self.location(),
                source,
            }
        })?;
        if let Some(Included { infile, source }) = included {
            // Reading the file name may have un-read a character of the
            // including source; it must wait until that source resumes.
            let lookahead = Lookahead {
                tokens: std::mem::take(&mut self.pushback),
                chars: std::mem::take(&mut self.pushback_chars),
            };
            self.suspend(source, Some(infile), lookahead);
        }
        Ok(())
    }
}
