// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stack of suspended sources for nested inclusion.

use std::collections::VecDeque;

use crate::source::CharSource;

/// Input already read from a source but not yet consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookahead {
    /// Un-read tokens, front first.
    pub tokens: VecDeque<String>,
    /// Un-read characters (punctuation mode), back first.
    pub chars: VecDeque<char>,
}

impl Lookahead {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.chars.is_empty()
    }
}

/// A suspended source: everything needed to resume reading it.
#[derive(Debug)]
pub struct SourceFrame {
    /// Name of the suspended source.
    pub infile: Option<String>,
    /// The suspended character source.
    pub source: Box<dyn CharSource>,
    /// Line number to resume at.
    pub lineno: usize,
    /// Lookahead that belongs to the suspended source.
    pub lookahead: Lookahead,
}

impl SourceFrame {
    pub fn new(infile: Option<String>, source: Box<dyn CharSource>, lineno: usize) -> Self {
        Self {
            infile,
            source,
            lineno,
            lookahead: Lookahead::default(),
        }
    }

    /// Carry `lookahead` with the frame, to be replayed when it resumes.
    pub fn with_lookahead(mut self, lookahead: Lookahead) -> Self {
        self.lookahead = lookahead;
        self
    }
}

/// LIFO of suspended sources. The most recently pushed frame is the one
/// resumed by the next pop.
///
/// The active source is never on the stack; the lexer moves it into a frame
/// when a new source is pushed, and out again when that source is exhausted.
#[derive(Debug, Default)]
pub struct SourceStack {
    frames: Vec<SourceFrame>,
}

impl SourceStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend a frame.
    pub fn push(&mut self, frame: SourceFrame) {
        self.frames.push(frame);
    }

    /// Remove and return the most recently suspended frame.
    pub fn pop(&mut self) -> Option<SourceFrame> {
        self.frames.pop()
    }

    /// The frame the next pop would return.
    pub fn peek(&self) -> Option<&SourceFrame> {
        self.frames.last()
    }

    /// Number of suspended frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Suspended frames, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFrame> {
        self.frames.iter().rev()
    }
}
