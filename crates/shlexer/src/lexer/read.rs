// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The tokenizing state machine.

use super::{Lexer, State};
use crate::error::LexError;

impl Lexer {
    /// Read one raw token from the active source.
    ///
    /// Returns `None` at the end of the active source. Unlike
    /// [`get_token`](Self::get_token) this ignores pushed-back tokens, does
    /// not follow inclusion directives and does not pop the source stack.
    pub fn read_token(&mut self) -> Result<Option<String>, LexError> {
        // Whether the token was ever inside quotes: `""` is an empty token,
        // not end of input.
        let mut quoted = false;
        // State to return to after an escaped character.
        let mut resume = State::InWord;
        let posix = self.config.posix;

        loop {
            if self.state == State::Eof {
                break;
            }
            let next = self.next_char()?;
            if next == Some('\n') {
                self.lineno += 1;
            }
            tracing::trace!(state = ?self.state, next = ?next, "read character");

            match self.state {
                State::Eof => break,
                State::Start => {
                    let Some(c) = next else {
                        self.state = State::Eof;
                        break;
                    };
                    if self.classes.whitespace.contains(c) {
                        if self.should_emit(quoted) {
                            break;
                        }
                    } else if self.classes.commenters.contains(c) {
                        self.skip_comment()?;
                    } else if posix && self.classes.escape.contains(c) {
                        resume = State::InWord;
                        self.state = State::InEscape(c);
                    } else if self.classes.word.contains(c) {
                        self.token.push(c);
                        self.state = State::InWord;
                    } else if self.classes.punctuation.contains(c) {
                        self.token.push(c);
                        self.state = State::InPunctuation;
                    } else if self.classes.quotes.contains(c) {
                        if !posix {
                            self.token.push(c);
                        }
                        self.state = State::InQuote(c);
                    } else if self.config.whitespace_split {
                        self.token.push(c);
                        self.state = State::InWord;
                    } else {
                        // A lone character is a token of its own.
                        self.token.push(c);
                        break;
                    }
                }
                State::InQuote(q) => {
                    quoted = true;
                    let Some(c) = next else {
                        tracing::debug!(quote = ?q, "EOF in quotes");
                        return Err(self.fail(|location| LexError::UnterminatedQuote {
                            quote: q,
                            location,
                        }));
                    };
                    if c == q {
                        if posix {
                            self.state = State::InWord;
                        } else {
                            self.token.push(c);
                            self.state = State::Start;
                            break;
                        }
                    } else if posix
                        && self.classes.escape.contains(c)
                        && self.classes.escaped_quotes.contains(q)
                    {
                        resume = State::InQuote(q);
                        self.state = State::InEscape(c);
                    } else {
                        self.token.push(c);
                    }
                }
                State::InEscape(escape) => {
                    let Some(c) = next else {
                        tracing::debug!("EOF in escape");
                        return Err(self.fail(|location| LexError::UnterminatedEscape { location }));
                    };
                    // Inside quotes only the quote itself or the escape
                    // character can be escaped; anything else keeps the
                    // escape character.
                    if let State::InQuote(q) = resume {
                        if c != q && c != escape {
                            self.token.push(escape);
                        }
                    }
                    self.token.push(c);
                    self.state = resume;
                }
                State::InWord | State::InPunctuation => {
                    let Some(c) = next else {
                        self.state = State::Eof;
                        break;
                    };
                    if self.classes.whitespace.contains(c) {
                        self.state = State::Start;
                        if self.should_emit(quoted) {
                            break;
                        }
                    } else if self.classes.commenters.contains(c) {
                        self.skip_comment()?;
                        if posix {
                            self.state = State::Start;
                            if self.should_emit(quoted) {
                                break;
                            }
                        }
                    } else if self.state == State::InPunctuation {
                        if self.classes.punctuation.contains(c) {
                            self.token.push(c);
                        } else {
                            self.pushback_chars.push_back(c);
                            self.state = State::Start;
                            break;
                        }
                    } else if posix && self.classes.quotes.contains(c) {
                        self.state = State::InQuote(c);
                    } else if posix && self.classes.escape.contains(c) {
                        resume = State::InWord;
                        self.state = State::InEscape(c);
                    } else if self.classes.word.contains(c)
                        || self.classes.quotes.contains(c)
                        || (self.config.whitespace_split
                            && !self.classes.punctuation.contains(c))
                    {
                        self.token.push(c);
                    } else {
                        // Not part of this word: un-read it.
                        if self.config.is_punctuation_mode() {
                            self.pushback_chars.push_back(c);
                        } else {
                            self.pushback.push_front(c.to_string());
                        }
                        self.state = State::Start;
                        if self.should_emit(quoted) {
                            break;
                        }
                    }
                }
            }
        }

        let result = std::mem::take(&mut self.token);
        if result.is_empty() && !(posix && quoted) {
            tracing::debug!("raw token=EOF");
            return Ok(None);
        }
        tracing::debug!(token = %result, "raw token");
        Ok(Some(result))
    }

    /// Pull the next character, lookahead queue first.
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        if self.config.is_punctuation_mode() {
            if let Some(c) = self.pushback_chars.pop_back() {
                return Ok(Some(c));
            }
        }
        self.source.next_char().map_err(|source| LexError::Io {
            location: self.location(),
            source,
        })
    }

    /// Discard the rest of a comment line.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        self.source.skip_line().map_err(|source| LexError::Io {
            location: self.location(),
            source,
        })?;
        self.lineno += 1;
        Ok(())
    }

    fn should_emit(&self, quoted: bool) -> bool {
        !self.token.is_empty() || (self.config.posix && quoted)
    }

    /// Reset the in-progress token and build the error for the current
    /// location.
    fn fail(&mut self, make: impl FnOnce(crate::Location) -> LexError) -> LexError {
        self.token.clear();
        self.state = State::Start;
        make(self.location())
    }
}
