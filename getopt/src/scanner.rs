//! The option scanner: a cursor over an argument vector.
//!
//! Scanning walks the vector from a start index, classifying each token as
//! a long option (`--name`, `--name=value`, `--name value`), a short option
//! or option group (`-v`, `-abc`, `-abco value`), or the first positional
//! argument, where scanning stops for good. Tokens that look like options
//! but are not in the grammar are skipped without error.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::grammar::{Arity, Grammar};
use crate::options::{OptValue, Options};

fn is_option_shaped(token: &str) -> bool {
    token.starts_with('-')
}

// ============================================================================
// Steps — one classified token per item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Recognized { key: String, value: OptValue },
    Skipped,
}

/// Finite sequence of classification steps. Ends at the end of the vector
/// or at the first positional token, leaving `index` on that boundary.
///
/// The position is `(index, offset)`: `offset` counts the bytes of a short
/// option group (after its `-`) already consumed, so the vector itself is
/// never rewritten.
pub(crate) struct Steps<'a> {
    grammar: &'a Grammar,
    argv: &'a [String],
    index: usize,
    offset: usize,
    done: bool,
}

impl<'a> Steps<'a> {
    pub(crate) fn new(grammar: &'a Grammar, argv: &'a [String], start: usize) -> Self {
        Steps {
            grammar,
            argv,
            index: start,
            offset: 0,
            done: false,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    fn advance(&mut self, n: usize) {
        self.index += n;
        self.offset = 0;
    }

    fn skip(&mut self, token: &str, reason: &'static str) -> Step {
        debug!(index = self.index, token, reason, "skipping option");
        self.advance(1);
        Step::Skipped
    }

    fn recognized(&self, key: String, value: OptValue) -> Step {
        if value == OptValue::Missing {
            debug!(index = self.index, key = %key, "option expects a value, none given");
        } else {
            trace!(key = %key, value = %value, "option");
        }
        Step::Recognized { key, value }
    }

    /// Value for a value-taking option that ends the current token: the
    /// next token, unless there is none or it looks like an option.
    fn take_value(&mut self) -> OptValue {
        match self.argv.get(self.index + 1) {
            Some(next) if !is_option_shaped(next) => {
                let value = OptValue::Value(next.clone());
                self.advance(2);
                value
            }
            _ => {
                self.advance(1);
                OptValue::Missing
            }
        }
    }

    fn long_option(&mut self, token: &'a str) -> Step {
        let grammar = self.grammar;
        if grammar.long().is_empty() {
            return self.skip(token, "no long options accepted");
        }

        let body = &token[2..];
        let (key, inline) = match body.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (body, None),
        };

        let Some(opt) = grammar.find_long(key) else {
            return self.skip(token, "unknown long option");
        };

        let value = match (opt.arity(), inline) {
            (Arity::Switch, _) => {
                self.advance(1);
                OptValue::Switch
            }
            (Arity::Value, Some(value)) => {
                self.advance(1);
                OptValue::Value(value.to_string())
            }
            (Arity::Value, None) => self.take_value(),
        };
        self.recognized(opt.report_key(), value)
    }

    /// One character of a short option group per call. The index moves
    /// past the token only once its last character has been handled.
    fn short_option(&mut self, token: &'a str) -> Step {
        let grammar = self.grammar;
        if grammar.short().is_empty() {
            return self.skip(token, "no short options accepted");
        }
        if token.contains('=') {
            return self.skip(token, "short options do not take '=' values");
        }

        let residual = &token[1 + self.offset..];
        let mut chars = residual.chars();
        let Some(c) = chars.next() else {
            return self.skip(token, "empty short option");
        };
        let last = chars.as_str().is_empty();

        match grammar.short().lookup(c) {
            // An unknown character aborts the rest of the group.
            None => self.skip(token, "unknown short option"),
            Some(Arity::Switch) => {
                if last {
                    self.advance(1);
                } else {
                    self.offset += c.len_utf8();
                }
                self.recognized(c.to_string(), OptValue::Switch)
            }
            // Only the last option of a group may take a value.
            Some(Arity::Value) if !last => {
                self.offset += c.len_utf8();
                self.recognized(c.to_string(), OptValue::Missing)
            }
            Some(Arity::Value) => {
                let value = self.take_value();
                self.recognized(c.to_string(), value)
            }
        }
    }
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        let argv = self.argv;
        let Some(token) = argv.get(self.index) else {
            self.done = true;
            return None;
        };

        if token.starts_with("--") {
            Some(self.long_option(token))
        } else if token.starts_with('-') {
            Some(self.short_option(token))
        } else {
            self.done = true;
            None
        }
    }
}

impl FusedIterator for Steps<'_> {}

// ============================================================================
// Scanner
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Fresh,
    Done { boundary: usize },
}

/// Scanner over one argument vector. Index 0 is the program name and is
/// never scanned as an option.
#[derive(Debug, Clone)]
pub struct Scanner {
    grammar: Grammar,
    argv: Vec<String>,
    state: ScanState,
}

impl Scanner {
    pub fn new<I, S>(grammar: Grammar, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Scanner {
            grammar,
            argv: argv.into_iter().map(Into::into).collect(),
            state: ScanState::Fresh,
        }
    }

    /// Scanner over the arguments of the current process.
    pub fn from_env(grammar: Grammar) -> Self {
        Self::new(grammar, std::env::args())
    }

    /// Replace the grammar and, when `argv` is non-empty, the argument
    /// vector. Any previous scan is forgotten.
    pub fn set_env<I, S>(&mut self, grammar: Grammar, argv: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if !argv.is_empty() {
            self.argv = argv;
        }
        self.grammar = grammar;
        self.state = ScanState::Fresh;
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn program_name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    pub fn options(&mut self) -> Options {
        self.scan_options(1)
    }

    /// Scan options starting at `start` (0 is treated as 1) until the end
    /// of the vector or the first positional argument.
    ///
    /// A start index above 1 supports `program command [options] [args]`.
    pub fn scan_options(&mut self, start: usize) -> Options {
        let start = start.max(1);
        let mut options = Options::new();
        let mut steps = Steps::new(&self.grammar, &self.argv, start);
        for step in steps.by_ref() {
            if let Step::Recognized { key, value } = step {
                options.record(key, value);
            }
        }
        let boundary = steps.index().min(self.argv.len());

        debug!(start, boundary, count = options.len(), "option scan finished");
        self.state = ScanState::Done { boundary };
        options
    }

    /// Index of the first positional argument found by the last scan.
    pub fn next_index(&self) -> Option<usize> {
        match self.state {
            ScanState::Fresh => None,
            ScanState::Done { boundary } => Some(boundary),
        }
    }

    /// Arguments left after the last scan; empty if nothing was scanned.
    pub fn remaining_arguments(&self) -> Vec<String> {
        match self.state {
            ScanState::Fresh => Vec::new(),
            ScanState::Done { boundary } => self.argv[boundary..].to_vec(),
        }
    }
}
