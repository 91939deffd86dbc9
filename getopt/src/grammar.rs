//! Option grammar: which short and long options a program accepts.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Switch,
    Value,
}

// ============================================================================
// ShortSpec
// ============================================================================

/// Parsed getopt-style short option string, e.g. `"vo:"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortSpec {
    entries: Vec<(char, Arity)>,
}

impl ShortSpec {
    pub fn parse(spec: &str) -> Self {
        let mut entries = Vec::new();
        let mut chars = spec.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ':' {
                continue;
            }
            let arity = if chars.peek() == Some(&':') {
                chars.next();
                Arity::Value
            } else {
                Arity::Switch
            };
            entries.push((c, arity));
        }
        ShortSpec { entries }
    }

    /// First declaration of `c` wins.
    pub fn lookup(&self, c: char) -> Option<Arity> {
        self.entries
            .iter()
            .find(|(name, _)| *name == c)
            .map(|(_, arity)| *arity)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&str> for ShortSpec {
    fn from(spec: &str) -> Self {
        ShortSpec::parse(spec)
    }
}

// ============================================================================
// LongOpt
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongOpt {
    name: String,
    takes_value: bool,
    short_alias: Option<char>,
}

impl LongOpt {
    pub fn new(name: &str) -> Self {
        LongOpt {
            name: name.to_string(),
            takes_value: false,
            short_alias: None,
        }
    }

    pub fn takes_value(mut self) -> Self {
        self.takes_value = true;
        self
    }

    /// Report this option under `c` instead of its long name.
    pub fn short(mut self, c: char) -> Self {
        self.short_alias = Some(c);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        if self.takes_value {
            Arity::Value
        } else {
            Arity::Switch
        }
    }

    pub fn short_alias(&self) -> Option<char> {
        self.short_alias
    }

    /// Key the option is recorded under in the scan result.
    pub fn report_key(&self) -> String {
        match self.short_alias {
            Some(c) => c.to_string(),
            None => self.name.clone(),
        }
    }
}

impl From<&str> for LongOpt {
    fn from(name: &str) -> Self {
        LongOpt::new(name)
    }
}

impl From<(&str, bool)> for LongOpt {
    fn from((name, takes_value): (&str, bool)) -> Self {
        LongOpt {
            name: name.to_string(),
            takes_value,
            short_alias: None,
        }
    }
}

impl From<(&str, bool, char)> for LongOpt {
    fn from((name, takes_value, alias): (&str, bool, char)) -> Self {
        LongOpt {
            name: name.to_string(),
            takes_value,
            short_alias: Some(alias),
        }
    }
}

/// Textual form: `name`, `name=`, optionally suffixed with `/c`.
impl FromStr for LongOpt {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let (decl, alias) = match spec.split_once('/') {
            Some((decl, alias)) => {
                let mut chars = alias.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => (decl, Some(c)),
                    _ => return Err(Error::bad_spec(spec, "alias must be a single character")),
                }
            }
            None => (spec, None),
        };
        let (name, takes_value) = match decl.strip_suffix('=') {
            Some(name) => (name, true),
            None => (decl, false),
        };
        if name.is_empty() {
            return Err(Error::bad_spec(spec, "empty option name"));
        }
        if name.contains('=') {
            return Err(Error::bad_spec(spec, "option name cannot contain '='"));
        }
        Ok(LongOpt {
            name: name.to_string(),
            takes_value,
            short_alias: alias,
        })
    }
}

// ============================================================================
// Grammar
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    short: ShortSpec,
    long: Vec<LongOpt>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a short option string and a comma-separated list of
    /// textual long options, e.g. `("vo:", "verbose/v,output=/o")`.
    pub fn from_specs(short: &str, long: &str) -> Result<Self> {
        let mut grammar = Grammar::new().short_options(short);
        for spec in long.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            grammar = grammar.long_option(spec.parse::<LongOpt>()?);
        }
        Ok(grammar)
    }

    pub fn short_options(mut self, spec: &str) -> Self {
        self.short = ShortSpec::parse(spec);
        self
    }

    pub fn long_option(mut self, opt: impl Into<LongOpt>) -> Self {
        self.long.push(opt.into());
        self
    }

    pub fn long_options<I, T>(mut self, opts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LongOpt>,
    {
        self.long.extend(opts.into_iter().map(Into::into));
        self
    }

    pub fn short(&self) -> &ShortSpec {
        &self.short
    }

    pub fn long(&self) -> &[LongOpt] {
        &self.long
    }

    /// First long option declared with `name`.
    pub fn find_long(&self, name: &str) -> Option<&LongOpt> {
        self.long.iter().find(|opt| opt.name == name)
    }
}
