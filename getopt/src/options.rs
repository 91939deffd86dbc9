//! Scan results: recognized options and their values.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Value recorded for a recognized option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptValue {
    /// Switch present (`true`).
    Switch,
    /// Value-taking option seen without a usable value (`false`).
    Missing,
    Value(String),
}

impl OptValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptValue::Value(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptValue::Switch => write!(f, "true"),
            OptValue::Missing => write!(f, "false"),
            OptValue::Value(s) => write!(f, "{}", s),
        }
    }
}

/// Options recognized by one scan, keyed by short character or long name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: HashMap<String, OptValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later occurrences overwrite earlier ones.
    pub(crate) fn record(&mut self, key: String, value: OptValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&OptValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Present with a switch or a real value; `Missing` does not count.
    pub fn is_set(&self, key: &str) -> bool {
        matches!(
            self.values.get(key),
            Some(OptValue::Switch | OptValue::Value(_))
        )
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(OptValue::as_str)
    }

    /// Convert the string value of `key` with `FromStr`.
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.values.get(key) {
            None => Err(Error::NotFound(key.to_string())),
            Some(OptValue::Missing) => Err(Error::MissingValue(key.to_string())),
            Some(OptValue::Switch) => Err(Error::NoValue(key.to_string())),
            Some(OptValue::Value(v)) => v.parse::<T>().map_err(|e| Error::BadValue {
                key: key.to_string(),
                value: v.clone(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, OptValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a OptValue);
    type IntoIter = hash_map::Iter<'a, String, OptValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Options {
        let mut opts = Options::new();
        opts.record("v".into(), OptValue::Switch);
        opts.record("o".into(), OptValue::Value("test.txt".into()));
        opts.record("n".into(), OptValue::Value("42".into()));
        opts.record("authinfo".into(), OptValue::Missing);
        opts
    }

    #[test]
    fn tri_state_queries() {
        let opts = sample();
        assert!(opts.is_set("v"));
        assert!(opts.is_set("o"));
        assert!(opts.contains("authinfo"));
        assert!(!opts.is_set("authinfo"));
        assert!(!opts.contains("x"));
        assert_eq!(opts.value("o"), Some("test.txt"));
        assert_eq!(opts.value("v"), None);
        assert_eq!(opts.len(), 4);
    }

    #[test]
    fn later_record_overwrites() {
        let mut opts = Options::new();
        opts.record("o".into(), OptValue::Value("first".into()));
        opts.record("o".into(), OptValue::Missing);
        assert_eq!(opts.get("o"), Some(&OptValue::Missing));
        assert_eq!(opts.len(), 1);
    }

    #[test]
    fn typed_parse() {
        let opts = sample();
        assert_eq!(opts.parse::<u32>("n").unwrap(), 42);
        assert_eq!(opts.parse::<String>("o").unwrap(), "test.txt");
        assert!(matches!(opts.parse::<u32>("x"), Err(Error::NotFound(_))));
        assert!(matches!(opts.parse::<u32>("v"), Err(Error::NoValue(_))));
        assert!(matches!(
            opts.parse::<u32>("authinfo"),
            Err(Error::MissingValue(_))
        ));
        match opts.parse::<u32>("o") {
            Err(Error::BadValue { key, value, .. }) => {
                assert_eq!(key, "o");
                assert_eq!(value, "test.txt");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn display_matches_reported_values() {
        assert_eq!(OptValue::Switch.to_string(), "true");
        assert_eq!(OptValue::Missing.to_string(), "false");
        assert_eq!(OptValue::Value("x y".into()).to_string(), "x y");
    }
}
