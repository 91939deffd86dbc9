//! getopt_long-style command-line option scanning.
//!
//! A [`Scanner`] walks an argument vector against a [`Grammar`] of short
//! options (`"vo:"`: `-v` is a switch, `-o` takes a value) and long options
//! (`--verbose`, `--output=FILE`, `--output FILE`, optionally reported under
//! a short alias). It returns the recognized [`Options`] and the positional
//! arguments that follow them.
//!
//! ```
//! use getopt_long::{Grammar, LongOpt, OptValue, Scanner};
//!
//! let grammar = Grammar::new()
//!     .short_options("vo:")
//!     .long_option(LongOpt::new("verbose").short('v'))
//!     .long_option(LongOpt::new("output").takes_value().short('o'));
//!
//! let mut scanner = Scanner::new(grammar, ["prog", "--verbose", "-o", "out.txt", "input"]);
//! let options = scanner.options();
//! assert_eq!(options.get("v"), Some(&OptValue::Switch));
//! assert_eq!(options.value("o"), Some("out.txt"));
//! assert_eq!(scanner.remaining_arguments(), vec!["input"]);
//! ```
//!
//! Scanning never fails. Unknown options are skipped, and a value-taking
//! option without a usable value is recorded as [`OptValue::Missing`].

pub mod error;
pub mod grammar;
pub mod options;
pub mod scanner;

pub use error::{Error, Result};
pub use grammar::{Arity, Grammar, LongOpt, ShortSpec};
pub use options::{OptValue, Options};
pub use scanner::Scanner;
