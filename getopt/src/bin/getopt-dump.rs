// Scan an argument vector with a grammar given on the command line and
// print what the scanner recognized.

use std::collections::BTreeMap;
use std::io::Write;

use getopt_long::{Error, Grammar, LongOpt, OptValue, Options, Result, Scanner};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: getopt-dump [OPTION]... [--] PROGRAM [ARG]...
Scan PROGRAM ARG... as an argument vector and print the result.

  -s, --short SPEC    Short options, e.g. 'vo:'.
  -l, --long SPECS    Long options, e.g. 'verbose/v,output=/o'.
  -n, --start INDEX   Index to start scanning at (default 1).
  -h, --help          This help.
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn own_grammar() -> Grammar {
    Grammar::new()
        .short_options("s:l:n:h")
        .long_option(LongOpt::new("short").takes_value().short('s'))
        .long_option(LongOpt::new("long").takes_value().short('l'))
        .long_option(LongOpt::new("start").takes_value().short('n'))
        .long_option(LongOpt::new("help").short('h'))
}

/// Value of a value-taking option, `""` when absent.
fn spec_value<'a>(opts: &'a Options, key: &str) -> Result<&'a str> {
    match opts.get(key) {
        None => Ok(""),
        Some(OptValue::Value(v)) => Ok(v),
        Some(_) => Err(Error::MissingValue(key.to_string())),
    }
}

fn run() -> Result<()> {
    let mut own = Scanner::from_env(own_grammar());
    let opts = own.options();

    if opts.is_set("h") {
        print!("{}", USAGE);
        let _ = std::io::stdout().flush();
        std::process::exit(2);
    }

    let grammar = Grammar::from_specs(spec_value(&opts, "s")?, spec_value(&opts, "l")?)?;
    let start = match opts.parse::<usize>("n") {
        Err(Error::NotFound(_)) => 1,
        other => other?,
    };

    let argv = own.remaining_arguments();
    if argv.is_empty() {
        return Err(Error::NotFound("PROGRAM".to_string()));
    }

    let mut scanner = Scanner::new(grammar, argv);
    let options = scanner.scan_options(start);

    println!("program: {}", scanner.program_name().unwrap_or_default());
    let sorted: BTreeMap<&String, &OptValue> = options.iter().collect();
    for (key, value) in sorted {
        match value {
            OptValue::Value(v) => println!("option {}: {:?}", key, v),
            _ => println!("option {}: {}", key, value),
        }
    }
    for arg in scanner.remaining_arguments() {
        println!("argument: {}", arg);
    }

    Ok(())
}
