use std::process::{Command, Output};

fn dump_binary() -> &'static str {
    env!("CARGO_BIN_EXE_getopt-dump")
}

/// Run getopt-dump with `args`, keeping RUST_LOG out of the way.
fn dump(args: &[&str]) -> Output {
    Command::new(dump_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run getopt-dump")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn short_options_and_trailing_argument() {
    let output = dump(&["-s", "vo:", "--", "prog", "-v", "-o", "test.txt", "trailing"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "program: prog",
            "option o: \"test.txt\"",
            "option v: true",
            "argument: trailing",
        ]
    );
}

#[test]
fn long_options_with_alias_and_missing_value() {
    let output = dump(&[
        "--short",
        "vo:",
        "--long",
        "authinfo=,name=,verbose/v,output=/o",
        "--",
        "myself",
        "-abc",
        "--verbose",
        "--output=out.txt",
        "--authinfo",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "program: myself",
            "option authinfo: false",
            "option o: \"out.txt\"",
            "option v: true",
        ]
    );
}

#[test]
fn start_index_skips_command_word() {
    let output = dump(&[
        "-s", "vo:", "-n", "2", "--", "myself", "doSomething", "-v", "-o", "f", "arg",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "program: myself",
            "option o: \"f\"",
            "option v: true",
            "argument: arg",
        ]
    );
}

#[test]
fn grouped_switches() {
    let output = dump(&["-s", "abc", "prog", "-abc", "file"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "program: prog",
            "option a: true",
            "option b: true",
            "option c: true",
            "argument: file",
        ]
    );
}

#[test]
fn missing_program_is_an_error() {
    let output = dump(&["-s", "v"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: option not found: PROGRAM"), "{}", stderr);
}

#[test]
fn bad_long_spec_is_an_error() {
    let output = dump(&["-l", "out/xy", "prog"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad option spec"), "{}", stderr);
}

#[test]
fn bad_start_index_is_an_error() {
    let output = dump(&["-n", "two", "prog"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad value \"two\" for option n"), "{}", stderr);
}

#[test]
fn help_prints_usage() {
    let output = dump(&["--help"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: getopt-dump"));
}
