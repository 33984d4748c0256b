use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use wikicoord::cli::{Args, OutputFormat};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("wikicoord")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.files.is_empty());
    assert_eq!(parsed.format, OutputFormat::Plain);
    assert!(!parsed.allow_invalid);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--format", "json", "--allow-invalid", "--verbose", "a.wiki", "-"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.files, vec![PathBuf::from("a.wiki"), PathBuf::from("-")]);
    assert_eq!(parsed.format, OutputFormat::Json);
    assert!(parsed.allow_invalid);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v", "page.txt"])).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.files, vec![PathBuf::from("page.txt")]);
}

#[test]
fn test_unknown_format() {
    assert!(Args::try_parse_from(make_args(&["--format", "xml"])).is_err());
}
