use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<(Command, CliConfig), CliError> {
    parse_args(args.iter().copied())
}

#[test]
fn scan_with_defaults() {
    let Ok((command, config)) = parse(&["scan", "a.rules", "b.rules"]) else {
        panic!("scan should parse");
    };
    assert_eq!(
        command,
        Command::Scan(vec![PathBuf::from("a.rules"), PathBuf::from("b.rules")])
    );
    assert_eq!(config, CliConfig::default());
    assert!(config.parallel);
    assert!(config.color);
}

#[test]
fn options_anywhere() {
    let Ok((command, config)) = parse(&["--explain", "scan", "x", "--no-parallel", "-q"]) else {
        panic!("options should parse");
    };
    assert_eq!(command, Command::Scan(vec![PathBuf::from("x")]));
    assert!(config.explain);
    assert!(config.quiet);
    assert!(!config.parallel);
}

#[test]
fn classify_joins_operands() {
    let Ok((command, _)) = parse(&["classify", "hello", "world"]) else {
        panic!("classify should parse");
    };
    assert_eq!(command, Command::Classify("hello world".to_owned()));
}

#[test]
fn help_variants() {
    for args in [&["help"][..], &["--help"][..], &["scan", "-h"][..]] {
        assert!(matches!(parse(args), Ok((Command::Help, _))), "{args:?}");
    }
}

#[test]
fn errors() {
    assert!(matches!(parse(&[]), Err(CliError::MissingCommand)));
    assert!(matches!(parse(&["scan"]), Err(CliError::MissingArgument("scan"))));
    assert!(matches!(parse(&["lint"]), Err(CliError::UnknownCommand(c)) if c == "lint"));
    assert!(matches!(parse(&["scan", "--fast"]), Err(CliError::UnknownOption(o)) if o == "--fast"));
}

#[test]
fn lone_dash_is_an_operand() {
    assert!(matches!(parse(&["classify", "-"]), Ok((Command::Classify(t), _)) if t == "-"));
}

#[test]
fn read_missing_file() {
    let path = PathBuf::from("definitely/not/here.rules");
    let err = read_source(&path);
    assert!(matches!(err, Err(CliError::NotFound(_))));
    if let Err(e) = err {
        assert_eq!(e.to_string(), "cannot find file 'definitely/not/here.rules'");
    }
}
