//! Object Text bare-string scanner CLI.

use std::path::Path;
use std::process::ExitCode;

use objtext_lexer_core::{SourceBuffer, SourceCursor, ValidSymbols};
use objtext_scanner::cli::{parse_args, read_source, CliConfig, CliError, Command, USAGE};
use objtext_scanner::report::{format_report, render_malformed};
use objtext_scanner::tracing_setup::{init_tracing, scan_dispatch};
use objtext_scanner::{scan_values, BareStringScanner};
use rayon::prelude::*;

fn main() -> ExitCode {
    init_tracing();

    let (command, config) = match parse_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let scanner = if config.trace {
        BareStringScanner::with_dispatch(scan_dispatch(config.color))
    } else {
        BareStringScanner::new()
    };

    match command {
        Command::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Classify(text) => {
            classify(&scanner, &text);
            ExitCode::SUCCESS
        }
        Command::Scan(paths) => {
            let results: Vec<_> = if config.parallel {
                paths
                    .par_iter()
                    .map(|path| scan_file(&scanner, path, &config))
                    .collect()
            } else {
                paths
                    .iter()
                    .map(|path| scan_file(&scanner, path, &config))
                    .collect()
            };

            let mut failed = false;
            for result in results {
                match result {
                    Ok(output) => {
                        print!("{}", output.stdout);
                        eprint!("{}", output.stderr);
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        failed = true;
                    }
                }
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn classify(scanner: &BareStringScanner, text: &str) {
    let mut cursor = SourceCursor::new(text);
    let outcome = scanner.scan_outcome(&mut cursor, ValidSymbols::BARE_STRING);
    if outcome.is_accepted() {
        println!("{outcome} {:?} @ {}", cursor.token_text(), cursor.token_span());
    } else {
        println!("{outcome}");
    }
}

/// Buffered output for one file, so parallel scans print in order.
struct FileOutput {
    stdout: String,
    stderr: String,
}

fn scan_file(
    scanner: &BareStringScanner,
    path: &Path,
    config: &CliConfig,
) -> Result<FileOutput, CliError> {
    let content = read_source(path)?;
    let source = SourceBuffer::new(&content);
    let reports = scan_values(scanner, &source);
    let name = path.display().to_string();

    let mut stdout = String::new();
    let mut stderr = Vec::new();
    let accepted = reports.iter().filter(|r| r.is_bare_string()).count();

    if !config.quiet {
        stdout.push_str(&format!("{name}:\n"));
        for report in &reports {
            if report.is_bare_string() || config.explain {
                stdout.push_str(&format_report(&source, report));
                stdout.push('\n');
            }
            if report.is_malformed() {
                render_malformed(&name, &source, report, config.color, &mut stderr).map_err(
                    |e| CliError::Read {
                        path: path.to_owned(),
                        source: e,
                    },
                )?;
            }
        }
    }
    stdout.push_str(&format!(
        "{name}: {accepted} bare strings in {} values\n",
        reports.len()
    ));

    Ok(FileOutput {
        stdout,
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}
