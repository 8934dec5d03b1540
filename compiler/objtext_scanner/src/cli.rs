//! Command-line configuration for the `objtext` binary.

use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

pub const USAGE: &str = "\
Usage: objtext <command> [options]

Commands:
  scan <file>...     Classify every value position in the given files
  classify <text>    Scan a single value

Options:
  --explain          Also list values that are not bare strings
  --quiet            Only print per-file totals
  --no-parallel      Scan files one at a time
  --no-color         Plain diagnostics
  --trace            Log every scanner step to stderr

Environment:
  OBJTEXT_LOG        tracing filter directives (falls back to RUST_LOG)
  OBJTEXT_LOG_TREE   set to 1 for hierarchical log output";

/// What to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scan(Vec<PathBuf>),
    Classify(String),
    Help,
}

/// Output and execution switches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub explain: bool,
    pub quiet: bool,
    pub parallel: bool,
    pub color: bool,
    /// Route scanner events to a dedicated trace-level sink.
    pub trace: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            explain: false,
            quiet: false,
            parallel: true,
            color: true,
            trace: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),
    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parse `args` (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<(Command, CliConfig), CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = CliConfig::default();
    let mut command: Option<String> = None;
    let mut operands = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "--explain" | "-e" => config.explain = true,
            "--quiet" | "-q" => config.quiet = true,
            "--no-parallel" => config.parallel = false,
            "--no-color" => config.color = false,
            "--trace" => config.trace = true,
            "--help" | "-h" => return Ok((Command::Help, config)),
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError::UnknownOption(arg.to_owned()));
            }
            _ if command.is_none() => command = Some(arg.to_owned()),
            _ => operands.push(arg.to_owned()),
        }
    }

    let command = match command.as_deref() {
        None => return Err(CliError::MissingCommand),
        Some("help") => Command::Help,
        Some("scan") if operands.is_empty() => return Err(CliError::MissingArgument("scan")),
        Some("scan") => Command::Scan(operands.into_iter().map(PathBuf::from).collect()),
        Some("classify") if operands.is_empty() => {
            return Err(CliError::MissingArgument("classify"))
        }
        Some("classify") => Command::Classify(operands.join(" ")),
        Some(other) => return Err(CliError::UnknownCommand(other.to_owned())),
    };
    Ok((command, config))
}

/// Read a source file, mapping IO failures to readable errors.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::NotFound(path.to_owned()),
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_owned()),
        std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_owned()),
        _ => CliError::Read {
            path: path.to_owned(),
            source: e,
        },
    })
}
