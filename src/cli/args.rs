/*!
 * Batch Arguments
 * Command-line parsing for the `cpu_scheduler` binary
 */

use crate::core::errors::{SchedulerError, SimError};
use crate::core::types::SimResult;
use crate::scheduler::{Algorithm, AlgorithmKind, TimeQuantum, WaitAccounting};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: cpu_scheduler <algorithm> [quantum] [options]
       cpu_scheduler --request <file> [options]

Algorithms:
  fcfs        First come first serve
  sjf         Shortest job first (non-preemptive)
  priority    Highest priority number first (non-preemptive)
  rr <n>      Round robin with a time quantum of n ticks

Options:
  --tasks <file>              JSON array of tasks instead of the built-in set
  --request <file>            JSON request {algorithm, tasks, quantum}
  --table                     Print a colored table instead of JSON
  --wait-accounting <mode>    Round robin waiting time: cumulative | idle-gaps
  -h, --help                  Show this message";

/// Result encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run {
        algorithm: Algorithm,
        tasks_path: Option<PathBuf>,
        format: OutputFormat,
    },
    Request {
        path: PathBuf,
        wait_accounting: Option<WaitAccounting>,
        format: OutputFormat,
    },
}

/// Parse arguments (program name excluded)
pub fn parse_args<I, S>(args: I) -> SimResult<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);
    let mut positionals = Vec::new();
    let mut tasks_path = None;
    let mut request_path = None;
    let mut wait_accounting = None;
    let mut format = OutputFormat::Json;

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--table" => format = OutputFormat::Table,
            "--tasks" => {
                tasks_path = Some(PathBuf::from(flag_value(&flag, inline_value, &mut args)?));
            }
            "--request" => {
                request_path = Some(PathBuf::from(flag_value(&flag, inline_value, &mut args)?));
            }
            "--wait-accounting" => {
                let value = flag_value(&flag, inline_value, &mut args)?;
                wait_accounting = Some(value.parse().map_err(SimError::Usage)?);
            }
            other if other.starts_with("--") => {
                return Err(SimError::Usage(format!("Unknown option '{}'", other)));
            }
            _ => positionals.push(arg),
        }
    }

    if let Some(path) = request_path {
        if !positionals.is_empty() || tasks_path.is_some() {
            return Err(SimError::Usage(
                "--request cannot be combined with an algorithm or --tasks".to_string(),
            ));
        }
        return Ok(Command::Request {
            path,
            wait_accounting,
            format,
        });
    }

    let mut positionals = positionals.into_iter();
    let name = positionals
        .next()
        .ok_or_else(|| SimError::Usage("Missing algorithm".to_string()))?;
    let kind: AlgorithmKind = name.parse()?;

    let quantum = if kind.needs_quantum() {
        let raw = positionals.next().ok_or(SchedulerError::MissingQuantum)?;
        Some(raw.parse::<TimeQuantum>()?)
    } else {
        None
    };

    if let Some(extra) = positionals.next() {
        return Err(SimError::Usage(format!("Unexpected argument '{}'", extra)));
    }

    let mut algorithm = Algorithm::from_kind(kind, quantum)?;
    if let Some(accounting) = wait_accounting {
        algorithm = algorithm.with_accounting(accounting);
    }

    Ok(Command::Run {
        algorithm,
        tasks_path,
        format,
    })
}

fn flag_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> SimResult<String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| SimError::Usage(format!("{} requires a value", flag)))
}
