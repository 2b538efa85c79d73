use crate::batch::{MalformedPolicy, Resolution};
use crate::error::Result;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parade")]
#[command(about = "Order names from \"X comes before Y\" statements")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// File of statements, one per line (stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Resolve the built-in demo statements instead of reading input
    #[arg(long, conflicts_with = "input")]
    pub demo: bool,

    /// Drop malformed lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn policy(&self) -> MalformedPolicy {
        if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        }
    }

    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Read every line from `path`, or from stdin when `path` is `None`.
pub fn read_lines(path: Option<&PathBuf>) -> Result<Vec<String>> {
    let lines = match path {
        Some(path) => BufReader::new(File::open(path)?)
            .lines()
            .collect::<io::Result<Vec<_>>>()?,
        None => io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?,
    };
    Ok(lines)
}

/// Render a resolution: one name per line, or a JSON object.
pub fn render(resolution: &Resolution, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(resolution)?);
    }
    Ok(resolution.order.join("\n"))
}
