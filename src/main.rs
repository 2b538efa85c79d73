use anyhow::Context;
use clap::Parser;
use parade::batch::{resolve_statements, DEMO_STATEMENTS};
use parade::cli::{read_lines, render, Cli};
use std::process;

fn main() {
    // Logs go to stderr so they never mix with the printed order
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let resolution = if cli.demo {
        resolve_statements(DEMO_STATEMENTS, cli.policy())?
    } else {
        let lines = match cli.input_path() {
            Some(path) => {
                read_lines(Some(path)).with_context(|| format!("reading {}", path.display()))?
            }
            None => read_lines(None).context("reading stdin")?,
        };
        resolve_statements(&lines, cli.policy())?
    };

    for skipped in &resolution.skipped {
        eprintln!(
            "Warning: skipped malformed line {}: {}",
            skipped.line_no, skipped.text
        );
    }

    let output = render(&resolution, cli.json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
