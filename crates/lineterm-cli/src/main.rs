use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};

use lineterm::{BufScanner, Scanner, TermError};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Starting with {:?}", cli);

    match lineterm::open(cli.term_config()) {
        Ok(term) => run(term, &cli.prompt),
        Err(TermError::NotSupported) => {
            eprintln!(
                "{}",
                "Line editing not supported on this terminal, reading plain input".yellow()
            );
            let stdin = io::stdin();
            run(BufScanner::new(stdin.lock(), io::stdout()), &cli.prompt)
        }
        Err(e) => Err(e).context("Failed to open terminal"),
    }
}

/// Echo lines until `exit`, `quit` or end of input
fn run<S: Scanner + Write>(mut input: S, prompt: &str) -> Result<()> {
    input.write_prompt(prompt)?;

    while input.scan() {
        let line = input.text().trim().to_string();
        if line == "exit" || line == "quit" {
            writeln!(input, "{}", "Goodbye!".bright_cyan())?;
            break;
        }
        if line.is_empty() {
            continue;
        }
        writeln!(input, "{} {}", "=>".bright_green(), line)?;
    }

    if let Some(e) = input.err() {
        let message = e.to_string();
        input.close().ok();
        anyhow::bail!("Input failed: {}", message);
    }

    input.close().context("Failed to close terminal")?;
    Ok(())
}
