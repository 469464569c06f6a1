//! Interactive prompts using dialoguer

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::Input;

const DIRECTORY_PROMPT: &str = "Enter the directory path";

/// Ask the user for the directory to process.
///
/// Uses an interactive prompt on a terminal and falls back to reading a single
/// line from stdin when input is piped.
pub fn prompt_directory() -> Result<PathBuf> {
    let answer = if io::stdin().is_terminal() && io::stderr().is_terminal() {
        Input::<String>::new()
            .with_prompt(DIRECTORY_PROMPT)
            .interact_text()
            .context("Failed to read directory path")?
    } else {
        eprint!("{}: ", DIRECTORY_PROMPT);
        io::stderr().flush().ok();
        read_answer(io::stdin().lock())?
    };

    parse_directory_answer(&answer)
}

/// Read one line of input
pub fn read_answer<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read directory path from stdin")?;
    Ok(line)
}

/// Turn a typed answer into a path, trimming whitespace and expanding `~`
pub fn parse_directory_answer(answer: &str) -> Result<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        anyhow::bail!("No directory path given");
    }
    Ok(expand_home(trimmed, dirs::home_dir().as_deref()))
}

fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
