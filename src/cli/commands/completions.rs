//! `passman completions` — print a shell completion script to stdout.
//!
//!   passman completions bash > ~/.local/share/bash-completion/completions/passman

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut out = io::stdout().lock();
    write_script(shell, &mut out);
    out.flush()?;
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "passman", out);
}
