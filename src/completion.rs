//! # Shell Completion Module
//!
//! Completion scripts for the supported shells, plus the artist names the
//! `similar` command completes against.
//!
//! ```bash
//! segue completion bash > ~/.local/share/bash-completion/completions/segue
//! segue completion zsh > ~/.config/zsh/completions/_segue
//! ```

use crate::catalog::Catalog;
use crate::cli::Shell;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::Write;

/// Writes the completion script for `cmd` to `out`.
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Artist display names, one per line, for shell scripts to complete
/// `segue similar` with.
pub fn artist_completions(catalog: &Catalog) -> Vec<String> {
    catalog
        .artists()
        .map(|artist| artist.name().replace(['\n', '\t'], " "))
        .collect()
}
