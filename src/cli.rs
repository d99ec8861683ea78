//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::marker::FormatKind;

const AFTER_HELP: &str = "\
EXAMPLES:
  wa-formatter                               Launch interactive TUI
  wa-formatter format \"run \\`make\\` first\"   Print WhatsApp-ready text
  wa-formatter format - < draft.txt          Read the text from stdin
  wa-formatter format --apply bold hello     Wrap the whole text, then format
  wa-formatter format --copy \"||spoiler||\"   Also copy the result to the clipboard
  wa-formatter format --json \"*hi*\"          Machine-readable output
  wa-formatter examples                      List the built-in example messages
  wa-formatter config                        Show effective configuration
  wa-formatter completions bash              Generate bash completions

MARKUP:
  *bold*  _italic_  ~strike~  `mono` -> ```mono```  ||spoiler|| -> ' spoiler '
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Style plain text with WhatsApp markup, preview it, and copy it",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format text once and print the result
    Format {
        /// Text to format ('-' or omitted reads stdin)
        text: Option<String>,
        /// Wrap the whole text in a marker before formatting
        #[arg(short = 'a', long, value_enum)]
        apply: Option<FormatKind>,
        /// Copy the formatted text to the clipboard
        #[arg(short = 'c', long)]
        copy: bool,
        /// Print a JSON report instead of the bare text
        #[arg(long)]
        json: bool,
    },
    /// List the built-in example messages
    Examples,
    /// Show effective configuration and log path
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no subcommand was given and the TUI will take over the terminal.
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}
