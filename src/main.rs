//! # wa-formatter - WhatsApp text styling in the terminal
//!
//! Type plain text with `*bold*`, `_italic_`, `~strike~`, `` `mono` `` and
//! `||spoiler||` markers, watch the WhatsApp-ready preview update on every
//! keystroke, and copy the result to the clipboard.
//!
//! ## Modes
//! - Interactive TUI (default)
//! - One-shot `format` for scripts and pipes
//! - `examples`, `config`, and `completions` helpers

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::debug!("config: {:?}", config);

    let result = match args.command {
        Some(Commands::Format {
            text,
            apply,
            copy,
            json,
        }) => run::run_format(
            run::FormatRequest {
                text,
                apply,
                copy,
                json,
            },
            &config,
        ),
        Some(Commands::Examples) => {
            run::print_examples();
            Ok(())
        }
        Some(Commands::Config) => {
            run::print_config(&config);
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            Ok(())
        }
        None => run::launch_tui(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
