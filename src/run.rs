//! Application run modes: logger init, one-shot formatting, TUI launch.

use std::io::{self, Read};

use serde::Serialize;

use crate::cli::Args;
use crate::core;
use crate::core::clipboard::{CopyMethod, Copier};
use crate::core::config::Config;
use crate::core::marker::FormatKind;
use crate::core::session::Session;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_file()
        && let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = logger.try_init();
}

/// Options for the `format` subcommand.
pub struct FormatRequest {
    pub text: Option<String>,
    pub apply: Option<FormatKind>,
    pub copy: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FormatReport<'a> {
    input: &'a str,
    formatted: &'a str,
    chars: usize,
    max_chars: usize,
    over_limit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    copied: Option<&'static str>,
}

/// Read the text argument, falling back to stdin for `-` or no argument.
fn read_input(text: Option<String>) -> io::Result<String> {
    match text {
        Some(t) if t != "-" => Ok(t),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(strip_trailing_newline(buf))
        }
    }
}

/// Drop the single newline most shells and editors append to piped input.
fn strip_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

/// Format once and print to stdout.
pub fn run_format(
    request: FormatRequest,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::with_input(read_input(request.text)?);
    if let Some(kind) = request.apply
        && !session.apply_format(kind)
    {
        log::info!("input is blank, --apply {} skipped", kind);
    }

    let copied = if request.copy && session.can_copy() {
        let method = Copier::system().copy(session.formatted())?;
        log::info!("copied {} chars", session.formatted().chars().count());
        Some(match method {
            CopyMethod::Primary => "system",
            CopyMethod::Fallback => "helper",
        })
    } else {
        None
    };

    if request.json {
        let report = FormatReport {
            input: session.input(),
            formatted: session.formatted(),
            chars: session.char_count(),
            max_chars: config.max_chars,
            over_limit: session.over_limit(config.max_chars),
            copied,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if session.over_limit(config.max_chars) {
            log::warn!(
                "input is {} (over the {} character guide)",
                session.counter_label(config.max_chars),
                config.max_chars
            );
        }
        println!("{}", session.formatted());
        if copied.is_some() {
            eprintln!("Copied!");
        }
    }
    Ok(())
}

/// Print each example message and what it formats to.
pub fn print_examples() {
    for (i, example) in core::presets::examples().iter().enumerate() {
        println!("Example {} ({}):", i + 1, example.label);
        println!("  input:     {}", example.text);
        println!("  formatted: {}", core::formatter::transform(&example.text));
    }
}

/// Print effective configuration.
pub fn print_config(config: &Config) {
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!(
        "max chars:     {} ({})",
        config.max_chars,
        core::config::MAX_CHARS_VAR
    );
    println!(
        "copy feedback: {} ms ({})",
        config.copy_feedback.as_millis(),
        core::config::COPY_FEEDBACK_VAR
    );
    match core::paths::log_file() {
        Some(p) => println!("log file:      {}", p.display()),
        None => println!("log file:      (no cache directory)"),
    }
}

/// Launch the TUI on the current thread.
pub fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    crate::tui::run(config, Copier::system())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_trailing_newline_variants() {
        assert_eq!(strip_trailing_newline("a\n".to_string()), "a");
        assert_eq!(strip_trailing_newline("a\r\n".to_string()), "a");
        assert_eq!(strip_trailing_newline("a\n\n".to_string()), "a\n");
        assert_eq!(strip_trailing_newline("a".to_string()), "a");
    }

    #[test]
    fn read_input_prefers_argument() {
        assert_eq!(read_input(Some("*x*".to_string())).unwrap(), "*x*");
    }

    #[test]
    fn report_omits_copied_when_not_copying() {
        let report = FormatReport {
            input: "`a`",
            formatted: "```a```",
            chars: 3,
            max_chars: 1000,
            over_limit: false,
            copied: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["formatted"], "```a```");
        assert!(json.get("copied").is_none());
    }
}
