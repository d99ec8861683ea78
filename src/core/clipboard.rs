//! Clipboard access: system clipboard first, a transient helper process as fallback.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Errors from a single clipboard mechanism.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("system clipboard: {0}")]
    System(#[from] arboard::Error),
    #[error("no clipboard helper found (tried {0})")]
    NoHelper(String),
    #[error("{program} exited with {status}")]
    HelperFailed { program: String, status: String },
    #[error("clipboard helper I/O: {0}")]
    Io(#[from] io::Error),
}

/// Both mechanisms failed; nothing was copied.
#[derive(Debug, thiserror::Error)]
#[error("copy failed ({primary}); fallback also failed ({fallback})")]
pub struct CopyError {
    pub primary: ClipboardError,
    pub fallback: ClipboardError,
}

/// Which mechanism ended up holding the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Primary,
    Fallback,
}

/// Something that can receive text for the clipboard.
pub trait ClipboardSink {
    fn name(&self) -> &'static str;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard via arboard.
///
/// The handle is opened on first write and kept afterwards: on Linux the selection is
/// only served while a `Clipboard` is alive. A failed write drops it so the next call
/// reconnects.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.handle.take() {
            Some(c) => c,
            None => arboard::Clipboard::new()?,
        };
        clipboard.set_text(text.to_owned())?;
        self.handle = Some(clipboard);
        Ok(())
    }
}

/// External program that reads the clipboard contents from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Helper {
    pub program: String,
    pub args: Vec<String>,
}

impl Helper {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Fallback: pipe the text into the first helper that can be spawned.
/// The child process lives only for the duration of one call.
pub struct CommandClipboard {
    helpers: Vec<Helper>,
}

impl CommandClipboard {
    pub fn new(helpers: Vec<Helper>) -> Self {
        Self { helpers }
    }

    /// Helpers commonly installed on the current platform, in preference order.
    pub fn platform_default() -> Self {
        let helpers = if cfg!(target_os = "macos") {
            vec![Helper::new("pbcopy", &[])]
        } else if cfg!(windows) {
            vec![Helper::new("clip", &[])]
        } else {
            vec![
                Helper::new("wl-copy", &[]),
                Helper::new("xclip", &["-selection", "clipboard"]),
                Helper::new("xsel", &["--clipboard", "--input"]),
            ]
        };
        Self::new(helpers)
    }

    fn run(helper: &Helper, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&helper.program)
            .args(&helper.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // stdin is dropped after the write so the helper sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::HelperFailed {
                program: helper.program.clone(),
                status: status.to_string(),
            });
        }
        written?;
        Ok(())
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> &'static str {
        "helper"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = None;
        for helper in &self.helpers {
            match Self::run(helper, text) {
                Ok(()) => {
                    log::debug!("copied {} bytes via {}", text.len(), helper.program);
                    return Ok(());
                }
                Err(ClipboardError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("clipboard helper {} not installed", helper.program);
                }
                Err(e) => {
                    log::debug!("clipboard helper {} failed: {}", helper.program, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| {
            let tried: Vec<&str> = self.helpers.iter().map(|h| h.program.as_str()).collect();
            ClipboardError::NoHelper(tried.join(", "))
        }))
    }
}

/// Primary + fallback pair. Both paths report success the same way.
pub struct Copier {
    primary: Box<dyn ClipboardSink>,
    fallback: Box<dyn ClipboardSink>,
}

impl Copier {
    pub fn new(primary: Box<dyn ClipboardSink>, fallback: Box<dyn ClipboardSink>) -> Self {
        Self { primary, fallback }
    }

    /// arboard first, then the platform's command-line helpers.
    pub fn system() -> Self {
        Self::new(
            Box::new(SystemClipboard::new()),
            Box::new(CommandClipboard::platform_default()),
        )
    }

    pub fn copy(&mut self, text: &str) -> Result<CopyMethod, CopyError> {
        let primary = match self.primary.write_text(text) {
            Ok(()) => return Ok(CopyMethod::Primary),
            Err(e) => e,
        };
        log::warn!(
            "{} clipboard failed ({}), trying {}",
            self.primary.name(),
            primary,
            self.fallback.name()
        );
        match self.fallback.write_text(text) {
            Ok(()) => Ok(CopyMethod::Fallback),
            Err(fallback) => {
                log::error!("{} clipboard failed too: {}", self.fallback.name(), fallback);
                Err(CopyError { primary, fallback })
            }
        }
    }
}
