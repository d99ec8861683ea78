//! TUI (Text User Interface): type, preview, quick-format, and copy.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::time::{Duration, Instant};

use crate::core::clipboard::Copier;
use crate::core::config::Config;

use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop until Ctrl+C.
pub fn run(config: Config, copier: Copier) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Kitty keyboard protocol: Alt+key as single event with modifier (Ghostty, WezTerm, kitty, etc.)
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    let mut app = App::new(&config, copier);
    log::info!("TUI started (max chars {})", app.max_chars);

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| draw::draw(f, &mut app, f.area(), now))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))?
            && let Event::Key(key) = event::read()?
            && handlers::handle_key(key, &mut app, Instant::now()) == HandleResult::Break
        {
            break;
        }
    }

    terminal.show_cursor()?;
    log::info!("TUI closed");
    Ok(())
}
