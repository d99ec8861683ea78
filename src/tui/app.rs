//! TUI application state: editing session, copy feedback, preview scroll.

use std::time::Instant;

use crate::core::clipboard::Copier;
use crate::core::config::Config;
use crate::core::indicator::CopyIndicator;
use crate::core::marker::FormatKind;
use crate::core::session::Session;

pub struct App {
    /// Input text and its formatted preview.
    pub(crate) session: Session,
    /// "Copied!" caption state for the copy trigger.
    pub(crate) indicator: CopyIndicator,
    pub(crate) copier: Copier,
    /// Counter limit (informational).
    pub(crate) max_chars: usize,
    /// First visible line of the preview.
    pub(crate) preview_scroll: u16,
    /// Max preview scroll from last draw; clamps scroll_down.
    pub(crate) last_preview_max_scroll: u16,
    /// Esc was pressed; next key = Option+key (Mac terminals with "Use option as meta").
    pub(crate) escape_pending: bool,
}

impl App {
    pub fn new(config: &Config, copier: Copier) -> Self {
        Self {
            session: Session::new(),
            indicator: CopyIndicator::new(config.copy_feedback),
            copier,
            max_chars: config.max_chars,
            preview_scroll: 0,
            last_preview_max_scroll: 0,
            escape_pending: false,
        }
    }

    pub(crate) fn apply_format(&mut self, kind: FormatKind) -> bool {
        let changed = self.session.apply_format(kind);
        if changed {
            self.preview_scroll = 0;
        }
        changed
    }

    pub(crate) fn load_example(&mut self, index: usize) -> bool {
        let loaded = self.session.load_example(index);
        if loaded {
            self.preview_scroll = 0;
        }
        loaded
    }

    pub(crate) fn clear(&mut self) {
        self.session.clear();
        self.indicator.cancel();
        self.preview_scroll = 0;
    }

    /// Copy the formatted text. Returns false when there is nothing to copy or both
    /// clipboard paths failed (the indicator then shows the failure).
    pub(crate) fn copy(&mut self, now: Instant) -> bool {
        if !self.session.can_copy() {
            return false;
        }
        match self.copier.copy(self.session.formatted()) {
            Ok(method) => {
                log::info!("copied formatted text ({:?})", method);
                self.indicator.mark_copied(now);
                true
            }
            Err(e) => {
                log::error!("{}", e);
                self.indicator.mark_failed(now);
                false
            }
        }
    }

    pub(crate) fn tick(&mut self, now: Instant) {
        self.indicator.tick(now);
    }

    pub(crate) fn scroll_down(&mut self, n: u16) {
        self.preview_scroll = self
            .preview_scroll
            .saturating_add(n)
            .min(self.last_preview_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, n: u16) {
        self.preview_scroll = self.preview_scroll.saturating_sub(n);
    }
}
