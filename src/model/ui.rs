//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! screen, theme, dialogs, transient messages and effects.

use std::time::Instant;

use super::types::{InputDialog, UploadPhase, VimCommandState};
use crate::logic::confetti::Confetti;
use crate::{Screen, Theme};

/// UI preferences, dialogs and effects
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Which screen is showing
    pub screen: Screen,

    /// Active visual theme
    pub theme: Theme,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // DIALOGS & MESSAGES
    // ============================================
    /// Create-folder or upload input, if open
    pub input_dialog: Option<InputDialog>,

    /// Uploader panel lifecycle
    pub upload_phase: UploadPhase,

    /// Inline uploader error, cleared on the next successful action
    pub upload_error: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search query
    pub search_query: String,

    // ============================================
    // EFFECTS
    // ============================================
    /// Whether confetti is enabled at all
    pub confetti_enabled: bool,

    /// Running confetti burst
    pub confetti: Option<Confetti>,

    /// When the welcome burst should fire
    pub welcome_confetti_at: Option<Instant>,

    /// Index into the guide character's tips
    pub active_tip: usize,

    /// When the tip last rotated
    pub last_tip_change: Instant,

    /// Animation clock origin
    pub started_at: Instant,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model
    pub fn new(vim_mode: bool, theme: Theme) -> Self {
        let now = Instant::now();
        Self {
            screen: Screen::Landing,
            theme,
            vim_mode,
            vim_command_state: VimCommandState::None,
            input_dialog: None,
            upload_phase: UploadPhase::Idle,
            upload_error: None,
            toast_message: None,
            search_mode: false,
            search_query: String::new(),
            confetti_enabled: true,
            confetti: None,
            welcome_confetti_at: None,
            active_tip: 0,
            last_tip_change: now,
            started_at: now,
            should_quit: false,
        }
    }

    /// Check if any modal input is currently capturing keys
    pub fn has_modal(&self) -> bool {
        self.input_dialog.is_some() || self.search_mode
    }

    /// Close all modal inputs
    pub fn close_all_modals(&mut self) {
        self.input_dialog = None;
        self.search_mode = false;
        self.search_query.clear();
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.upload_phase, UploadPhase::Uploading { .. })
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed at `now`
    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            let elapsed = now.saturating_duration_since(*timestamp);
            crate::logic::ui::should_dismiss_toast(elapsed.as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
