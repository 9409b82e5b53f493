//! Timed effects and theme switching
//!
//! Everything here runs off deadlines checked once per frame.

use crate::{logic, App};
use lepeva::logic::confetti::Confetti;
use lepeva::model::types::UploadPhase;
use lepeva::{Screen, Theme};
use std::time::Instant;

impl App {
    pub(crate) fn fire_confetti(&mut self) {
        if !self.model.ui.confetti_enabled {
            return;
        }
        let mut rng = rand::thread_rng();
        self.model.ui.confetti = Some(Confetti::spawn(&mut rng, Instant::now()));
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.model.ui.theme != theme {
            tracing::debug!(theme = theme.as_str(), "theme changed");
            self.model.ui.theme = theme;
        }
    }

    pub(crate) fn cycle_theme(&mut self) {
        self.set_theme(logic::ui::cycle_theme(self.model.ui.theme));
    }

    /// Advance every deadline-driven effect to `now`
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.model.ui.should_dismiss_toast(now) {
            self.model.ui.dismiss_toast();
        }

        if self
            .model
            .ui
            .confetti
            .as_ref()
            .is_some_and(|c| c.is_expired(now))
        {
            self.model.ui.confetti = None;
        }

        if let Some(at) = self.model.ui.welcome_confetti_at {
            if now >= at {
                self.model.ui.welcome_confetti_at = None;
                self.fire_confetti();
            }
        }

        if let UploadPhase::Complete { finished_at, .. } = self.model.ui.upload_phase {
            let elapsed = now.saturating_duration_since(finished_at).as_millis();
            if logic::ui::upload_banner_expired(elapsed) {
                self.model.ui.upload_phase = UploadPhase::Idle;
            }
        }

        if self.model.ui.screen == Screen::Materials {
            let elapsed = now
                .saturating_duration_since(self.model.ui.last_tip_change)
                .as_millis();
            if logic::ui::should_rotate_tip(elapsed) {
                self.model.ui.active_tip = logic::ui::next_tip(self.model.ui.active_tip);
                self.model.ui.last_tip_change = now;
            }
        }
    }
}
