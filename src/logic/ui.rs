//! UI state transition logic
//!
//! Pure functions for theme cycling, tip rotation and the timed effects.

use crate::Theme;

/// How long a toast stays up
pub const TOAST_MS: u128 = 2000;

/// How long a confetti burst runs
pub const CONFETTI_MS: u128 = 3000;

/// How long the "Upload Complete!" banner stays up
pub const UPLOAD_COMPLETE_MS: u128 = 3000;

/// Delay between opening the dashboard and the welcome burst
pub const WELCOME_CONFETTI_DELAY_MS: u128 = 1000;

/// Tip rotation interval for the guide character
pub const TIP_ROTATION_MS: u128 = 8000;

/// What the guide character says, in rotation order
pub const TIPS: [&str; 5] = [
    "Drag and drop files into folders!",
    "Create colorful folders to organize your materials!",
    "Upload multiple files at once for faster workflow!",
    "Try different themes for more fun!",
    "Click on any folder to see what's inside!",
];

/// Whether a toast shown `elapsed_ms` ago should go away
///
/// # Examples
/// ```
/// use lepeva::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(100));
/// assert!(should_dismiss_toast(2000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_MS
}

/// Whether the current tip has been up long enough to rotate
pub fn should_rotate_tip(elapsed_ms: u128) -> bool {
    elapsed_ms >= TIP_ROTATION_MS
}

/// Index of the tip after `current`, wrapping
///
/// # Examples
/// ```
/// use lepeva::logic::ui::{next_tip, TIPS};
///
/// assert_eq!(next_tip(0), 1);
/// assert_eq!(next_tip(TIPS.len() - 1), 0);
/// ```
pub fn next_tip(current: usize) -> usize {
    (current + 1) % TIPS.len()
}

/// Text of the tip at `index`, wrapping out-of-range indices
pub fn tip_text(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}

/// Whether a burst started `elapsed_ms` ago is over
pub fn confetti_expired(elapsed_ms: u128) -> bool {
    elapsed_ms >= CONFETTI_MS
}

/// Whether the "Upload Complete!" banner should return to idle
pub fn upload_banner_expired(elapsed_ms: u128) -> bool {
    elapsed_ms >= UPLOAD_COMPLETE_MS
}

/// Cycle to the next theme: Default → Jungle → Ocean → Space → Default
///
/// # Arguments
/// * `current` - The active theme
///
/// # Returns
/// The next theme in the cycle
///
/// # Examples
/// ```
/// use lepeva::Theme;
/// use lepeva::logic::ui::cycle_theme;
///
/// assert_eq!(cycle_theme(Theme::Default), Theme::Jungle);
/// assert_eq!(cycle_theme(Theme::Jungle), Theme::Ocean);
/// assert_eq!(cycle_theme(Theme::Ocean), Theme::Space);
/// assert_eq!(cycle_theme(Theme::Space), Theme::Default);
/// ```
pub fn cycle_theme(current: Theme) -> Theme {
    match current {
        Theme::Default => Theme::Jungle,
        Theme::Jungle => Theme::Ocean,
        Theme::Ocean => Theme::Space,
        Theme::Space => Theme::Default,
    }
}

/// Theme picked by a number key, 1-based
pub fn theme_for_digit(digit: char) -> Option<Theme> {
    let index = digit.to_digit(10)? as usize;
    index.checked_sub(1).and_then(|i| Theme::ALL.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_rotation_visits_every_tip() {
        let mut seen = vec![0];
        let mut tip = 0;
        for _ in 1..TIPS.len() {
            tip = next_tip(tip);
            seen.push(tip);
        }
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(next_tip(tip), 0);
    }

    #[test]
    fn test_tip_text_wraps() {
        assert_eq!(tip_text(5), TIPS[0]);
    }

    #[test]
    fn test_timers() {
        assert!(!should_rotate_tip(7999));
        assert!(should_rotate_tip(8000));
        assert!(!confetti_expired(2999));
        assert!(confetti_expired(3000));
        assert!(upload_banner_expired(3000));
    }

    #[test]
    fn test_theme_for_digit() {
        assert_eq!(theme_for_digit('1'), Some(Theme::Default));
        assert_eq!(theme_for_digit('4'), Some(Theme::Space));
        assert_eq!(theme_for_digit('0'), None);
        assert_eq!(theme_for_digit('5'), None);
        assert_eq!(theme_for_digit('x'), None);
    }

    #[test]
    fn test_cycle_returns_to_start() {
        let mut theme = Theme::Default;
        for _ in 0..Theme::ALL.len() {
            theme = cycle_theme(theme);
        }
        assert_eq!(theme, Theme::Default);
    }
}
