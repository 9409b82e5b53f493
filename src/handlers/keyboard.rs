//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! Modal inputs (dialogs, search) get first refusal, then the active screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{logic, App};
use lepeva::model::types::{InputDialog, VimCommandState};
use lepeva::Screen;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    match app.model.ui.screen {
        Screen::Landing => handle_landing_key(app, key),
        Screen::Materials => {
            if app.model.ui.input_dialog.is_some() {
                handle_dialog_key(app, key);
            } else if app.model.ui.search_mode {
                handle_search_key(app, key);
            } else {
                handle_materials_key(app, key);
            }
        }
    }
    Ok(())
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => app.open_dashboard(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
        _ => {}
    }
}

/// Text entry for the create-folder and upload dialogs
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.input_dialog = None;
        }
        KeyCode::Enter => {
            // Take the dialog so it closes whatever the outcome
            match app.model.ui.input_dialog.take() {
                Some(InputDialog::CreateFolder { name }) => app.submit_create_folder(&name),
                Some(InputDialog::Upload { pattern }) => app.submit_upload(&pattern),
                None => {}
            }
        }
        KeyCode::Backspace => {
            if let Some(dialog) = app.model.ui.input_dialog.as_mut() {
                dialog.buffer_mut().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(dialog) = app.model.ui.input_dialog.as_mut() {
                dialog.buffer_mut().push(c);
            }
        }
        _ => {}
    }
}

/// Live filtering of the current folder
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.search_mode = false;
            app.model.ui.search_query.clear();
        }
        KeyCode::Enter => {
            // Keep the filter, return keys to the grid
            app.model.ui.search_mode = false;
        }
        KeyCode::Backspace => {
            app.model.ui.search_query.pop();
        }
        KeyCode::Char(c) => {
            app.model.ui.search_query.push(c);
        }
        _ => return,
    }

    let len = app.model.visible_entries().len();
    app.model.navigation.selected = logic::navigation::clamp_selection(app.model.navigation.selected, len);
}

fn handle_materials_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;

    // Any key but 'g' breaks a pending 'gg'
    if vim_mode && key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        // Breadcrumb jumps: Alt+1 is the top-level folder
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) && c.is_ascii_digit() => {
            if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                app.navigate_to_crumb(index);
            }
        }
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.search_mode = true;
        }
        KeyCode::Char('/') => app.model.ui.search_mode = true,

        KeyCode::Esc => {
            if app.model.navigation.is_dragging() {
                app.cancel_drag();
            } else if !app.model.ui.search_query.is_empty() {
                app.model.ui.search_query.clear();
                let len = app.model.visible_entries().len();
                app.model.navigation.selected =
                    logic::navigation::clamp_selection(app.model.navigation.selected, len);
            }
        }

        // Drag and drop
        KeyCode::Char('m') => {
            if app.model.navigation.is_dragging() {
                app.drop_on_selected();
            } else {
                app.pick_up_selected();
            }
        }
        KeyCode::Char('p') if app.model.navigation.is_dragging() => app.drop_here(),

        // Library actions
        KeyCode::Char('n') => app.open_create_folder_dialog(),
        KeyCode::Char('u') => app.open_upload_dialog(),

        // Themes
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(theme) = logic::ui::theme_for_digit(c) {
                app.set_theme(theme);
            }
        }

        KeyCode::Char('H') | KeyCode::Char('~') => app.go_home(),
        KeyCode::Char('L') => app.show_landing(),

        // Vim keybindings
        KeyCode::Char('h') if vim_mode => app.go_back(),
        KeyCode::Char('j') if vim_mode => app.row_down(),
        KeyCode::Char('k') if vim_mode => app.row_up(),
        KeyCode::Char('l') if vim_mode => open_or_drop(app),
        KeyCode::Char('g') if vim_mode => {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                app.jump_to_first();
                app.model.ui.vim_command_state = VimCommandState::None;
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        // Standard navigation keys
        KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        KeyCode::Enter => open_or_drop(app),
        KeyCode::Left => app.previous_item(),
        KeyCode::Right => app.next_item(),
        KeyCode::Up => app.row_up(),
        KeyCode::Down => app.row_down(),
        KeyCode::Tab => app.next_item(),
        KeyCode::BackTab => app.previous_item(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        _ => {}
    }
}

/// Enter drops while carrying, opens otherwise
fn open_or_drop(app: &mut App) {
    if app.model.navigation.is_dragging() {
        app.drop_on_selected();
    } else {
        app.open_selected();
    }
}
