use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Alert => handle_alert_mode(app, key),
        UiMode::CreateList => handle_create_list_mode(app, key),
        UiMode::DeleteLists => handle_delete_lists_mode(app, key),
        UiMode::Normal if app.detail().is_some() => handle_detail(app, key),
        UiMode::Normal => handle_overview(app, key),
    }
}

/// Handle keys on the list overview
fn handle_overview(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.move_selection_left();
            Ok(false)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.move_selection_right();
            Ok(false)
        }
        KeyCode::Enter => {
            app.open_selected();
            Ok(false)
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_create_list();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.start_delete_lists();
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

/// Handle keys on the detail screen
fn handle_detail(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let editing = app.detail().is_some_and(|s| s.is_editing());
    if editing {
        return handle_detail_editing(app, key);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.save_detail();
            return Ok(false);
        }
        _ => {}
    }

    let Some(session) = app.detail_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => session.move_up(),
        KeyCode::Down | KeyCode::Char('j') => session.move_down(),
        KeyCode::Char(' ') => {
            let cursor = session.cursor();
            session.toggle_done(cursor);
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            let cursor = session.cursor();
            session.begin_edit(cursor);
        }
        KeyCode::Char('a') | KeyCode::Char('A') => session.add_new_task(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            let cursor = session.cursor();
            session.delete_task(cursor);
        }
        _ => {}
    }
    Ok(false)
}

/// Handle keys while a task title is being edited
fn handle_detail_editing(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(session) = app.detail_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Enter => {
            session.commit();
        }
        KeyCode::Esc => session.cancel_edit(),
        KeyCode::Backspace => session.pop_char(),
        // Moving to another row edits that row; the pending text follows the switch policy
        KeyCode::Up => {
            if let Some(index) = session.editing_index() {
                if index > 0 {
                    session.begin_edit(index - 1);
                }
            }
        }
        KeyCode::Down => {
            if let Some(index) = session.editing_index() {
                session.begin_edit(index + 1);
            }
        }
        KeyCode::Char(c) => session.push_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the create-list form
fn handle_create_list_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_create_list(),
        KeyCode::Esc => app.cancel_create_list(),
        KeyCode::Tab | KeyCode::Right => app.create_form_next_color(),
        KeyCode::BackTab | KeyCode::Left => app.create_form_prev_color(),
        KeyCode::Backspace => app.create_form.pop_char(),
        KeyCode::Char(c) => app.create_form.push_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the delete-lists selector
fn handle_delete_lists_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.delete_selector.move_up(),
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.store.len();
            app.delete_selector.move_down(len);
        }
        KeyCode::Char(' ') => app.toggle_delete_selection(),
        KeyCode::Enter => app.confirm_delete_lists(),
        KeyCode::Esc => app.cancel_delete_lists(),
        _ => {}
    }
    Ok(false)
}

/// Any of Enter, Esc or Space dismisses an alert
fn handle_alert_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
    Ok(false)
}
