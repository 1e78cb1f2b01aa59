use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for whatever currently receives key presses
fn hints(app: &AppState) -> &'static str {
    match app.ui_mode {
        UiMode::Alert => " Enter/Esc dismiss",
        UiMode::CreateList => {
            " type name   Tab/←/→ color   Backspace erase   Enter create   Esc cancel"
        }
        UiMode::DeleteLists => " ↑/↓ move   Space toggle   Enter delete   Esc cancel",
        UiMode::Normal => match app.detail() {
            Some(session) if session.is_editing() => {
                " type title   ↑/↓ switch task   Enter commit   Esc discard"
            }
            Some(_) => {
                " ↑/↓ select   Space done   Enter/e edit   a add   x delete   s/Esc save & back"
            }
            None => " ←/→ select   Enter open   a new list   d delete lists   q quit",
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}
