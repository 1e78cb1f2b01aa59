use crate::app::AppState;
use crate::domain::{ColorPalette, SwitchPolicy};
use crate::store::ListStore;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 30;

/// Draw the whole UI into an in-memory buffer and return plain text (no styles)
pub fn render_app(app: &AppState, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| super::render(f, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// App over an in-memory store holding the given lists, created in order
pub fn app_with_lists(lists: &[(&str, &str)]) -> AppState {
    let mut store = ListStore::in_memory(Vec::new(), ColorPalette::default());
    for (title, color) in lists {
        store.add_list(title, color).unwrap();
    }
    AppState::new(store, SwitchPolicy::Commit)
}
