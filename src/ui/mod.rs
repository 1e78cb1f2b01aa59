pub mod detail_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod overview_pane;
pub mod styles;

#[cfg(test)]
mod test_helpers;

use crate::app::AppState;
use detail_pane::render_detail_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_alert_modal, render_create_list_modal, render_delete_lists_modal};
use overview_pane::render_overview_pane;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use styles::{border_style, header_style};

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("TODO lists")
        .style(header_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(border_style()),
        );
    f.render_widget(header, area);
}

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, layout.header_area);
    render_keybindings(f, app, layout.keybindings_area);

    if app.detail().is_some() {
        render_detail_pane(f, app, layout.body_area);
    } else {
        render_overview_pane(f, app, layout.body_area);
    }

    // Modals draw over the body; an alert sits on top of everything
    render_create_list_modal(f, app, size);
    render_delete_lists_modal(f, app, size);
    render_alert_modal(f, app, size);
}
