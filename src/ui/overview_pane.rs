use crate::app::AppState;
use crate::store::DisplaySlot;
use crate::ui::{
    layout::carousel_columns,
    styles::{gradient_colors, hint_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 10;

/// First slot shown so the selected slot stays as close to the middle as the ends allow
fn window_start(slot_count: usize, selected_slot: usize, visible: usize) -> usize {
    if slot_count <= visible {
        return 0;
    }
    selected_slot
        .saturating_sub(visible / 2)
        .min(slot_count - visible)
}

/// Render the horizontal carousel of list cards
pub fn render_overview_pane(f: &mut Frame, app: &AppState, area: Rect) {
    if app.store.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("No lists yet."),
            Line::styled("Press a to create one.", hint_style()),
        ])
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let slots = app.store.display_slots();
    // Slot 0 is the leading spacer
    let selected_slot = app.selected_index + 1;
    let visible = usize::from((area.width / CARD_WIDTH).max(1));
    let start = window_start(slots.len(), selected_slot, visible);
    let shown = visible.min(slots.len() - start);

    let height = CARD_HEIGHT.min(area.height);
    let row = Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    );

    for (offset, column) in carousel_columns(row, CARD_WIDTH, shown).into_iter().enumerate() {
        let slot_index = start + offset;
        if let DisplaySlot::List { list, .. } = slots[slot_index] {
            let (start_color, end_color) = gradient_colors(app.store.palette(), &list.color);
            let selected = slot_index == selected_slot;

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(start_color))
                .title(Span::styled(
                    format!(" {} ", list.title),
                    Style::default().fg(end_color).add_modifier(Modifier::BOLD),
                ));

            let lines = vec![
                Line::raw(""),
                Line::raw("Remaining"),
                Line::styled(
                    list.remaining().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw("Completed"),
                Line::styled(
                    list.completed().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];

            let card = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(card, column);
        }
    }
}
