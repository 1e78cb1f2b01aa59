use crate::app::AppState;
use crate::ui::styles::{
    border_style, default_style, done_style, editing_style, gradient_colors, hint_style,
    selected_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the open list's working copy of tasks
pub fn render_detail_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(session) = app.detail() else {
        return;
    };

    let color = app
        .store
        .find_by_id(session.list_id())
        .map(|list| list.color.as_str())
        .unwrap_or_default();
    let (start_color, end_color) = gradient_colors(app.store.palette(), color);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style().fg(start_color))
        .title(Span::styled(
            format!(" {} ", session.list_title()),
            Style::default().fg(end_color).add_modifier(Modifier::BOLD),
        ));

    let tasks = session.tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  No tasks yet. Press a to add one.", hint_style()),
        ])
        .block(block);
        f.render_widget(empty, chunks[0]);
    } else {
        let editing = session.editing_index();
        let items: Vec<ListItem> = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let checkbox = if task.done { "[x] " } else { "[ ] " };
                let line = if editing == Some(i) {
                    Line::from(vec![
                        Span::raw(checkbox),
                        Span::styled(session.buffer().to_string(), editing_style()),
                        Span::styled("█", editing_style()),
                    ])
                } else if task.done {
                    Line::from(vec![
                        Span::raw(checkbox),
                        Span::styled(task.title.clone(), done_style()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw(checkbox),
                        Span::styled(task.title.clone(), default_style()),
                    ])
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(selected_style())
            .highlight_symbol("› ");

        let mut state = ListState::default();
        state.select(Some(session.cursor()));
        f.render_stateful_widget(list, chunks[0], &mut state);
    }

    let remaining = tasks.iter().filter(|t| !t.done).count();
    let completed = tasks.len() - remaining;
    let summary = Paragraph::new(Line::styled(
        format!(" {} remaining · {} completed", remaining, completed),
        hint_style(),
    ));
    f.render_widget(summary, chunks[1]);
}
