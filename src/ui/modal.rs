use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, gradient_colors, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the create-list form: title input plus one swatch row per palette color
pub fn render_create_list_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::CreateList {
        return;
    }
    let form = &app.create_form;
    let palette = app.store.palette();
    let modal_area = create_modal_area(area, palette.len() as u16 + 10);

    f.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::raw(""),
        Line::styled("  Name:", modal_title_style()),
        Line::from(vec![
            Span::raw("  > "),
            Span::raw(form.title.clone()),
            Span::raw("█"),
        ]),
        Line::raw(""),
        Line::styled("  Color:", modal_title_style()),
    ];

    for (i, key) in palette.keys().enumerate() {
        let (start, end) = gradient_colors(palette, key);
        let marker = if i == form.color_cursor { "  › " } else { "    " };
        let chosen = form.selected.as_deref() == Some(key);
        let label_style = if chosen {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled("██", Style::default().fg(start)),
            Span::styled("██", Style::default().fg(end)),
            Span::raw(" "),
            Span::styled(key.to_string(), label_style),
            Span::raw(if chosen { "  ✓" } else { "" }),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Create  "),
        Span::styled("[Tab]", modal_title_style()),
        Span::raw(" Color  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" New List ", modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}

/// Render the multi-select delete dialog in display order.
///
/// Rows scroll with the selector cursor once there are more lists than fit.
pub fn render_delete_lists_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::DeleteLists {
        return;
    }
    let selector = &app.delete_selector;
    let rows = u16::try_from(app.store.len()).unwrap_or(u16::MAX);
    let modal_area = create_modal_area(area, rows.saturating_add(5));

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Delete Lists ", modal_title_style()))
        .style(modal_bg_style());
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Padding
            Constraint::Min(1),    // Lists
            Constraint::Length(1), // Padding
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    if app.store.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("  No lists to delete.", hint_style())),
            chunks[1],
        );
    } else {
        let items: Vec<ListItem> = app
            .store
            .displayed()
            .enumerate()
            .map(|(d, list)| {
                let (checkbox, title_style) = if selector.is_selected(d) {
                    ("[x] ", error_style())
                } else {
                    ("[ ] ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::raw(checkbox),
                    Span::styled(list.title.clone(), title_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("  › ");

        let mut state = ListState::default();
        state.select(Some(selector.cursor()));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    let hints = Line::from(vec![
        Span::styled("  [Space]", modal_title_style()),
        Span::raw(" Toggle  "),
        Span::styled("[Enter]", modal_title_style()),
        Span::raw(format!(" Delete {}  ", selector.selected_count())),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel"),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Render a blocking alert
pub fn render_alert_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(alert) = &app.alert else {
        return;
    };
    let modal_area = create_modal_area(area, 7);

    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", alert.message)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", alert.title),
                    modal_title_style(),
                ))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
