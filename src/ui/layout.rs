use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top: app header (3 rows)
/// - Middle: overview carousel or detail pane
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        keybindings_area: chunks[2],
    }
}

/// Create a centered modal area of the given height (clamped to the screen)
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Split `area` into `count` equal columns of `width`, starting at the left edge
pub fn carousel_columns(area: Rect, width: u16, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let x = area.x.saturating_add(width.saturating_mul(i as u16));
            Rect::new(x, area.y, width.min(area.right().saturating_sub(x)), area.height)
        })
        .collect()
}
