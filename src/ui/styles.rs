use crate::domain::ColorPalette;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Big app header ("TODO lists")
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Rgb(0xEC, 0xDF, 0xCC))
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Checked-off task
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Task title being edited
pub fn editing_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::UNDERLINED)
}

/// Resolve a palette key to its gradient ends; unknown keys render gray
pub fn gradient_colors(palette: &ColorPalette, key: &str) -> (Color, Color) {
    let fallback = (Color::Gray, Color::DarkGray);
    let Some(gradient) = palette.get(key) else {
        return fallback;
    };
    match (gradient.start_rgb(), gradient.end_rgb()) {
        (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2))
        }
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_colors() {
        let palette = ColorPalette::default();
        assert_eq!(
            gradient_colors(&palette, "vividOrange"),
            (Color::Rgb(0xFF, 0x45, 0x00), Color::Rgb(0xFF, 0x63, 0x47))
        );
        assert_eq!(
            gradient_colors(&palette, "missing"),
            (Color::Gray, Color::DarkGray)
        );
    }
}
