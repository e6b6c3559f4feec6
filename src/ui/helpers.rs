use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Element;

use super::palette::Palette;

/// Center `text` inside `width` columns, truncating if it does not fit.
pub(crate) fn centered_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut content: String = text.chars().take(width).collect();
    let len = content.chars().count();
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    content.insert_str(0, &" ".repeat(left));
    content.push_str(&" ".repeat(right));
    content
}

/// Build the text of a periodic-table tile: atomic number, symbol and mass,
/// trimmed to whatever height the tile has.
pub(crate) fn build_tile_lines(
    element: &Element,
    palette: &Palette,
    inner_width: u16,
    inner_height: u16,
    selected: bool,
) -> Vec<Line<'static>> {
    let width = inner_width as usize;
    let height = inner_height as usize;
    if width == 0 || height == 0 {
        return vec![Line::from("")];
    }

    let mut base = Style::default()
        .fg(palette.text_on(element.family))
        .bg(palette.family(element.family));
    if selected {
        base = base.add_modifier(Modifier::REVERSED);
    }

    let number = format!("{:<width$}", element.id, width = width);
    let symbol = centered_text(&element.symbol, width);
    let mass = centered_text(&element.mass_label(), width);

    let mut lines = match height {
        1 => vec![Line::from(Span::styled(symbol, base.add_modifier(Modifier::BOLD)))],
        2 => vec![
            Line::from(Span::styled(number, base)),
            Line::from(Span::styled(symbol, base.add_modifier(Modifier::BOLD))),
        ],
        _ => vec![
            Line::from(Span::styled(number, base)),
            Line::from(Span::styled(symbol, base.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(mass, base)),
        ],
    };

    while lines.len() < height {
        lines.push(Line::from(Span::styled(" ".repeat(width), base)));
    }
    lines
}

/// A coloured capsule-style label, e.g. the family badge on the detail page.
pub(crate) fn badge(text: &str, bg: Color, fg: Color) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    )
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the quiz verdict popup.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
