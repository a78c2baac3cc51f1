use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::hex_to_color;
use super::theme::Theme;
use crate::app::App;

pub fn build_generator_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    if app.current.is_empty() {
        lines.push(Line::from("Press 'g' to generate a palette."));
        return Text::from(lines);
    }

    for (index, hex) in app.current.iter().enumerate() {
        let selected = index == app.selected_swatch_index;
        let marker_style = if selected {
            Style::default().fg(Theme::selection_marker())
        } else {
            Style::default().fg(Theme::dim())
        };
        let hex_style = if selected {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };
        let bar_style = match hex_to_color(hex) {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };

        let mut spans = vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled("████████████████", bar_style),
            Span::raw("  "),
            Span::styled(hex.as_str(), hex_style),
        ];
        if index == 0 {
            spans.push(Span::styled("  primary", Style::default().fg(Theme::dim())));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Each color after the first is a variant of the one above it.",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
