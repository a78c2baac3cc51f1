use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::swatch_spans;
use super::theme::Theme;
use crate::app::App;

pub fn build_saved_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    if app.saved.is_empty() {
        lines.push(Line::from(
            "No palettes saved yet. Press 's' in the generator to save one.",
        ));
        return Text::from(lines);
    }

    let palette_lines = app
        .saved
        .iter()
        .enumerate()
        .map(|(index, palette)| {
            let selected = index == app.selected_saved_index;
            let marker_style = if selected {
                Style::default().fg(Theme::selection_marker())
            } else {
                Style::default().fg(Theme::dim())
            };
            let id_style = if selected {
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::accent())
            };

            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(
                    format!("{:>4}  ", palette.id.unwrap_or(0)),
                    id_style,
                ),
            ];
            spans.extend(swatch_spans(&palette.colors));
            spans.push(Span::styled(
                format!(" saved {}", palette.created_at.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Theme::dim()),
            ));
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    lines.extend(palette_lines);
    Text::from(lines)
}
