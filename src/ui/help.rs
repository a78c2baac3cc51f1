use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Style::default().fg(Theme::text())),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Keyboard Shortcuts",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section("Global"));
    lines.push(key_line("q", "Quit application"));
    lines.push(key_line("?", "Toggle this help screen"));
    lines.push(key_line("Esc", "Go back to the previous view"));
    lines.push(Line::from(""));

    lines.push(section("Generator"));
    lines.push(key_line("g / Space", "Generate a new palette"));
    lines.push(key_line("Up/Down", "Select a swatch"));
    lines.push(key_line("y / Enter", "Pick up the selected hex value"));
    lines.push(key_line("s", "Save the current palette"));
    lines.push(key_line("v", "Open the saved palettes view"));
    lines.push(Line::from(""));

    lines.push(section("Saved palettes"));
    lines.push(key_line("Up/Down", "Select a palette"));
    lines.push(key_line("Enter", "Load the palette into the generator"));
    lines.push(key_line("d", "Delete the palette (asks to confirm)"));
    lines.push(key_line("r", "Refresh the list"));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Tips",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled("  •", Style::default().fg(Theme::dim())),
        Span::styled(
            "  The first swatch is the primary; the rest are chained variants",
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  •", Style::default().fg(Theme::dim())),
        Span::styled(
            "  `palettr show <id>` prints a saved palette for piping",
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  •", Style::default().fg(Theme::dim())),
        Span::styled(
            "  Saving an identical palette twice is rejected",
            Style::default().fg(Theme::text()),
        ),
    ]));

    Text::from(lines)
}
