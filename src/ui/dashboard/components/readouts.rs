//! Telemetry readouts panel

use crate::gadgets::telemetry::Telemetry;
use super::super::utils::{NERV_ORANGE, temp_color};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_readouts(f: &mut Frame, area: ratatui::layout::Rect, readouts: &Telemetry) {
    let value_style = Style::default()
        .fg(NERV_ORANGE)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled("SYNC RATIO:  ", label_style),
            Span::styled(readouts.format_sync_rate(), value_style),
        ]),
        Line::from(vec![
            Span::styled("CORE TEMP:   ", label_style),
            Span::styled(
                readouts.format_core_temp(),
                value_style.fg(temp_color(readouts.temp_warning)),
            ),
        ]),
        Line::from(vec![
            Span::styled("MAIN POWER:  ", label_style),
            Span::styled(readouts.format_power(), value_style),
        ]),
    ];

    let block = Block::default()
        .title("TELEMETRY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(NERV_ORANGE))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
