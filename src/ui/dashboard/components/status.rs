//! Unit status panel

use crate::gadgets::status::{StatusBoard, UNITS, UnitStatus};
use super::super::utils::NERV_ORANGE;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn status_color(status: UnitStatus) -> Color {
    match status {
        UnitStatus::Active => Color::LightGreen,
        UnitStatus::Standby => Color::Yellow,
        UnitStatus::Offline => Color::Red,
    }
}

pub fn render_status(f: &mut Frame, area: ratatui::layout::Rect, board: &StatusBoard) {
    let mut lines = vec![Line::from(vec![
        Span::styled("CODE ", Style::default().fg(Color::Gray)),
        Span::styled(
            board.code.to_string(),
            Style::default()
                .fg(NERV_ORANGE)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(UNITS.iter().zip(board.units.iter()).map(|(name, status)| {
        Line::from(vec![
            Span::styled(format!("{:<8}", name), Style::default().fg(Color::Gray)),
            Span::styled(status.to_string(), Style::default().fg(status_color(*status))),
        ])
    }));

    let block = Block::default()
        .title("UNIT STATUS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(NERV_ORANGE))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
