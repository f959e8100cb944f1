//! Angel warning popup

use crate::gadgets::log_rotator::ANGEL_ALERT;
use crate::gadgets::warning::WarningOverlay;
use super::super::utils::NERV_RED;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Center a `width` x `height` box inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Draw the popup over whatever is already on screen. Does nothing while
/// the overlay is hidden.
pub fn render_overlay(f: &mut Frame, overlay: &WarningOverlay, now_ms: u64) {
    let Some(remaining) = overlay.remaining_ms(now_ms) else {
        return;
    };
    let area = centered_rect(f.area(), 40, 7);

    let lines = vec![
        Line::from("WARNING").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(ANGEL_ALERT),
        Line::from(format!("{:.1}s", remaining as f64 / 1000.0))
            .style(Style::default().fg(Color::Gray)),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(NERV_RED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(NERV_RED)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
