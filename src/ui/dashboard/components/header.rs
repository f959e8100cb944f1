//! Dashboard header component
//!
//! Renders the title and main power gauge

use super::super::state::DashboardState;
use super::super::utils::{NERV_ORANGE, NERV_RED, gauge_percent};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and power gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let alarm = state.hooks.warning_visible();
    let title_text = if alarm {
        format!("NERV CENTRAL DOGMA v{} - PATTERN BLUE", version)
    } else {
        format!("NERV CENTRAL DOGMA v{}", version)
    };
    let title_color = if alarm { NERV_RED } else { NERV_ORANGE };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Without readouts the gauge falls back to an uptime sweep
    let (label, percent) = match &state.hooks.readouts {
        Some(readouts) => (
            format!("MAIN POWER {}", readouts.format_power()),
            gauge_percent(readouts.power),
        ),
        None => {
            let uptime = state.start_time.elapsed().as_secs();
            (format!("UPTIME {}s", uptime), ((state.tick % 20) * 5) as u16)
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(NERV_ORANGE)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent)
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}
