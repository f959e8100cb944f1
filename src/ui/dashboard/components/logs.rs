//! Dashboard logs panel component
//!
//! Renders the rolling status log, newest line first

use super::super::utils::{NERV_ORANGE, NERV_RED};
use crate::consts::cli_consts::MAX_LOG_ENTRIES;
use crate::gadgets::log_rotator::{ANGEL_ALERT, LogBuffer};
use ratatui::Frame;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Panel title with fill level and the time of the newest line.
fn logs_title(log: &LogBuffer) -> String {
    match log.newest() {
        Some(entry) => format!(
            "STATUS LOG [{}/{}] {}",
            log.len(),
            MAX_LOG_ENTRIES,
            entry.timestamp
        ),
        None => "STATUS LOG".to_string(),
    }
}

/// Render the status log panel.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, log: &LogBuffer) {
    // Account for borders and padding
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = max_logs.max(1);

    let log_paragraph = if log.is_empty() {
        Paragraph::new(vec![Line::from("SYSTEM BOOT...")])
    } else {
        let log_lines: Vec<Line> = log
            .entries()
            .take(log_count)
            .map(|entry| {
                let style = if entry.message == ANGEL_ALERT {
                    Style::default().fg(NERV_RED).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(NERV_ORANGE)
                };
                Line::from(Span::styled(entry.line(), style))
            })
            .collect();
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title(logs_title(log))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(NERV_ORANGE))
        .padding(Padding::horizontal(1));

    let log_widget = log_paragraph.block(logs_block).wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gadgets::log_rotator::LogEntry;

    #[test]
    fn title_tracks_newest_entry() {
        let mut log = LogBuffer::new();
        assert_eq!(logs_title(&log), "STATUS LOG");
        log.prepend(LogEntry {
            timestamp: "07:15:00".to_string(),
            message: ANGEL_ALERT.to_string(),
        });
        assert_eq!(logs_title(&log), "STATUS LOG [1/10] 07:15:00");
    }
}
