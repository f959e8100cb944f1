//! Dashboard footer component
//!
//! Renders footer with key hints

use super::super::utils::NERV_ORANGE;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the key hints for the current screen.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, hints: &str) {
    let footer_text = format!("[Q] Quit | {}", hints);

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(NERV_ORANGE)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
