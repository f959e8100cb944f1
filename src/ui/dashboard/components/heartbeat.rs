//! Heartbeat chart panel

use crate::gadgets::heartbeat::HeartbeatChart;
use super::super::utils::{HEARTBEAT_GREEN, NERV_ORANGE};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

const Y_MAX: f64 = 10.0;

pub fn render_heartbeat(f: &mut Frame, area: ratatui::layout::Rect, chart: &HeartbeatChart) {
    let points = chart.points();
    let x_max = chart.max_points().saturating_sub(1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("PILOT")
            .marker(Marker::Braille)
            .style(Style::default().fg(HEARTBEAT_GREEN))
            .graph_type(GraphType::Line)
            .data(&points),
    ];

    // Oldest and newest sample times
    let x_labels: Vec<Span> = match (chart.labels().next(), chart.labels().next_back()) {
        (Some(first), Some(last)) => {
            vec![Span::raw(first.to_string()), Span::raw(last.to_string())]
        }
        _ => vec![Span::raw("--:--:--"), Span::raw("--:--:--")],
    };
    let y_labels = vec![Span::raw("0"), Span::raw("5"), Span::raw("10")];

    let block = Block::default()
        .title(format!("HEARTBEAT [{}/{}]", chart.len(), chart.max_points()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(NERV_ORANGE));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, Y_MAX])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
