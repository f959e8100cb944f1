//! Waveform canvas panel

use crate::gadgets::waveform::Sketch;
use super::super::utils::{NERV_ORANGE, stroke_color};
use ratatui::Frame;
use ratatui::prelude::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders};

/// Replay the recorded sketch onto a braille canvas. The sketch grows
/// downward, the canvas upward, so y is flipped.
pub fn render_waveform(f: &mut Frame, area: ratatui::layout::Rect, sketch: &Sketch) {
    let height = sketch.height as f64;
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title("PATTERN ANALYSIS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(NERV_ORANGE)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, sketch.width as f64])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for (path, stroke) in sketch.paths() {
                let color = stroke_color(stroke);
                for pair in path.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].x,
                        y1: height - pair[0].y,
                        x2: pair[1].x,
                        y2: height - pair[1].y,
                        color,
                    });
                }
            }
        });

    f.render_widget(canvas, area);
}
