//! Radar scope panel

use crate::gadgets::radar::RadarScope;
use super::super::utils::{NERV_ORANGE, NERV_RED};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders};
use std::f64::consts::TAU;

const RINGS: [f64; 3] = [15.0, 30.0, 45.0];
const SWEEP_STEPS: usize = 36;

/// Render rings, a rotating sweep arm and the current blips. Blip positions
/// are percentages of the scope with y growing downward.
pub fn render_radar(f: &mut Frame, area: ratatui::layout::Rect, scope: &RadarScope, tick: usize) {
    let sweep_angle = (tick % SWEEP_STEPS) as f64 / SWEEP_STEPS as f64 * TAU;
    let title_color = if scope.blips().is_empty() {
        NERV_ORANGE
    } else {
        NERV_RED
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(
                    "RADAR [{}/{}]",
                    scope.blips().len(),
                    scope.bounds().end()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(title_color)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            let (cx, cy) = (50.0, 50.0);
            for radius in RINGS {
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius,
                    color: Color::DarkGray,
                });
            }
            ctx.draw(&CanvasLine {
                x1: cx,
                y1: cy,
                x2: cx + RINGS[2] * sweep_angle.cos(),
                y2: cy + RINGS[2] * sweep_angle.sin(),
                color: Color::LightGreen,
            });
            ctx.layer();
            for blip in scope.blips() {
                ctx.print(
                    blip.x_pct(),
                    100.0 - blip.y_pct(),
                    Span::styled(
                        "◆",
                        Style::default().fg(NERV_RED).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}
