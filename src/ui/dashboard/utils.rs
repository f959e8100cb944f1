//! Dashboard utility functions
//!
//! Palette and helpers shared across dashboard components

use crate::gadgets::waveform::{Stroke, Tint};
use ratatui::prelude::Color;

pub const NERV_ORANGE: Color = Color::Rgb(255, 102, 0);
pub const NERV_RED: Color = Color::Rgb(255, 0, 0);
pub const TRACE_BLUE: Color = Color::Rgb(0, 198, 255);
pub const TRACE_PINK: Color = Color::Rgb(255, 51, 102);
pub const GRID_BLUE: Color = Color::Rgb(0, 70, 100);
pub const HEARTBEAT_GREEN: Color = Color::Rgb(57, 255, 20);
pub const PANEL_BG: Color = Color::Rgb(16, 12, 10);

/// Map a waveform stroke to a terminal color. Thin strokes are the grid.
pub fn stroke_color(stroke: &Stroke) -> Color {
    match stroke.tint {
        Tint::Blue if stroke.width < 1.0 => GRID_BLUE,
        Tint::Blue => TRACE_BLUE,
        Tint::Pink => TRACE_PINK,
    }
}

/// Color of a temperature readout.
pub fn temp_color(warning: bool) -> Color {
    if warning { NERV_RED } else { NERV_ORANGE }
}

/// Width of a `[0, 100]` gauge as u16, clamped.
pub fn gauge_percent(value: f64) -> u16 {
    value.clamp(0.0, 100.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_strokes_are_dimmer_than_traces() {
        let grid = Stroke {
            tint: Tint::Blue,
            width: 0.5,
        };
        let trace = Stroke {
            tint: Tint::Blue,
            width: 3.0,
        };
        assert_eq!(stroke_color(&grid), GRID_BLUE);
        assert_eq!(stroke_color(&trace), TRACE_BLUE);
        assert_eq!(
            stroke_color(&Stroke {
                tint: Tint::Pink,
                width: 3.0
            }),
            TRACE_PINK
        );
    }

    #[test]
    fn gauge_percent_clamps() {
        assert_eq!(gauge_percent(-3.0), 0);
        assert_eq!(gauge_percent(97.4), 97);
        assert_eq!(gauge_percent(140.0), 100);
    }
}
