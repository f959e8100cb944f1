//! Grid and traveling sine/cosine traces.
//!
//! [`draw`] is a pure function of `(width, height, time)`: it clears the
//! surface first and uses no other input, so repeated draws never ghost.

use crate::consts::cli_consts::waveform::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Grid and first trace (#00c6ff)
    Blue,
    /// Second trace (#ff3366)
    Pink,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub tint: Tint,
    pub width: f64,
}

/// Something the waveform can be drawn on. Coordinates grow right and down.
pub trait Surface {
    fn clear(&mut self);
    fn stroke_path(&mut self, path: &[Point], stroke: Stroke);
}

/// Shape of the traces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub amplitude: f64,
    pub wavelength: f64,
    /// Phase drift in radians per millisecond
    pub speed: f64,
    pub offset: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: AMPLITUDE,
            wavelength: WAVELENGTH,
            speed: SPEED,
            offset: OFFSET,
        }
    }
}

pub fn draw(
    surface: &mut dyn Surface,
    width: u32,
    height: u32,
    time_ms: u64,
    params: &WaveParams,
) {
    surface.clear();
    draw_grid(surface, width, height);
    draw_traces(surface, width, height, time_ms, params);
}

fn draw_grid(surface: &mut dyn Surface, width: u32, height: u32) {
    let stroke = Stroke {
        tint: Tint::Blue,
        width: GRID_STROKE,
    };
    let (w, h) = (width as f64, height as f64);

    for y in (0..height).step_by(GRID_SPACING as usize) {
        let y = y as f64;
        surface.stroke_path(&[Point::new(0.0, y), Point::new(w, y)], stroke);
    }
    for x in (0..width).step_by(GRID_SPACING as usize) {
        let x = x as f64;
        surface.stroke_path(&[Point::new(x, 0.0), Point::new(x, h)], stroke);
    }
}

fn draw_traces(
    surface: &mut dyn Surface,
    width: u32,
    height: u32,
    time_ms: u64,
    params: &WaveParams,
) {
    let mid = height as f64 / 2.0;
    let phase = time_ms as f64 * params.speed;

    let upper: Vec<Point> = (0..width)
        .map(|x| {
            let x = x as f64;
            let y = mid - params.offset + (x * params.wavelength + phase).sin() * params.amplitude;
            Point::new(x, y)
        })
        .collect();
    let lower: Vec<Point> = (0..width)
        .map(|x| {
            let x = x as f64;
            let y = mid + params.offset + (x * params.wavelength - phase).cos() * params.amplitude;
            Point::new(x, y)
        })
        .collect();

    surface.stroke_path(
        &upper,
        Stroke {
            tint: Tint::Blue,
            width: TRACE_STROKE,
        },
    );
    surface.stroke_path(
        &lower,
        Stroke {
            tint: Tint::Pink,
            width: TRACE_STROKE,
        },
    );
}

/// A recorded drawing: the surface the dashboard keeps between redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    pub width: u32,
    pub height: u32,
    paths: Vec<(Vec<Point>, Stroke)>,
}

impl Sketch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    /// Redraw the waveform at `time_ms` onto this sketch.
    pub fn redraw(&mut self, time_ms: u64, params: &WaveParams) {
        let (width, height) = (self.width, self.height);
        draw(self, width, height, time_ms, params);
    }

    pub fn paths(&self) -> &[(Vec<Point>, Stroke)] {
        &self.paths
    }
}

impl Surface for Sketch {
    fn clear(&mut self) {
        self.paths.clear();
    }

    fn stroke_path(&mut self, path: &[Point], stroke: Stroke) {
        self.paths.push((path.to_vec(), stroke));
    }
}
