//! Dashboard main renderer

use super::components::{
    footer, header, heartbeat, logs, overlay, radar, readouts, status, waveform,
};
use super::state::DashboardState;
use super::utils::PANEL_BG;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

const HINTS: &str = "NERV Dashboard";

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(Block::default().style(Style::default().bg(PANEL_BG)), f.area());
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    render_body(f, main_chunks[1], state);
    render_bottom(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], HINTS);

    // Drawn last so it sits on top
    if let Some(warning) = &state.hooks.overlay {
        overlay::render_overlay(f, warning, state.now_ms);
    }
}

/// Waveform on the left, radar over status on the right.
fn render_body(f: &mut Frame, area: Rect, state: &DashboardState) {
    let hooks = &state.hooks;
    let side_panels = hooks.radar.is_some() || hooks.status.is_some();

    let (wave_area, side_area) = match (&hooks.canvas, side_panels) {
        (Some(_), true) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (Some(chunks[0]), Some(chunks[1]))
        }
        (Some(_), false) => (Some(area), None),
        (None, true) => (None, Some(area)),
        (None, false) => (None, None),
    };

    if let (Some(sketch), Some(rect)) = (&hooks.canvas, wave_area) {
        waveform::render_waveform(f, rect, sketch);
    }

    let Some(side_area) = side_area else {
        return;
    };
    match (&hooks.radar, &hooks.status) {
        (Some(scope), Some(board)) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Fill(1), Constraint::Length(6)])
                .split(side_area);
            radar::render_radar(f, chunks[0], scope, state.tick);
            status::render_status(f, chunks[1], board);
        }
        (Some(scope), None) => radar::render_radar(f, side_area, scope, state.tick),
        (None, Some(board)) => status::render_status(f, side_area, board),
        (None, None) => {}
    }
}

/// Readouts, heartbeat and log side by side, whichever are present.
fn render_bottom(f: &mut Frame, area: Rect, state: &DashboardState) {
    let hooks = &state.hooks;
    let weights: Vec<u16> = [
        (hooks.readouts.is_some(), 1),
        (hooks.heartbeat.is_some(), 2),
        (hooks.log.is_some(), 2),
    ]
    .into_iter()
    .filter_map(|(on, weight)| on.then_some(weight))
    .collect();
    if weights.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(weights.iter().map(|w| Constraint::Fill(*w)))
        .split(area);
    // Present panels take the slots in order
    let mut slots = chunks.iter().copied();

    if let Some(telemetry) = &hooks.readouts {
        if let Some(rect) = slots.next() {
            readouts::render_readouts(f, rect, telemetry);
        }
    }
    if let Some(chart) = &hooks.heartbeat {
        if let Some(rect) = slots.next() {
            heartbeat::render_heartbeat(f, rect, chart);
        }
    }
    if let Some(log) = &hooks.log {
        if let Some(rect) = slots.next() {
            logs::render_logs_panel(f, rect, log);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Muted;
    use crate::config::Config;
    use crate::ui::app::UIConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state_with(config: &Config) -> DashboardState {
        DashboardState::new(
            config,
            UIConfig::new(true),
            StdRng::seed_from_u64(3),
            Box::new(Muted),
        )
    }

    #[test]
    fn renders_every_panel_title() {
        let config = Config::default();
        let mut state = state_with(&config);
        state.update(0);
        state.update(1500);

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        let text = buffer_text(&terminal);

        for title in [
            "NERV CENTRAL DOGMA",
            "PATTERN ANALYSIS",
            "RADAR",
            "UNIT STATUS",
            "TELEMETRY",
            "HEARTBEAT",
            "STATUS LOG",
        ] {
            assert!(text.contains(title), "missing {title}");
        }
    }

    #[test]
    fn absent_panels_are_left_out() {
        let mut config = Config::default();
        config.panels.radar = false;
        config.panels.heartbeat = false;
        config.panels.log = false;
        let mut state = state_with(&config);
        state.update(0);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("PATTERN ANALYSIS"));
        assert!(text.contains("UNIT STATUS"));
        assert!(!text.contains("RADAR"));
        assert!(!text.contains("HEARTBEAT"));
        assert!(!text.contains("STATUS LOG"));
    }

    #[test]
    fn overlay_shows_while_visible() {
        let config = Config::default();
        let mut state = state_with(&config);
        if let Some(warning) = state.hooks.overlay.as_mut() {
            warning.trigger(0);
        }
        state.now_ms = 1000;

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        assert!(buffer_text(&terminal).contains("ANGEL APPROACHING!"));
    }

    #[test]
    fn renders_with_nothing_at_all() {
        let mut config = Config::default();
        config.panels = crate::config::Panels {
            readouts: false,
            waveform: false,
            heartbeat: false,
            log: false,
            radar: false,
            overlay: false,
            status: false,
        };
        let mut state = state_with(&config);
        state.update(0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        assert!(buffer_text(&terminal).contains("NERV CENTRAL DOGMA"));
    }
}
