//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{FRAME_BUDGET_MS, SPLASH_SECS};
use crate::magi::Magi;
use crate::scheduler::FrameSource;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::magi::render_magi;
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
pub enum Screen {
    /// Dashboard screen with the animated gadgets.
    Dashboard(Box<DashboardState>),
    /// MAGI voting toy.
    Magi(Box<Magi>, UIConfig),
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// The splash screen stays up until this instant, if set.
    splash_until: Option<Instant>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(current_screen: Screen, with_splash: bool) -> Self {
        Self {
            current_screen,
            splash_until: with_splash.then(|| Instant::now() + Duration::from_secs(SPLASH_SECS)),
        }
    }

    fn splash_active(&self) -> bool {
        self.splash_until
            .is_some_and(|until| Instant::now() < until)
    }

    fn silence(&mut self) {
        match &mut self.current_screen {
            Screen::Dashboard(state) => state.silence(),
            Screen::Magi(magi, _) => magi.silence(),
        }
    }

    /// Handle one key press. Returns false when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.silence();
            return false;
        }

        // Any other key skips the splash screen
        if self.splash_active() {
            self.splash_until = None;
            return true;
        }

        if let Screen::Magi(magi, _) = &mut self.current_screen {
            match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    magi.toggle();
                }
                KeyCode::Char('r') => magi.reset(),
                KeyCode::Char('v') => {
                    magi.cycle_threshold();
                }
                KeyCode::Char('p') => {
                    magi.cycle_priority();
                }
                KeyCode::Char('x') => {
                    magi.toggle_ex_mode();
                }
                KeyCode::Char('s') => {
                    magi.toggle_sound();
                }
                _ => {}
            }
        }
        true
    }
}

/// Runs the application UI in a loop, one frame per timestamp from `frames`.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    frames: &mut dyn FrameSource,
) -> std::io::Result<()> {
    // UI event loop
    while let Some(now_ms) = frames.request_tick() {
        let splash = app.splash_active();
        if !splash {
            match &mut app.current_screen {
                Screen::Dashboard(state) => {
                    state.update(now_ms);
                }
                Screen::Magi(magi, _) => magi.update(now_ms),
            }
        }
        terminal.draw(|f| render(f, &app.current_screen, splash))?;

        // Poll for input; the timeout paces the frames
        if event::poll(Duration::from_millis(FRAME_BUDGET_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    if !app.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let (MouseEventKind::Down(_), Screen::Magi(magi, _)) =
                        (mouse.kind, &mut app.current_screen)
                    {
                        magi.toggle();
                    }
                }
                // Losing focus is the terminal's version of the page being hidden
                Event::FocusLost => app.silence(),
                _ => {}
            }
        }
    }
    app.silence();
    Ok(())
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, splash: bool) {
    if splash {
        render_splash(f);
        return;
    }
    match screen {
        Screen::Dashboard(state) => render_dashboard(f, state),
        Screen::Magi(magi, ui_config) => render_magi(f, magi, ui_config),
    }
}
