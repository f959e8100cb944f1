//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::FRAME_BUDGET_MS;
use crate::print_cmd_info;
use crate::scheduler::{FrameSource, MonotonicFrames, ScriptedFrames};
use crate::ui::dashboard::DashboardState;
use std::error::Error;
use std::time::Duration;
use tokio::sync::broadcast;

/// How the headless loop gets its timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessFrames {
    /// Wall clock, optionally stopping after a number of seconds
    Live { duration_secs: Option<u64> },
    /// Replay fixed timestamps as fast as possible
    Scripted(Vec<u64>),
}

/// Runs the dashboard loop without a terminal UI
///
/// Every fired update that passes the `RUST_LOG` threshold is printed to
/// stdout. Ctrl+C stops the loop.
pub async fn run_headless_mode(
    mut session: SessionData,
    frames: HeadlessFrames,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.seed);
    // The bell would interleave with the printed events
    session.config.sound = false;
    let mut state = session.dashboard(false);

    match frames {
        HeadlessFrames::Scripted(timestamps) => {
            print_cmd_info!("Replaying", "{} frames", timestamps.len());
            let mut source = ScriptedFrames::new(timestamps);
            state.run_frames(&mut source, print_events);
        }
        HeadlessFrames::Live { duration_secs } => {
            // Trigger shutdown on Ctrl+C
            let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = shutdown_sender.send(());
                }
            });

            let mut source = MonotonicFrames::new().with_limit(duration_limit_ms(duration_secs));
            let mut pacing = tokio::time::interval(Duration::from_millis(FRAME_BUDGET_MS));

            loop {
                tokio::select! {
                    _ = pacing.tick() => {
                        let Some(now_ms) = source.request_tick() else {
                            break;
                        };
                        state.update(now_ms);
                        print_events(&mut state);
                    }
                    _ = shutdown_receiver.recv() => {
                        break;
                    }
                }
            }
        }
    }

    state.silence();
    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}

fn print_events(state: &mut DashboardState) {
    for event in state.drain_events() {
        if event.should_display() {
            println!("{}", event);
        }
    }
}

/// Convert `--duration-secs` to a frame limit, saturating instead of wrapping.
fn duration_limit_ms(duration_secs: Option<u64>) -> Option<u64> {
    duration_secs.map(|secs| secs.saturating_mul(1000))
}

/// Parse a `--frames` list such as `0,100,1500`.
pub fn parse_frames(list: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::parse::<u64>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frame_lists() {
        assert_eq!(parse_frames("0,100, 1500").unwrap(), vec![0, 100, 1500]);
        assert_eq!(parse_frames("").unwrap(), Vec::<u64>::new());
        assert!(parse_frames("0,soon").is_err());
    }

    #[test]
    fn huge_durations_saturate() {
        assert_eq!(duration_limit_ms(Some(3)), Some(3000));
        assert_eq!(duration_limit_ms(Some(u64::MAX)), Some(u64::MAX));
        assert_eq!(duration_limit_ms(None), None);
    }
}
