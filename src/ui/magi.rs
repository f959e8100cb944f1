//! MAGI screen rendering

use crate::magi::{Magi, Phase, UNIT_NAMES, Verdict};
use crate::ui::app::UIConfig;
use crate::ui::dashboard::components::footer::render_footer;
use crate::ui::dashboard::utils::{NERV_ORANGE, NERV_RED, PANEL_BG};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const RESOLVE_GREEN: Color = Color::Rgb(82, 230, 145);
const HINTS: &str =
    "[SPACE] Vote | [R] Reset | [V] Threshold | [P] Priority | [X] EX mode | [S] Sound";

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Resolve => RESOLVE_GREEN,
        Verdict::Reject => NERV_RED,
    }
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Resolve => "承認",
        Verdict::Reject => "否決",
    }
}

pub fn render_magi(f: &mut Frame, magi: &Magi, ui_config: &UIConfig) {
    if ui_config.with_background_color {
        f.render_widget(Block::default().style(Style::default().bg(PANEL_BG)), f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    render_info(f, chunks[0], magi);
    render_units(f, chunks[1], magi);
    render_verdict(f, chunks[2], magi);
    render_footer(f, chunks[3], HINTS);
}

fn render_info(f: &mut Frame, area: Rect, magi: &Magi) {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(NERV_ORANGE)
        .add_modifier(Modifier::BOLD);
    let on_off = |flag: bool| if flag { "ON" } else { "OFF" };

    let lines = vec![
        Line::from(vec![
            Span::styled("CODE: ", label),
            Span::styled(magi.code().to_string(), value),
            Span::styled("   FILE: ", label),
            Span::styled(magi.file().to_string(), value),
            Span::styled("   PRIORITY: ", label),
            Span::styled(magi.priority(), value),
        ]),
        Line::from(vec![
            Span::styled("THRESHOLD: ", label),
            Span::styled(format!("{}", magi.threshold()), value),
            Span::styled("   EX MODE: ", label),
            Span::styled(on_off(magi.ex_mode()), value),
            Span::styled("   SOUND: ", label),
            Span::styled(on_off(magi.sound()), value),
        ]),
    ];

    let block = Block::default()
        .title("MAGI SYSTEM")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(NERV_ORANGE))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_units(f: &mut Frame, area: Rect, magi: &Magi) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    let verdicts = magi.unit_verdicts();

    for (index, name) in UNIT_NAMES.iter().enumerate() {
        let (text, color) = match (magi.phase(), verdicts) {
            _ if magi.is_loading() => ("LOADING".to_string(), Color::DarkGray),
            (Phase::Voted, Some(units)) => {
                (verdict_label(units[index]).to_string(), verdict_color(units[index]))
            }
            (Phase::Voting, _) => ("審議中".to_string(), NERV_ORANGE),
            _ => ("STANDBY".to_string(), Color::Gray),
        };

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(*name)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(body, columns[index]);
    }
}

fn render_verdict(f: &mut Frame, area: Rect, magi: &Magi) {
    let (text, color) = match magi.verdict() {
        Some(verdict) => (
            format!("RESULT: {}", verdict.to_string().to_uppercase()),
            verdict_color(verdict),
        ),
        None => (format!("STATE: {}", magi.phase().to_string().to_uppercase()), Color::Gray),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}
