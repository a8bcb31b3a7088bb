//! TUI rendering with ratatui
//!
//! Hit point gauges, the letter tiles and the battle log.

use super::app::{App, InputMode, MessageStyle};
use crate::game::LogKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_arena(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚔️ WORD SLAYER - Spell to Survive")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_arena(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player HP
            Constraint::Length(3), // Bot HP
            Constraint::Length(5), // Hand
            Constraint::Min(5),    // Last round
        ])
        .split(area);

    let state = app.battle.state();
    render_hp(f, " 🧑 Player ", state.player_hp(), state.initial_hp(), Color::Green, chunks[0]);
    render_hp(f, " 🤖 Bot ", state.bot_hp(), state.initial_hp(), Color::Red, chunks[1]);
    render_hand(f, app, chunks[2]);
    render_last_round(f, app, chunks[3]);
}

fn render_hp(f: &mut Frame, title: &str, hp: u32, max: u32, color: Color, area: Rect) {
    let percent = if max == 0 {
        0
    } else {
        (u64::from(hp) * 100 / u64::from(max)) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{hp}/{max} HP"));

    f.render_widget(gauge, area);
}

fn render_hand(f: &mut Frame, app: &App, area: Rect) {
    let table = app.battle.engine().table();
    let claimed = app.claimed_positions();

    let mut letters = Vec::new();
    let mut powers = Vec::new();
    for (&letter, &used) in app.battle.player_hand().letters().iter().zip(claimed.iter()) {
        let style = if used {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        };
        letters.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            style,
        ));
        letters.push(Span::raw(" "));
        powers.push(Span::styled(
            format!("{:^3}", table.power_of(letter)),
            Style::default().fg(Color::Cyan),
        ));
        powers.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(vec![Line::from(letters), Line::from(powers)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_last_round(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.battle.last_outcome() {
        Some(outcome) => {
            let verdict = match outcome.loser() {
                Some(loser) => format!("{loser} was damaged by {} HP", outcome.hp_delta),
                None => format!("{}: no damage dealt", outcome.winner),
            };
            vec![
                Line::from(vec![
                    Span::raw("You:  "),
                    Span::styled(
                        outcome.player_word.to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" ({} power)", outcome.player_damage)),
                ]),
                Line::from(vec![
                    Span::raw("Bot:  "),
                    Span::styled(
                        outcome.bot_word.to_uppercase(),
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" ({} power)", outcome.bot_damage)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    verdict,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ]
        }
        None => vec![Line::from("No rounds played yet")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Last Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_battle_log(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_battle_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .battle
        .log()
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let style = match entry.kind {
                LogKind::Info => Style::default().fg(Color::White),
                LogKind::Player => Style::default().fg(Color::Yellow),
                LogKind::Bot => Style::default().fg(Color::Magenta),
                LogKind::Rejected => Style::default().fg(Color::Red),
                LogKind::Outcome => Style::default().fg(Color::Cyan),
                LogKind::Victory => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            };
            ListItem::new(entry.text.clone()).style(style)
        })
        .collect();

    let log = List::new(items).block(Block::default().title(" Battle Log ").borders(Borders::ALL));

    f.render_widget(log, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Battle over | Press 'n' for a new battle or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Typing => (
            format!(" Your Word | Power: {} ", app.current_power()),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.battle.rounds() + 1))
        .alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Battles: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Battle",
        InputMode::Typing => "Enter: Attack | Tab: New Hand | Ctrl-N: New Battle | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
