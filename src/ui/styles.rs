use crate::domain::{AlertKind, DisplayMode, Priority};
use ratatui::style::{Color, Modifier, Style};

/// Base text and background for the whole screen
pub fn default_style(mode: DisplayMode) -> Style {
    match mode {
        DisplayMode::Light => Style::default().fg(Color::Black).bg(Color::White),
        DisplayMode::Dark => Style::default().fg(Color::White).bg(Color::Black),
    }
}

/// Selected row highlight style
pub fn selected_style(mode: DisplayMode) -> Style {
    let bg = match mode {
        DisplayMode::Light => Color::LightBlue,
        DisplayMode::Dark => Color::LightCyan,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Row being dragged
pub fn drag_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(mode: DisplayMode) -> Style {
    let fg = match mode {
        DisplayMode::Light => Color::Blue,
        DisplayMode::Dark => Color::Cyan,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn border_style(mode: DisplayMode) -> Style {
    match mode {
        DisplayMode::Light => Style::default().fg(Color::DarkGray),
        DisplayMode::Dark => Style::default().fg(Color::Gray),
    }
}

/// Keybinding hint style
pub fn hint_style(mode: DisplayMode) -> Style {
    match mode {
        DisplayMode::Light => Style::default().fg(Color::DarkGray).bg(Color::White),
        DisplayMode::Dark => Style::default().fg(Color::Gray).bg(Color::Black),
    }
}

/// Active filter control
pub fn active_filter_style(mode: DisplayMode) -> Style {
    title_style(mode).add_modifier(Modifier::UNDERLINED)
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::Low => Style::default().fg(Color::Green),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn alert_style(kind: AlertKind) -> Style {
    match kind {
        AlertKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        AlertKind::Error => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

/// Modal background style
pub fn modal_bg_style(mode: DisplayMode) -> Style {
    match mode {
        DisplayMode::Light => Style::default().bg(Color::Gray).fg(Color::Black),
        DisplayMode::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

/// Modal title style
pub fn modal_title_style(mode: DisplayMode) -> Style {
    let fg = match mode {
        DisplayMode::Light => Color::Blue,
        DisplayMode::Dark => Color::Yellow,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}
