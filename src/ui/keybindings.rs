use crate::domain::{DisplayMode, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, area: Rect, ui_mode: UiMode, display_mode: DisplayMode) {
    let hints: &[&str] = match ui_mode {
        UiMode::Normal => &[
            " ↑/↓ select   ",
            "a add   ",
            "e edit   ",
            "space done   ",
            "d delete   ",
            "D clear   ",
            "m move   ",
            "Shift+↑/↓ reorder   ",
            "1-3/f filter   ",
            "t theme   ",
            "q quit",
        ],
        UiMode::Form => &[" Tab next field   ", "←/→ priority   ", "Enter submit   ", "Esc cancel"],
        UiMode::Dragging => &[" ↑/↓ choose drop row   ", "Enter drop   ", "Esc cancel"],
    };

    let line = Line::from(hints.iter().map(|h| Span::raw(*h)).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(hint_style(display_mode));
    f.render_widget(paragraph, area);
}
