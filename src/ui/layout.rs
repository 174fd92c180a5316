use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub alert_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Filter controls (1 row)
/// - Task list (rest)
/// - Alert bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // Filter bar
            Constraint::Min(3),    // List pane
            Constraint::Length(1), // Alert bar
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        filter_area: chunks[1],
        list_area: chunks[2],
        alert_area: chunks[3],
    }
}

/// Create centered modal area (for the input form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
