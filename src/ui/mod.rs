pub mod alert_bar;
pub mod filter_bar;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use alert_bar::render_alert_bar;
use filter_bar::render_filter_bar;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{widgets::Block, Frame};
use styles::default_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Paint the display mode's background first
    f.render_widget(Block::default().style(default_style(app.display_mode)), size);

    render_keybindings(f, layout.keybindings_area, app.ui_mode, app.display_mode);
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_alert_bar(f, app, layout.alert_area);

    if app.ui_mode == UiMode::Form {
        render_input_form(f, app, size);
    }
}
