use crate::app::AppState;
use crate::ui::styles::{alert_style, default_style};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Render the transient alert, or an empty line when none is showing
pub fn render_alert_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = match &app.alert {
        Some(alert) => Paragraph::new(Span::raw(format!(" {} ", alert.message))).style(alert_style(alert.kind)),
        None => Paragraph::new("").style(default_style(app.display_mode)),
    };
    f.render_widget(paragraph, area);
}
