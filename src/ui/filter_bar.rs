use crate::app::AppState;
use crate::domain::{DisplayMode, Filter};
use crate::ui::styles::{active_filter_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the All / Pending / Completed controls
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(filter_line(app.filter, app.display_mode)).style(hint_style(app.display_mode));
    f.render_widget(paragraph, area);
}

fn filter_line(active: Filter, mode: DisplayMode) -> Line<'static> {
    let mut spans = vec![Span::raw(" Show: ")];

    for (i, filter) in Filter::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" · "));
        }
        let label = format!("[{}] {}", i + 1, filter.label());
        if *filter == active {
            spans.push(Span::styled(label, active_filter_style(mode)));
        } else {
            spans.push(Span::raw(label));
        }
    }

    Line::from(spans)
}
