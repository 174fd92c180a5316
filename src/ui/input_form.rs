use crate::app::{AppState, InputFormState};
use crate::domain::{format_priority, ControlMode, DisplayMode, FormField};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, priority_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding or updating a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let mode = app.display_mode;
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let editing = matches!(app.control, ControlMode::Editing(_));
    let title_text = if editing { " Update Task " } else { " Add Task " };
    let lines = form_lines(&app.input_form, editing, mode);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style(mode)))
                .style(modal_bg_style(mode)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn form_lines(form: &InputFormState, editing: bool, mode: DisplayMode) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];

    lines.extend(text_field("Task:", &form.task, form.editing_field == FormField::Task, mode));

    // Editing keeps the task's due date
    if !editing {
        lines.extend(text_field(
            "Due date (optional):",
            &form.due_date,
            form.editing_field == FormField::DueDate,
            mode,
        ));
    }

    let priority_label = if form.editing_field == FormField::Priority {
        "Priority: (editing)"
    } else {
        "Priority:"
    };
    lines.push(Line::raw(priority_label));
    lines.push(Line::from(vec![
        Span::raw("< "),
        Span::styled(format_priority(form.priority.as_str()), priority_style(form.priority)),
        Span::raw(" >"),
    ]));
    lines.push(Line::raw(""));

    let submit = if editing { "Enter to update" } else { "Enter to add" };
    lines.push(Line::raw(format!(
        "Tab to switch fields  ·  ←/→ priority  ·  {}  ·  Esc to cancel",
        submit
    )));

    lines
}

fn text_field(label: &str, value: &str, focused: bool, mode: DisplayMode) -> Vec<Line<'static>> {
    let label = if focused {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };

    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style(mode)),
        if focused {
            Span::styled("█", modal_title_style(mode)) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    vec![Line::raw(label), value_line, Line::raw("")]
}
