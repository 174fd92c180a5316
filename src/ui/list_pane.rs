use crate::app::AppState;
use crate::domain::{drag_marker, format_due_date, format_priority, format_status, format_task, DisplayMode, Todo};
use crate::ui::styles::{border_style, default_style, done_style, drag_style, priority_style, selected_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Placeholder row for an empty view
pub const EMPTY_ROW: &str = "No task found";

// Column widths: truncated task (30 + "..."), due date, priority label
const TASK_WIDTH: usize = 34;
const DUE_WIDTH: usize = 16;
const PRIORITY_WIDTH: usize = 17;

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mode = app.display_mode;
    let todos = app.visible_todos();

    let mut items = vec![ListItem::new(header_line(mode))];
    if todos.is_empty() {
        items.push(ListItem::new(Line::from(Span::raw(format!("  {}", EMPTY_ROW)))));
    } else {
        items.extend(todos.iter().enumerate().map(|(idx, todo)| {
            let is_source = app.drag.as_ref().is_some_and(|d| d.id == todo.id);
            let is_target = app.drag.as_ref().is_some_and(|d| d.target == idx);
            let line = create_todo_line(todo, drag_marker(is_source, is_target));

            let style = if is_source {
                drag_style()
            } else if idx == app.selected_index {
                selected_style(mode)
            } else {
                default_style(mode)
            };
            ListItem::new(line).style(style)
        }));
    }

    let pending = app.store.filter_todos("pending").len();
    let date = Local::now().format("%a %b %d");
    let title = format!(" Tasks ({}) — {} pending ", date, pending);

    let list = List::new(items)
        .style(default_style(mode))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(mode))
                .title(Span::styled(title, title_style(mode))),
        );

    // Item 0 is the header, so row n of the view is item n + 1
    let mut state = ListState::default();
    if !todos.is_empty() {
        state.select(Some(app.selected_index + 1));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Header line naming the columns
fn header_line(mode: DisplayMode) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "  {:<task$}{:<due$}{:<prio$}{}",
            "Task",
            "Due",
            "Priority",
            "Status",
            task = TASK_WIDTH,
            due = DUE_WIDTH,
            prio = PRIORITY_WIDTH
        ),
        title_style(mode),
    ))
}

/// Create a single row for a task
/// Format: [marker] Task text                    Due date      Low Priority    Pending
fn create_todo_line(todo: &Todo, marker: &'static str) -> Line<'static> {
    let status_style = if todo.completed {
        done_style()
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(marker),
        Span::raw(format!("{:<width$}", format_task(&todo.task), width = TASK_WIDTH)),
        Span::raw(format!("{:<width$}", format_due_date(&todo.due_date), width = DUE_WIDTH)),
        Span::styled(
            format!("{:<width$}", format_priority(todo.priority.as_str()), width = PRIORITY_WIDTH),
            priority_style(todo.priority),
        ),
        Span::styled(format_status(todo.completed), status_style),
    ])
}
