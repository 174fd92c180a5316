use crate::domain::{drop_reorder, AlertKind, ControlMode, DisplayMode, Filter, FormField, Priority, Todo, UiMode};
use crate::persistence::{KeyValueStore, THEME_KEY};
use crate::store::TodoStore;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// How long an alert stays on screen
pub const ALERT_DURATION: Duration = Duration::from_secs(2);

/// Transient message shown in the alert bar
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    pub shown_at: Instant,
}

/// Input form fields (task text, due date, priority selector)
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub task: String,
    pub due_date: String,
    pub priority: Priority,
    pub editing_field: FormField,
}

impl Default for InputFormState {
    fn default() -> Self {
        Self {
            task: String::new(),
            due_date: String::new(),
            priority: Priority::Low,
            editing_field: FormField::Task,
        }
    }
}

/// A row picked up for reordering
#[derive(Debug, Clone)]
pub struct DragState {
    pub id: String,
    /// Position of the dragged row among the rendered rows
    pub from: usize,
    /// Row it will be dropped onto
    pub target: usize,
}

/// Main application state
pub struct AppState {
    pub store: TodoStore,
    kv: Rc<dyn KeyValueStore>,
    pub filter: Filter,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub control: ControlMode,
    pub input_form: InputFormState,
    pub drag: Option<DragState>,
    pub alert: Option<Alert>,
    pub display_mode: DisplayMode,
}

impl AppState {
    /// Build the controller around an already-loaded store. The key-value
    /// handle is used for the display mode, which lives beside the tasks.
    pub fn new(store: TodoStore, kv: Rc<dyn KeyValueStore>) -> Self {
        let display_mode = match kv.get(THEME_KEY) {
            Ok(Some(value)) => DisplayMode::parse(&value),
            Ok(None) => DisplayMode::default(),
            Err(e) => {
                warn!("Could not read display mode, using light: {}", e);
                DisplayMode::default()
            }
        };
        info!(mode = display_mode.as_str(), tasks = store.todos().len(), "Starting");

        Self {
            store,
            kv,
            filter: Filter::All,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            control: ControlMode::Adding,
            input_form: InputFormState::default(),
            drag: None,
            alert: None,
            display_mode,
        }
    }

    /// Rows currently rendered: the store's answer for the active filter's key
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.store.filter_todos(&self.filter.key())
    }

    fn visible_ids(&self) -> Vec<String> {
        self.visible_todos().iter().map(|t| t.id.clone()).collect()
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.visible_todos().get(self.selected_index).copied()
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_todos().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the rendered rows
    fn clamp_selection(&mut self) {
        let len = self.visible_todos().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Re-render the unfiltered list, keeping `id` selected when it still exists
    fn show_all_todos(&mut self, select: Option<&str>) {
        self.filter = Filter::All;
        if let Some(id) = select {
            if let Some(pos) = self.store.todos().iter().position(|t| t.id == id) {
                self.selected_index = pos;
            }
        }
        self.clamp_selection();
    }

    /// Show the subset matching a filter control. Never touches the store.
    pub fn handle_filter_todos(&mut self, filter: Filter) {
        self.filter = filter;
        self.selected_index = 0;
    }

    /// Replace any current alert immediately
    pub fn show_alert(&mut self, message: &str, kind: AlertKind) {
        self.alert = Some(Alert {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Hide the alert once it has been up for `ALERT_DURATION`
    pub fn expire_alert(&mut self, now: Instant) {
        if let Some(alert) = &self.alert {
            if now.duration_since(alert.shown_at) >= ALERT_DURATION {
                self.alert = None;
            }
        }
    }

    fn report_storage_failure(&mut self, err: anyhow::Error) {
        error!("{:#}", err);
        self.show_alert("Could not save changes", AlertKind::Error);
    }

    /// Open the form to add a new task
    pub fn start_add_task(&mut self) {
        self.control = ControlMode::Adding;
        self.input_form.editing_field = FormField::Task;
        self.ui_mode = UiMode::Form;
    }

    /// Open the form pre-filled with the selected task
    pub fn start_edit_task(&mut self) {
        let Some(todo) = self.selected_todo() else {
            return;
        };
        let (id, task, priority) = (todo.id.clone(), todo.task.clone(), todo.priority);

        self.input_form.task = task;
        self.input_form.priority = priority;
        self.input_form.editing_field = FormField::Task;
        self.control = ControlMode::Editing(id);
        self.ui_mode = UiMode::Form;
    }

    /// Move focus to the next field (the due date is only editable when adding)
    pub fn input_form_next_field(&mut self) {
        let editing = matches!(self.control, ControlMode::Editing(_));
        self.input_form.editing_field = match (self.input_form.editing_field, editing) {
            (FormField::Task, false) => FormField::DueDate,
            (FormField::Task, true) => FormField::Priority,
            (FormField::DueDate, _) => FormField::Priority,
            (FormField::Priority, _) => FormField::Task,
        };
    }

    pub fn input_form_add_char(&mut self, c: char) {
        match self.input_form.editing_field {
            FormField::Task => self.input_form.task.push(c),
            FormField::DueDate => self.input_form.due_date.push(c),
            // Initials pick a priority directly
            FormField::Priority => match c.to_ascii_lowercase() {
                'l' => self.input_form.priority = Priority::Low,
                'm' => self.input_form.priority = Priority::Medium,
                'h' => self.input_form.priority = Priority::High,
                _ => {}
            },
        }
    }

    pub fn input_form_backspace(&mut self) {
        match self.input_form.editing_field {
            FormField::Task => {
                self.input_form.task.pop();
            }
            FormField::DueDate => {
                self.input_form.due_date.pop();
            }
            FormField::Priority => {}
        }
    }

    pub fn input_form_cycle_priority(&mut self, forward: bool) {
        self.input_form.priority = if forward {
            self.input_form.priority.next()
        } else {
            self.input_form.priority.prev()
        };
    }

    /// Submit the form: add in adding mode, update in place in editing mode
    pub fn submit_input_form(&mut self) {
        match self.control.clone() {
            ControlMode::Adding => self.handle_add_todo(),
            ControlMode::Editing(id) => self.handle_update_todo(&id),
        }
    }

    fn handle_add_todo(&mut self) {
        if self.input_form.task.is_empty() {
            self.show_alert("Please enter a task", AlertKind::Error);
            return;
        }

        let form = std::mem::take(&mut self.input_form);
        let result = self.store.add_todo(&form.task, &form.due_date, Some(form.priority));
        self.ui_mode = UiMode::Normal;

        match result {
            Ok(todo) => {
                self.show_all_todos(Some(&todo.id));
                self.show_alert("Task added successfully", AlertKind::Success);
            }
            Err(e) => {
                self.show_all_todos(None);
                self.report_storage_failure(e);
            }
        }
    }

    fn handle_update_todo(&mut self, id: &str) {
        if self.input_form.task.is_empty() {
            self.show_alert("Task cannot be empty", AlertKind::Error);
            return;
        }

        let form = std::mem::take(&mut self.input_form);
        let result = self.store.edit_todo(id, &form.task, Some(form.priority));
        self.control = ControlMode::Adding;
        self.ui_mode = UiMode::Normal;
        self.show_all_todos(Some(id));

        match result {
            Ok(Some(_)) => self.show_alert("Todo updated successfully", AlertKind::Success),
            Ok(None) => self.show_alert("Task no longer exists", AlertKind::Error),
            Err(e) => self.report_storage_failure(e),
        }
    }

    /// Close the form. An abandoned edit leaves the task untouched.
    pub fn cancel_input_form(&mut self) {
        if matches!(self.control, ControlMode::Editing(_)) {
            self.input_form = InputFormState::default();
        }
        self.control = ControlMode::Adding;
        self.ui_mode = UiMode::Normal;
    }

    /// Flip completion of the selected task
    pub fn handle_toggle_status(&mut self) {
        let Some(id) = self.selected_todo().map(|t| t.id.clone()) else {
            return;
        };

        if let Err(e) = self.store.toggle_todo_status(&id) {
            self.report_storage_failure(e);
        }
        self.show_all_todos(Some(&id));
    }

    pub fn handle_delete_todo(&mut self) {
        let Some(id) = self.selected_todo().map(|t| t.id.clone()) else {
            return;
        };

        let result = self.store.delete_todo(&id);
        self.show_all_todos(None);
        match result {
            Ok(()) => self.show_alert("Todo deleted successfully", AlertKind::Success),
            Err(e) => self.report_storage_failure(e),
        }
    }

    pub fn handle_clear_all_todos(&mut self) {
        let result = self.store.clear_all_todos();
        self.selected_index = 0;
        self.show_all_todos(None);
        match result {
            Ok(()) => self.show_alert("All todos cleared successfully", AlertKind::Success),
            Err(e) => self.report_storage_failure(e),
        }
    }

    /// Pick up the selected row for reordering
    pub fn start_drag(&mut self) {
        let Some(id) = self.selected_todo().map(|t| t.id.clone()) else {
            return;
        };

        self.drag = Some(DragState {
            id,
            from: self.selected_index,
            target: self.selected_index,
        });
        self.ui_mode = UiMode::Dragging;
    }

    pub fn drag_target_up(&mut self) {
        if let Some(drag) = &mut self.drag {
            drag.target = drag.target.saturating_sub(1);
            self.selected_index = drag.target;
        }
    }

    pub fn drag_target_down(&mut self) {
        let len = self.visible_todos().len();
        if let Some(drag) = &mut self.drag {
            if drag.target + 1 < len {
                drag.target += 1;
            }
            self.selected_index = drag.target;
        }
    }

    /// Drop the dragged row onto the target row and persist the new order
    pub fn drop_drag(&mut self) {
        self.ui_mode = UiMode::Normal;
        let Some(drag) = self.drag.take() else {
            return;
        };

        self.reorder_rows(drag.from, drag.target);
        if let Some(pos) = self.visible_ids().iter().position(|id| *id == drag.id) {
            self.selected_index = pos;
        }
    }

    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.selected_index = drag.from;
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Move the selected row one place up (a drop onto its upper neighbour)
    pub fn move_item_up(&mut self) {
        if self.selected_index > 0 && self.selected_todo().is_some() {
            let from = self.selected_index;
            self.reorder_rows(from, from - 1);
            self.selected_index = from - 1;
        }
    }

    /// Move the selected row one place down
    pub fn move_item_down(&mut self) {
        let from = self.selected_index;
        if from + 1 < self.visible_todos().len() {
            self.reorder_rows(from, from + 1);
            self.selected_index = from + 1;
        }
    }

    fn reorder_rows(&mut self, from: usize, to: usize) {
        let Some(new_order) = drop_reorder(&self.visible_ids(), from, to) else {
            return;
        };

        if let Err(e) = self.store.reorder_visible(&new_order) {
            self.report_storage_failure(e);
        }
    }

    /// Flip between light and dark and remember the choice
    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
        info!(mode = self.display_mode.as_str(), "Display mode changed");

        if let Err(e) = self.kv.set(THEME_KEY, self.display_mode.as_str()) {
            error!("Failed to save display mode: {}", e);
            self.show_alert("Could not save display mode", AlertKind::Error);
        }
    }
}
