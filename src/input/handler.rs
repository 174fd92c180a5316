use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Form => handle_input_form_mode(app, key),
        UiMode::Dragging => handle_dragging_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up | KeyCode::Char('k') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_item_up();
            } else {
                app.move_selection_up();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_item_down();
            } else {
                app.move_selection_down();
            }
        }
        KeyCode::Char('K') => app.move_item_up(),
        KeyCode::Char('J') => app.move_item_down(),

        KeyCode::Char('a') => app.start_add_task(),
        KeyCode::Char('e') => app.start_edit_task(),
        KeyCode::Enter | KeyCode::Char(' ') => app.handle_toggle_status(),
        KeyCode::Char('d') | KeyCode::Delete => app.handle_delete_todo(),
        KeyCode::Char('D') => app.handle_clear_all_todos(),

        // Filter controls
        KeyCode::Char('1') => app.handle_filter_todos(Filter::All),
        KeyCode::Char('2') => app.handle_filter_todos(Filter::Pending),
        KeyCode::Char('3') => app.handle_filter_todos(Filter::Completed),
        KeyCode::Char('f') => app.handle_filter_todos(app.filter.next()),

        // Pick up the selected row
        KeyCode::Char('m') => app.start_drag(),

        KeyCode::Char('t') => app.toggle_display_mode(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the input form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab => app.input_form_next_field(),
        KeyCode::Left => app.input_form_cycle_priority(false),
        KeyCode::Right => app.input_form_cycle_priority(true),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while a row is being dragged
fn handle_dragging_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.drag_target_up(),
        KeyCode::Down | KeyCode::Char('j') => app.drag_target_down(),
        KeyCode::Enter | KeyCode::Char('m') => app.drop_drag(),
        KeyCode::Esc => app.cancel_drag(),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ControlMode, DisplayMode, Priority};
    use crate::persistence::{KeyValueStore, MemoryKv};
    use crate::store::TodoStore;
    use std::rc::Rc;

    fn create_test_app() -> AppState {
        let shared: Rc<dyn KeyValueStore> = Rc::new(MemoryKv::default());
        let mut store = TodoStore::load(shared.clone());
        store.add_todo("Test task", "", None).unwrap();
        AppState::new(store, shared)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_keys(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.store.add_todo("Task 2", "", None).unwrap();

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.start_add_task();
        assert!(handle_key(&mut app, ctrl_c));
    }

    #[test]
    fn test_q_inside_form_is_text() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a')));

        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))));
        assert_eq!(app.input_form.task, "q");
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        let initial_count = app.store.todos().len();

        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::Form);

        type_keys(&mut app, "New");
        handle_key(&mut app, key(KeyCode::Tab));
        type_keys(&mut app, "Fri");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Left));

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.todos().len(), initial_count + 1);
        assert_eq!(app.ui_mode, UiMode::Normal);

        let added = app.store.todos().last().unwrap();
        assert_eq!(added.task, "New");
        assert_eq!(added.due_date, "Fri");
        assert_eq!(added.priority, Priority::High);
    }

    #[test]
    fn test_handle_edit_task() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('e')));
        assert!(matches!(app.control, ControlMode::Editing(_)));

        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.todos()[0].task, "Test tas");
        assert_eq!(app.control, ControlMode::Adding);
    }

    #[test]
    fn test_handle_toggle_and_delete() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.store.todos()[0].completed);

        handle_key(&mut app, key(KeyCode::Delete));
        assert!(app.store.todos().is_empty());
    }

    #[test]
    fn test_handle_filters() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.filter, Filter::Completed);
        assert!(app.visible_todos().is_empty());

        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn test_handle_drag() {
        let mut app = create_test_app();
        app.store.add_todo("Second", "", None).unwrap();

        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.ui_mode, UiMode::Dragging);
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.todos()[0].task, "Second");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_shift_reorder() {
        let mut app = create_test_app();
        app.store.add_todo("Second", "", None).unwrap();

        handle_key(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));

        assert_eq!(app.store.todos()[1].task, "Test task");
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_handle_theme_toggle() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.display_mode, DisplayMode::Dark);
    }
}
