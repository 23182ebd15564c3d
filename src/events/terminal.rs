use crate::state::{Focus, State, TaskFormField, View, ViewMode};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => {
                state.advance_spinner();
                Ok(true)
            }
        }
    }
}

/// Dispatch a key press according to the current view and focus. Returns
/// false when the user asked to exit.
///
fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    // The setup screen accepts no input beyond exiting
    if !state.is_configured() {
        return !matches!(key.code, KeyCode::Char('q') | KeyCode::Esc);
    }

    // A pending delete confirmation captures all input until resolved
    if state.delete_confirmation().is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => state.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') => state.cancel_delete(),
            _ => {}
        }
        return true;
    }

    match state.current_view() {
        View::TaskForm => {
            handle_task_form_key(key, state);
            true
        }
        View::ProjectForm => {
            handle_project_form_key(key, state);
            true
        }
        View::Board => handle_board_key(key, state),
    }
}

fn handle_task_form_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc => state.close_task_form(),
        KeyCode::Enter => state.submit_task_form(),
        KeyCode::Tab | KeyCode::Down => {
            let next = state.task_form().field.next();
            state.task_form_mut().field = next;
        }
        KeyCode::BackTab | KeyCode::Up => {
            let previous = state.task_form().field.previous();
            state.task_form_mut().field = previous;
        }
        KeyCode::Left | KeyCode::Right if state.task_form().field == TaskFormField::Priority => {
            state.task_form_mut().cycle_priority();
        }
        KeyCode::Backspace => state.task_form_mut().pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.task_form_mut().push_char(c);
        }
        _ => {}
    }
}

fn handle_project_form_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc => state.close_project_form(),
        KeyCode::Enter => state.submit_project_form(),
        KeyCode::Backspace => state.pop_project_name_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.add_project_name_char(c);
        }
        _ => {}
    }
}

fn handle_board_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('~') => state.toggle_log(),
        KeyCode::Char('v') => state.toggle_view_mode(),
        KeyCode::Tab => state.toggle_focus(),
        _ => match state.current_focus() {
            Focus::Sidebar => handle_sidebar_key(key, state),
            Focus::Board => handle_board_focus_key(key, state),
        },
    }
    true
}

fn handle_sidebar_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.select_next_project(),
        KeyCode::Char('k') | KeyCode::Up => state.select_previous_project(),
        KeyCode::Enter => state.activate_highlighted_project(),
        KeyCode::Char('a') => state.open_project_form(),
        KeyCode::Char('d') => state.request_delete_highlighted_project(),
        _ => {}
    }
}

fn handle_board_focus_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char('n') => state.open_task_form(),
        KeyCode::Char('d') => state.request_delete_selected_task(),
        _ => match state.get_view_mode() {
            ViewMode::Kanban => match key.code {
                KeyCode::Char('h') | KeyCode::Left => state.kanban_previous_column(),
                KeyCode::Char('l') | KeyCode::Right => state.kanban_next_column(),
                KeyCode::Char('j') | KeyCode::Down => state.kanban_next_task(),
                KeyCode::Char('k') | KeyCode::Up => state.kanban_previous_task(),
                KeyCode::Char('[') => state.move_selected_task(false),
                KeyCode::Char(']') => state.move_selected_task(true),
                _ => {}
            },
            ViewMode::List => match key.code {
                KeyCode::Char('j') | KeyCode::Down => state.list_next_task(),
                KeyCode::Char('k') | KeyCode::Up => state.list_previous_task(),
                KeyCode::Char('s') => state.cycle_selected_task_status(),
                _ => {}
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::store::{Priority, Project, Task, TaskStatus};
    use std::sync::mpsc::Receiver;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_channel() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = std::sync::mpsc::channel();
        (State::new(tx, true), rx)
    }

    fn seeded_state() -> (State, Receiver<NetworkEvent>) {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![Project {
            id: "p1".to_string(),
            name: "Alpha".to_string(),
            created_at: None,
        }]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![Task {
            id: "t1".to_string(),
            project_id: "p1".to_string(),
            title: "task t1".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Todo,
            due_date: "2024-06-30".to_string(),
            created_at: None,
        }]);
        (state, rx)
    }

    #[test]
    fn ctrl_c_requests_exit_everywhere() {
        let (mut state, _rx) = seeded_state();
        let exit_key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(exit_key, &mut state));

        state.open_task_form();
        assert!(!handle_key(exit_key, &mut state));
    }

    #[test]
    fn unconfigured_state_only_exits() {
        let (tx, _rx) = std::sync::mpsc::channel();
        let mut state = State::new(tx, false);
        assert!(handle_key(key(KeyCode::Char('n')), &mut state));
        assert_eq!(state.current_view(), View::Board);
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));
    }

    #[test]
    fn confirmation_captures_input_until_resolved() {
        let (mut state, rx) = seeded_state();
        state.toggle_focus();
        handle_key(key(KeyCode::Char('d')), &mut state);
        assert!(state.delete_confirmation().is_some());

        // unrelated keys neither navigate nor resolve
        handle_key(key(KeyCode::Char('v')), &mut state);
        assert_eq!(state.get_view_mode(), ViewMode::Kanban);
        assert!(state.delete_confirmation().is_some());

        handle_key(key(KeyCode::Esc), &mut state);
        assert!(state.delete_confirmation().is_none());
        assert_eq!(state.get_tasks().len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn confirmed_delete_removes_task() {
        let (mut state, rx) = seeded_state();
        state.toggle_focus();
        handle_key(key(KeyCode::Char('d')), &mut state);
        handle_key(key(KeyCode::Enter), &mut state);

        assert!(state.get_tasks().is_empty());
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::DeleteTask { .. })));
    }

    #[test]
    fn bracket_keys_move_kanban_cards() {
        let (mut state, rx) = seeded_state();
        state.toggle_focus();
        handle_key(key(KeyCode::Char(']')), &mut state);

        assert_eq!(state.get_tasks()[0].status, TaskStatus::InProgress);
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::UpdateTaskStatus {
                status: TaskStatus::InProgress,
                ..
            })
        ));
    }

    #[test]
    fn task_form_keys_edit_and_submit() {
        let (mut state, rx) = seeded_state();
        state.toggle_focus();
        handle_key(key(KeyCode::Char('n')), &mut state);
        assert_eq!(state.current_view(), View::TaskForm);

        for c in "Fix login".chars() {
            handle_key(key(KeyCode::Char(c)), &mut state);
        }
        handle_key(key(KeyCode::Tab), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        handle_key(key(KeyCode::Tab), &mut state);
        for c in "2024-07-01".chars() {
            handle_key(key(KeyCode::Char(c)), &mut state);
        }
        handle_key(key(KeyCode::Enter), &mut state);

        assert_eq!(state.current_view(), View::Board);
        match rx.try_recv() {
            Ok(NetworkEvent::CreateTask {
                title,
                priority,
                due_date,
                ..
            }) => {
                assert_eq!(title, "Fix login");
                assert_eq!(priority, Priority::High);
                assert_eq!(due_date, "2024-07-01");
            }
            other => panic!("expected CreateTask, got {:?}", other),
        }
    }

    #[test]
    fn sidebar_keys_manage_projects() {
        let (mut state, rx) = seeded_state();
        handle_key(key(KeyCode::Char('a')), &mut state);
        assert_eq!(state.current_view(), View::ProjectForm);
        for c in "Beta".chars() {
            handle_key(key(KeyCode::Char(c)), &mut state);
        }
        handle_key(key(KeyCode::Enter), &mut state);
        match rx.try_recv() {
            Ok(NetworkEvent::CreateProject { name }) => assert_eq!(name, "Beta"),
            other => panic!("expected CreateProject, got {:?}", other),
        }

        handle_key(key(KeyCode::Char('d')), &mut state);
        assert!(matches!(
            state.delete_confirmation(),
            Some(crate::state::DeleteTarget::Project { .. })
        ));
    }
}
