use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::store::{Project, Task, TaskStatus};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::widgets::ListState;

use super::form::TaskForm;
use super::navigation::{DeleteTarget, Focus, View, ViewMode};

/// Houses data representative of application state.
///
/// The canonical collections (`projects`, `tasks`, the active project id)
/// mirror the remote store; everything else is transient UI state. The task
/// collection only ever holds tasks belonging to the active project and is
/// rebuilt wholesale on each load.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    configured: bool,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    active_project_id: Option<String>,
    view_mode: ViewMode,
    loading: bool,
    current_focus: Focus,
    current_view: View,
    projects_list_state: ListState,
    list_task_index: usize,
    kanban_column_index: usize,
    kanban_task_index: usize,
    delete_confirmation: Option<DeleteTarget>,
    task_form: TaskForm,
    project_name_input: String,
    log_visible: bool,
    spinner_index: usize,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            configured: false,
            projects: vec![],
            tasks: vec![],
            active_project_id: None,
            view_mode: ViewMode::Kanban,
            loading: false,
            current_focus: Focus::Sidebar,
            current_view: View::Board,
            projects_list_state: ListState::default(),
            list_task_index: 0,
            kanban_column_index: 0,
            kanban_task_index: 0,
            delete_confirmation: None,
            task_form: TaskForm::default(),
            project_name_input: String::new(),
            log_visible: false,
            spinner_index: 0,
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, configured: bool) -> Self {
        State {
            net_sender: Some(net_sender),
            configured,
            ..State::default()
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn get_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.active_project_id.as_deref()
    }

    /// Return the active project, if one is selected and still present.
    ///
    pub fn active_project(&self) -> Option<&Project> {
        let id = self.active_project_id.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get_view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn delete_confirmation(&self) -> Option<&DeleteTarget> {
        self.delete_confirmation.as_ref()
    }

    pub fn task_form(&self) -> &TaskForm {
        &self.task_form
    }

    pub fn task_form_mut(&mut self) -> &mut TaskForm {
        &mut self.task_form
    }

    pub fn project_name_input(&self) -> &str {
        &self.project_name_input
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn get_projects_list_state(&mut self) -> &mut ListState {
        &mut self.projects_list_state
    }

    pub fn kanban_column_index(&self) -> usize {
        self.kanban_column_index
    }

    pub fn kanban_task_index(&self) -> usize {
        self.kanban_task_index
    }

    pub fn list_task_index(&self) -> usize {
        self.list_task_index
    }

    /// Return the tasks currently in the given workflow column, preserving
    /// load order.
    ///
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Resolve the current board selection to a task id, according to the
    /// active view mode.
    ///
    pub fn selected_task_id(&self) -> Option<&str> {
        match self.view_mode {
            ViewMode::List => self.tasks.get(self.list_task_index).map(|t| t.id.as_str()),
            ViewMode::Kanban => {
                let status = TaskStatus::COLUMNS[self.kanban_column_index];
                self.tasks
                    .iter()
                    .filter(|t| t.status == status)
                    .nth(self.kanban_task_index)
                    .map(|t| t.id.as_str())
            }
        }
    }

    // ------------------------------------------------------------------
    // Terminal bookkeeping
    // ------------------------------------------------------------------

    pub fn advance_spinner(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Replace the project collection wholesale with freshly loaded data.
    ///
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.sync_project_selection();
    }

    /// Change the active project. `Some(id)` requests a task load for the
    /// project; `None` clears the local task collection without any network
    /// call. Re-selecting the already-active project is a no-op.
    ///
    pub fn select_project(&mut self, project_id: Option<String>) {
        if self.active_project_id == project_id {
            return;
        }
        self.active_project_id = project_id;
        self.list_task_index = 0;
        self.kanban_column_index = 0;
        self.kanban_task_index = 0;
        match &self.active_project_id {
            Some(id) => {
                self.send(NetworkEvent::LoadTasks {
                    project_id: id.clone(),
                });
            }
            None => self.tasks.clear(),
        }
        self.sync_project_selection();
    }

    /// Append a freshly created project and make it active.
    ///
    pub fn add_project(&mut self, project: Project) {
        let id = project.id.clone();
        self.projects.push(project);
        self.select_project(Some(id));
    }

    /// Remove a project from local state. If it was active, activation
    /// falls back to the first remaining project, or to nothing (clearing
    /// tasks with no reload) when none remain.
    ///
    pub fn remove_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);
        if self.active_project_id.as_deref() == Some(id) {
            self.active_project_id = None;
            self.tasks.clear();
            let next = self.projects.first().map(|p| p.id.clone());
            if next.is_some() {
                self.select_project(next);
            } else {
                self.sync_project_selection();
            }
        } else {
            self.sync_project_selection();
        }
    }

    /// Keep the sidebar highlight on the active project after collection
    /// changes.
    ///
    fn sync_project_selection(&mut self) {
        let selected = self
            .active_project_id
            .as_deref()
            .and_then(|id| self.projects.iter().position(|p| p.id == id))
            .or_else(|| {
                if self.projects.is_empty() {
                    None
                } else {
                    Some(0)
                }
            });
        self.projects_list_state.select(selected);
    }

    pub fn select_next_project(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        let next = match self.projects_list_state.selected() {
            Some(i) => (i + 1).min(self.projects.len() - 1),
            None => 0,
        };
        self.projects_list_state.select(Some(next));
    }

    pub fn select_previous_project(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        let previous = match self.projects_list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.projects_list_state.select(Some(previous));
    }

    /// Return the project currently highlighted in the sidebar.
    ///
    pub fn highlighted_project(&self) -> Option<&Project> {
        self.projects_list_state
            .selected()
            .and_then(|i| self.projects.get(i))
    }

    /// Make the highlighted sidebar project the active one.
    ///
    pub fn activate_highlighted_project(&mut self) {
        if let Some(id) = self.highlighted_project().map(|p| p.id.clone()) {
            self.select_project(Some(id));
        }
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// Replace the task collection wholesale with freshly loaded data.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.clamp_task_selection();
    }

    /// Append a freshly created task.
    ///
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Optimistically move a task to a new workflow status and request the
    /// remote update. The local copy changes before the request is issued;
    /// a failed request is reconciled by a full reload.
    ///
    pub fn update_task_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
            self.send(NetworkEvent::UpdateTaskStatus {
                id: id.to_owned(),
                status,
            });
        }
    }

    /// Move the selected kanban card one column left or right, keeping the
    /// selection on the moved card.
    ///
    pub fn move_selected_task(&mut self, forward: bool) {
        let id = match self.selected_task_id() {
            Some(id) => id.to_owned(),
            None => return,
        };
        let status = TaskStatus::COLUMNS[self.kanban_column_index];
        let target = if forward {
            status.next()
        } else {
            status.previous()
        };
        if let Some(target) = target {
            self.update_task_status(&id, target);
            self.kanban_column_index = TaskStatus::COLUMNS
                .iter()
                .position(|s| *s == target)
                .unwrap_or(0);
            self.kanban_task_index = self
                .tasks
                .iter()
                .filter(|t| t.status == target)
                .position(|t| t.id == id)
                .unwrap_or(0);
        }
    }

    /// Advance the selected list-view task to the next workflow status,
    /// wrapping around after done.
    ///
    pub fn cycle_selected_task_status(&mut self) {
        let selected = match self.selected_task_id() {
            Some(id) => id.to_owned(),
            None => return,
        };
        if let Some(next) = self
            .tasks
            .iter()
            .find(|t| t.id == selected)
            .map(|t| t.status.cycled())
        {
            self.update_task_status(&selected, next);
        }
    }

    fn clamp_task_selection(&mut self) {
        if !self.tasks.is_empty() {
            self.list_task_index = self.list_task_index.min(self.tasks.len() - 1);
        } else {
            self.list_task_index = 0;
        }
        let column = TaskStatus::COLUMNS[self.kanban_column_index];
        let column_len = self.tasks.iter().filter(|t| t.status == column).count();
        if column_len > 0 {
            self.kanban_task_index = self.kanban_task_index.min(column_len - 1);
        } else {
            self.kanban_task_index = 0;
        }
    }

    // ------------------------------------------------------------------
    // Delete confirmation
    // ------------------------------------------------------------------

    /// Ask for confirmation before deleting the selected board task.
    ///
    pub fn request_delete_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id().map(str::to_owned) {
            self.delete_confirmation = Some(DeleteTarget::Task { id });
        }
    }

    /// Ask for confirmation before deleting the highlighted sidebar
    /// project.
    ///
    pub fn request_delete_highlighted_project(&mut self) {
        if let Some(id) = self.highlighted_project().map(|p| p.id.clone()) {
            self.delete_confirmation = Some(DeleteTarget::Project { id });
        }
    }

    /// Carry out the pending deletion. Tasks are removed optimistically;
    /// projects wait for the remote result before local removal.
    ///
    pub fn confirm_delete(&mut self) {
        match self.delete_confirmation.take() {
            Some(DeleteTarget::Task { id }) => {
                self.tasks.retain(|t| t.id != id);
                self.clamp_task_selection();
                self.send(NetworkEvent::DeleteTask { id });
            }
            Some(DeleteTarget::Project { id }) => {
                self.send(NetworkEvent::DeleteProject { id });
            }
            None => {}
        }
    }

    /// Drop the pending deletion, leaving local state untouched.
    ///
    pub fn cancel_delete(&mut self) {
        self.delete_confirmation = None;
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    /// Open the task form. Requires an active project; without one this is
    /// a no-op.
    ///
    pub fn open_task_form(&mut self) {
        if self.active_project_id.is_some() {
            self.task_form.reset();
            self.current_view = View::TaskForm;
        }
    }

    pub fn close_task_form(&mut self) {
        self.task_form.reset();
        self.current_view = View::Board;
    }

    /// Submit the task form if it validates, requesting a remote create.
    /// The new task only appears locally once the store returns the stored
    /// row. An invalid form stays open for correction.
    ///
    pub fn submit_task_form(&mut self) {
        let project_id = match &self.active_project_id {
            Some(id) => id.clone(),
            None => return,
        };
        if !self.task_form.is_valid() {
            return;
        }
        self.send(NetworkEvent::CreateTask {
            project_id,
            title: self.task_form.title.trim().to_owned(),
            priority: self.task_form.priority,
            due_date: self.task_form.due_date.trim().to_owned(),
        });
        self.close_task_form();
    }

    pub fn open_project_form(&mut self) {
        self.project_name_input.clear();
        self.current_view = View::ProjectForm;
    }

    pub fn close_project_form(&mut self) {
        self.project_name_input.clear();
        self.current_view = View::Board;
    }

    /// Submit the project form if the name is non-empty, requesting a
    /// remote create. Creation is not optimistic: the project appears
    /// locally only once the store returns the stored row.
    ///
    pub fn submit_project_form(&mut self) {
        let name = self.project_name_input.trim().to_owned();
        if name.is_empty() {
            return;
        }
        self.send(NetworkEvent::CreateProject { name });
        self.close_project_form();
    }

    pub fn add_project_name_char(&mut self, c: char) {
        self.project_name_input.push(c);
    }

    pub fn pop_project_name_char(&mut self) {
        self.project_name_input.pop();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::List => ViewMode::Kanban,
            ViewMode::Kanban => ViewMode::List,
        };
        self.clamp_task_selection();
    }

    pub fn toggle_focus(&mut self) {
        self.current_focus = match self.current_focus {
            Focus::Sidebar => Focus::Board,
            Focus::Board => Focus::Sidebar,
        };
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn kanban_next_column(&mut self) {
        if self.kanban_column_index + 1 < TaskStatus::COLUMNS.len() {
            self.kanban_column_index += 1;
            self.kanban_task_index = 0;
            self.clamp_task_selection();
        }
    }

    pub fn kanban_previous_column(&mut self) {
        if self.kanban_column_index > 0 {
            self.kanban_column_index -= 1;
            self.kanban_task_index = 0;
            self.clamp_task_selection();
        }
    }

    pub fn kanban_next_task(&mut self) {
        let column = TaskStatus::COLUMNS[self.kanban_column_index];
        let column_len = self.tasks.iter().filter(|t| t.status == column).count();
        if column_len > 0 && self.kanban_task_index + 1 < column_len {
            self.kanban_task_index += 1;
        }
    }

    pub fn kanban_previous_task(&mut self) {
        self.kanban_task_index = self.kanban_task_index.saturating_sub(1);
    }

    pub fn list_next_task(&mut self) {
        if !self.tasks.is_empty() && self.list_task_index + 1 < self.tasks.len() {
            self.list_task_index += 1;
        }
    }

    pub fn list_previous_task(&mut self) {
        self.list_task_index = self.list_task_index.saturating_sub(1);
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn send(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to send network event: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Priority;
    use std::sync::mpsc::{Receiver, TryRecvError};

    fn state_with_channel() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = std::sync::mpsc::channel();
        (State::new(tx, true), rx)
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            created_at: None,
        }
    }

    fn task(id: &str, project_id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            project_id: project_id.to_string(),
            title: format!("task {}", id),
            priority: Priority::Medium,
            status,
            due_date: "2024-06-30".to_string(),
            created_at: None,
        }
    }

    fn assert_no_event(rx: &Receiver<NetworkEvent>) {
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn selecting_project_requests_its_tasks() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));

        match rx.try_recv() {
            Ok(NetworkEvent::LoadTasks { project_id }) => assert_eq!(project_id, "p1"),
            other => panic!("expected LoadTasks, got {:?}", other),
        }
        assert_eq!(state.active_project_id(), Some("p1"));
    }

    #[test]
    fn reselecting_active_project_is_a_noop() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();

        state.select_project(Some("p1".to_string()));
        assert_no_event(&rx);
    }

    #[test]
    fn deselecting_clears_tasks_without_a_request() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![task("t1", "p1", TaskStatus::Todo)]);

        state.select_project(None);
        assert!(state.get_tasks().is_empty());
        assert_eq!(state.active_project_id(), None);
        assert_no_event(&rx);
    }

    #[test]
    fn added_project_becomes_active() {
        let (mut state, rx) = state_with_channel();
        state.add_project(project("p1", "Alpha"));

        assert_eq!(state.active_project_id(), Some("p1"));
        match rx.try_recv() {
            Ok(NetworkEvent::LoadTasks { project_id }) => assert_eq!(project_id, "p1"),
            other => panic!("expected LoadTasks, got {:?}", other),
        }
    }

    #[test]
    fn removing_active_project_falls_back_to_first_remaining() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("a", "Alpha"), project("b", "Beta")]);
        state.select_project(Some("a".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![task("t1", "a", TaskStatus::Todo)]);

        state.remove_project("a");
        assert_eq!(state.active_project_id(), Some("b"));
        match rx.try_recv() {
            Ok(NetworkEvent::LoadTasks { project_id }) => assert_eq!(project_id, "b"),
            other => panic!("expected LoadTasks, got {:?}", other),
        }

        state.remove_project("b");
        assert_eq!(state.active_project_id(), None);
        assert!(state.get_tasks().is_empty());
        assert_no_event(&rx);
    }

    #[test]
    fn removing_inactive_project_keeps_active_untouched() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("a", "Alpha"), project("b", "Beta")]);
        state.select_project(Some("a".to_string()));
        rx.try_recv().unwrap();

        state.remove_project("b");
        assert_eq!(state.active_project_id(), Some("a"));
        assert_no_event(&rx);
    }

    #[test]
    fn status_update_is_optimistic_and_requests_remote() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![task("t1", "p1", TaskStatus::Todo)]);

        state.update_task_status("t1", TaskStatus::Done);
        assert_eq!(state.get_tasks()[0].status, TaskStatus::Done);
        match rx.try_recv() {
            Ok(NetworkEvent::UpdateTaskStatus { id, status }) => {
                assert_eq!(id, "t1");
                assert_eq!(status, TaskStatus::Done);
            }
            other => panic!("expected UpdateTaskStatus, got {:?}", other),
        }
    }

    #[test]
    fn moving_a_kanban_card_follows_it_to_the_next_column() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![
            task("t1", "p1", TaskStatus::Todo),
            task("t2", "p1", TaskStatus::InProgress),
        ]);

        state.move_selected_task(true);
        assert_eq!(state.get_tasks()[0].status, TaskStatus::InProgress);
        assert_eq!(state.kanban_column_index(), 1);
        // the moved card precedes t2 in load order, so selection lands on it
        assert_eq!(state.kanban_task_index(), 0);
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::UpdateTaskStatus { .. })
        ));

        // already at the left edge going backwards from todo
        state.kanban_previous_column();
        state.move_selected_task(false);
        assert_no_event(&rx);
    }

    #[test]
    fn confirmed_task_delete_removes_locally_and_requests_remote() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![task("t1", "p1", TaskStatus::Todo)]);

        state.request_delete_selected_task();
        assert!(state.delete_confirmation().is_some());
        state.confirm_delete();

        assert!(state.get_tasks().is_empty());
        match rx.try_recv() {
            Ok(NetworkEvent::DeleteTask { id }) => assert_eq!(id, "t1"),
            other => panic!("expected DeleteTask, got {:?}", other),
        }
    }

    #[test]
    fn declined_delete_leaves_state_untouched() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();
        state.set_tasks(vec![task("t1", "p1", TaskStatus::Todo)]);

        state.request_delete_selected_task();
        state.cancel_delete();

        assert_eq!(state.get_tasks().len(), 1);
        assert!(state.delete_confirmation().is_none());
        assert_no_event(&rx);
    }

    #[test]
    fn project_delete_is_not_optimistic() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();

        state.request_delete_highlighted_project();
        state.confirm_delete();

        // still present until the remote result comes back
        assert_eq!(state.get_projects().len(), 1);
        match rx.try_recv() {
            Ok(NetworkEvent::DeleteProject { id }) => assert_eq!(id, "p1"),
            other => panic!("expected DeleteProject, got {:?}", other),
        }
    }

    #[test]
    fn task_form_requires_an_active_project() {
        let (mut state, rx) = state_with_channel();
        state.open_task_form();
        assert_eq!(state.current_view(), View::Board);

        state.task_form_mut().title = "orphan".to_string();
        state.task_form_mut().due_date = "2024-06-30".to_string();
        state.submit_task_form();
        assert_no_event(&rx);
    }

    #[test]
    fn valid_task_form_submits_and_resets() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();

        state.open_task_form();
        assert_eq!(state.current_view(), View::TaskForm);
        state.task_form_mut().title = "Write docs".to_string();
        state.task_form_mut().due_date = "2024-06-30".to_string();
        state.task_form_mut().cycle_priority();
        state.submit_task_form();

        match rx.try_recv() {
            Ok(NetworkEvent::CreateTask {
                project_id,
                title,
                priority,
                due_date,
            }) => {
                assert_eq!(project_id, "p1");
                assert_eq!(title, "Write docs");
                assert_eq!(priority, Priority::High);
                assert_eq!(due_date, "2024-06-30");
            }
            other => panic!("expected CreateTask, got {:?}", other),
        }
        assert_eq!(state.current_view(), View::Board);
        assert!(state.task_form().title.is_empty());
    }

    #[test]
    fn invalid_task_form_stays_open() {
        let (mut state, rx) = state_with_channel();
        state.set_projects(vec![project("p1", "Alpha")]);
        state.select_project(Some("p1".to_string()));
        rx.try_recv().unwrap();

        state.open_task_form();
        state.task_form_mut().title = "Write docs".to_string();
        state.task_form_mut().due_date = "soon".to_string();
        state.submit_task_form();

        assert_eq!(state.current_view(), View::TaskForm);
        assert_no_event(&rx);
    }

    #[test]
    fn project_form_submits_trimmed_name() {
        let (mut state, rx) = state_with_channel();
        state.open_project_form();
        for c in " Roadmap ".chars() {
            state.add_project_name_char(c);
        }
        state.submit_project_form();

        match rx.try_recv() {
            Ok(NetworkEvent::CreateProject { name }) => assert_eq!(name, "Roadmap"),
            other => panic!("expected CreateProject, got {:?}", other),
        }
        assert_eq!(state.current_view(), View::Board);
    }

    #[test]
    fn empty_project_form_does_not_submit() {
        let (mut state, rx) = state_with_channel();
        state.open_project_form();
        state.add_project_name_char(' ');
        state.submit_project_form();
        assert_eq!(state.current_view(), View::ProjectForm);
        assert_no_event(&rx);
    }
}
