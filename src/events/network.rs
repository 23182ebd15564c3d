use crate::state::State;
use crate::store::{NewTask, Priority, Store, TaskStatus};
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    LoadProjects,
    LoadTasks {
        project_id: String,
    },
    CreateProject {
        name: String,
    },
    DeleteProject {
        id: String,
    },
    CreateTask {
        project_id: String,
        title: String,
        priority: Priority,
        due_date: String,
    },
    UpdateTaskStatus {
        id: String,
        status: TaskStatus,
    },
    DeleteTask {
        id: String,
    },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    store: &'a Store,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, store: &'a Store) -> Self {
        Handler { state, store }
    }

    /// Handle network events by type. The store never reports error detail,
    /// so handlers branch only on its success/empty sentinels.
    ///
    pub async fn handle(&mut self, event: Event) {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadProjects => self.load_projects().await,
            Event::LoadTasks { project_id } => self.load_tasks(project_id).await,
            Event::CreateProject { name } => self.create_project(name).await,
            Event::DeleteProject { id } => self.delete_project(id).await,
            Event::CreateTask {
                project_id,
                title,
                priority,
                due_date,
            } => self.create_task(project_id, title, priority, due_date).await,
            Event::UpdateTaskStatus { id, status } => self.update_task_status(id, status).await,
            Event::DeleteTask { id } => self.delete_task(id).await,
        }
    }

    /// Load all projects and activate the first one if none is active yet.
    ///
    async fn load_projects(&mut self) {
        info!("Fetching projects...");
        {
            self.state.lock().await.set_loading(true);
        }
        let projects = self.store.projects().await;
        info!("Received {} projects.", projects.len());
        let mut state = self.state.lock().await;
        let first_id = projects.first().map(|p| p.id.clone());
        state.set_projects(projects);
        if state.active_project_id().is_none() {
            if let Some(id) = first_id {
                state.select_project(Some(id));
            }
        }
        state.set_loading(false);
    }

    /// Load tasks for a project, replacing the local collection wholesale.
    /// The result only applies while the project is still the active one,
    /// so a stale response cannot leak another project's tasks in.
    ///
    async fn load_tasks(&mut self, project_id: String) {
        info!("Fetching tasks for project {}...", project_id);
        let tasks = self.store.tasks(&project_id).await;
        info!("Received {} tasks for project {}.", tasks.len(), project_id);
        let mut state = self.state.lock().await;
        if state.active_project_id() == Some(project_id.as_str()) {
            state.set_tasks(tasks);
        } else {
            warn!("Discarding stale task load for project {}.", project_id);
        }
    }

    /// Create a project and, on success, mirror it into local state as the
    /// new active project. On failure local state stays unchanged.
    ///
    async fn create_project(&mut self, name: String) {
        info!("Creating project '{}'...", name);
        match self.store.create_project(&name).await {
            Some(project) => {
                info!("Project '{}' created with id {}.", project.name, project.id);
                self.state.lock().await.add_project(project);
            }
            None => warn!("Project '{}' was not created.", name),
        }
    }

    /// Delete a project remotely before removing it locally. Activation
    /// falls back inside the state when the active project goes away.
    ///
    async fn delete_project(&mut self, id: String) {
        info!("Deleting project {}...", id);
        if self.store.delete_project(&id).await {
            self.state.lock().await.remove_project(&id);
            info!("Project {} deleted.", id);
        } else {
            warn!("Project {} was not deleted.", id);
        }
    }

    /// Create a task and, on success, append the stored row to the local
    /// list while its project is still the active one.
    ///
    async fn create_task(
        &mut self,
        project_id: String,
        title: String,
        priority: Priority,
        due_date: String,
    ) {
        info!("Creating task '{}' in project {}...", title, project_id);
        let new_task = NewTask {
            project_id,
            title,
            priority,
            due_date,
        };
        match self.store.create_task(&new_task).await {
            Some(task) => {
                info!("Task '{}' created with id {}.", task.title, task.id);
                let mut state = self.state.lock().await;
                if state.active_project_id() == Some(task.project_id.as_str()) {
                    state.push_task(task);
                }
            }
            None => warn!("Task '{}' was not created.", new_task.title),
        }
    }

    /// Push a status change the UI already applied optimistically. A failed
    /// update falls back to a full reload of the active project's tasks.
    ///
    async fn update_task_status(&mut self, id: String, status: TaskStatus) {
        info!("Updating status of task {}...", id);
        if !self.store.update_task_status(&id, status).await {
            warn!("Status update for task {} failed, reloading tasks...", id);
            self.reload_active_tasks().await;
        }
    }

    /// Push a deletion the UI already applied optimistically, with the same
    /// reload fallback as status updates.
    ///
    async fn delete_task(&mut self, id: String) {
        info!("Deleting task {}...", id);
        if !self.store.delete_task(&id).await {
            warn!("Deletion of task {} failed, reloading tasks...", id);
            self.reload_active_tasks().await;
        }
    }

    /// Reconcile after a failed mutation by replacing the local task
    /// collection with the store's current state for the active project.
    /// Not a targeted revert: other optimistic edits in flight are
    /// overwritten along with the failed one.
    ///
    async fn reload_active_tasks(&mut self) {
        let project_id = {
            self.state
                .lock()
                .await
                .active_project_id()
                .map(str::to_owned)
        };
        if let Some(project_id) = project_id {
            let tasks = self.store.tasks(&project_id).await;
            let mut state = self.state.lock().await;
            if state.active_project_id() == Some(project_id.as_str()) {
                state.set_tasks(tasks);
            }
        }
    }
}
