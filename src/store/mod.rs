//! Remote store access module.
//!
//! Wraps the hosted relational backend's REST endpoint behind typed list,
//! create, update, and delete operations for projects and tasks.

mod client;
mod error;
mod records;

pub use records::*;

use crate::config::Config;
use client::Client;
use log::*;
use serde_json::json;

const PROJECTS_TABLE: &str = "proyectos";
const TASKS_TABLE: &str = "tareas";

/// Responsible for asynchronous interaction with the remote store including
/// transformation of response data into explicitly-defined types.
///
/// Backend failures never propagate to callers: every operation logs the
/// error and collapses it to an empty or false result, so callers branch on
/// success without handling error detail.
///
pub struct Store {
    client: Client,
}

impl Store {
    /// Returns a new instance for the given configuration.
    ///
    pub fn new(config: &Config) -> Store {
        debug!("Initializing store client for {}...", config.base_url);
        Store {
            client: Client::new(&config.base_url, &config.api_key),
        }
    }

    /// Returns all projects in creation order, or an empty vector if the
    /// request fails.
    ///
    pub async fn projects(&self) -> Vec<Project> {
        debug!("Requesting all projects...");
        match self
            .client
            .select::<Project>(
                PROJECTS_TABLE,
                &[("select", "*"), ("order", "created_at.asc")],
            )
            .await
        {
            Ok(projects) => {
                debug!("Retrieved {} projects", projects.len());
                projects
            }
            Err(e) => {
                error!("Failed to fetch projects: {}", e);
                vec![]
            }
        }
    }

    /// Create a project with the given name. Returns the stored row, or None
    /// if the request fails.
    ///
    pub async fn create_project(&self, name: &str) -> Option<Project> {
        debug!("Creating project '{}'...", name);
        match self
            .client
            .insert::<Project>(PROJECTS_TABLE, json!([{ "name": name }]))
            .await
        {
            Ok(project) => Some(project),
            Err(e) => {
                error!("Failed to create project '{}': {}", name, e);
                None
            }
        }
    }

    /// Delete the project with the given id. Returns whether the deletion
    /// succeeded.
    ///
    pub async fn delete_project(&self, id: &str) -> bool {
        debug!("Deleting project {}...", id);
        match self.client.delete(PROJECTS_TABLE, id).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to delete project {}: {}", id, e);
                false
            }
        }
    }

    /// Returns all tasks belonging to the project in due date order, or an
    /// empty vector if the request fails.
    ///
    pub async fn tasks(&self, project_id: &str) -> Vec<Task> {
        debug!("Requesting tasks for project {}...", project_id);
        let project_filter = format!("eq.{}", project_id);
        match self
            .client
            .select::<Task>(
                TASKS_TABLE,
                &[
                    ("select", "*"),
                    ("project_id", project_filter.as_str()),
                    ("order", "due_date.asc"),
                ],
            )
            .await
        {
            Ok(tasks) => {
                debug!("Retrieved {} tasks for project {}", tasks.len(), project_id);
                tasks
            }
            Err(e) => {
                error!("Failed to fetch tasks for project {}: {}", project_id, e);
                vec![]
            }
        }
    }

    /// Create a task from the given fields. The workflow status is pinned
    /// here: new tasks always enter the board in `todo`. Returns the stored
    /// row, or None if the request fails.
    ///
    pub async fn create_task(&self, new_task: &NewTask) -> Option<Task> {
        debug!(
            "Creating task '{}' in project {}...",
            new_task.title, new_task.project_id
        );
        let body = json!([{
            "project_id": new_task.project_id,
            "title": new_task.title,
            "priority": new_task.priority,
            "status": TaskStatus::Todo,
            "due_date": new_task.due_date,
        }]);
        match self.client.insert::<Task>(TASKS_TABLE, body).await {
            Ok(task) => Some(task),
            Err(e) => {
                error!("Failed to create task '{}': {}", new_task.title, e);
                None
            }
        }
    }

    /// Move the task with the given id to a new workflow status. Returns
    /// whether the update succeeded.
    ///
    pub async fn update_task_status(&self, id: &str, status: TaskStatus) -> bool {
        debug!("Updating status of task {}...", id);
        match self
            .client
            .update(TASKS_TABLE, id, json!({ "status": status }))
            .await
        {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to update status of task {}: {}", id, e);
                false
            }
        }
    }

    /// Delete the task with the given id. Returns whether the deletion
    /// succeeded.
    ///
    pub async fn delete_task(&self, id: &str) -> bool {
        debug!("Deleting task {}...", id);
        match self.client.delete(TASKS_TABLE, id).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to delete task {}: {}", id, e);
                false
            }
        }
    }
}
