mod all;
mod create_project;
mod create_task;
mod footer;
mod kanban;
mod list;
mod log;
mod main;
mod setup;
mod sidebar;

use super::*;

pub use all::all as render;
