//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Focus, View, ViewMode, DeleteTarget)
//! - Task form editing types

mod form;
mod navigation;
mod state_impl;

pub use form::{TaskForm, TaskFormField};
pub use navigation::{DeleteTarget, Focus, View, ViewMode};
pub use state_impl::State;
