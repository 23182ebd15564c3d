//! Task creation form state.
//!
//! Holds the in-progress input for a new task and the validation rule the
//! form applies before submitting.

use crate::store::Priority;
use chrono::NaiveDate;

/// Identifies the task form field currently accepting input.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TaskFormField {
    Title,
    Priority,
    DueDate,
}

impl TaskFormField {
    /// Return the next field in tab order, wrapping around.
    ///
    pub fn next(&self) -> TaskFormField {
        match self {
            TaskFormField::Title => TaskFormField::Priority,
            TaskFormField::Priority => TaskFormField::DueDate,
            TaskFormField::DueDate => TaskFormField::Title,
        }
    }

    /// Return the previous field in tab order, wrapping around.
    ///
    pub fn previous(&self) -> TaskFormField {
        match self {
            TaskFormField::Title => TaskFormField::DueDate,
            TaskFormField::Priority => TaskFormField::Title,
            TaskFormField::DueDate => TaskFormField::Priority,
        }
    }
}

/// Holds the in-progress input for a new task.
///
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub priority: Priority,
    pub due_date: String,
    pub field: TaskFormField,
}

impl Default for TaskForm {
    fn default() -> TaskForm {
        TaskForm {
            title: String::new(),
            priority: Priority::Medium,
            due_date: String::new(),
            field: TaskFormField::Title,
        }
    }
}

impl TaskForm {
    /// Clear all fields back to their defaults.
    ///
    pub fn reset(&mut self) {
        *self = TaskForm::default();
    }

    /// The form may submit once the title is non-empty and the due date is
    /// a real YYYY-MM-DD calendar date.
    ///
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
            && NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").is_ok()
    }

    /// Route a typed character to the active field. The priority field is a
    /// selector and ignores typed characters.
    ///
    pub fn push_char(&mut self, c: char) {
        match self.field {
            TaskFormField::Title => self.title.push(c),
            TaskFormField::DueDate => self.due_date.push(c),
            TaskFormField::Priority => {}
        }
    }

    /// Remove the last character of the active field.
    ///
    pub fn pop_char(&mut self) {
        match self.field {
            TaskFormField::Title => {
                self.title.pop();
            }
            TaskFormField::DueDate => {
                self.due_date.pop();
            }
            TaskFormField::Priority => {}
        }
    }

    /// Advance the priority selector.
    ///
    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.cycled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_with_title_and_calendar_date() {
        let mut form = TaskForm::default();
        form.title = "Ship the release".to_string();
        form.due_date = "2024-07-01".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn invalid_without_title() {
        let mut form = TaskForm::default();
        form.title = "   ".to_string();
        form.due_date = "2024-07-01".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn invalid_without_parseable_due_date() {
        let mut form = TaskForm::default();
        form.title = "Ship the release".to_string();
        form.due_date = String::new();
        assert!(!form.is_valid());
        form.due_date = "tomorrow".to_string();
        assert!(!form.is_valid());
        form.due_date = "2024-13-40".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn characters_route_to_active_field() {
        let mut form = TaskForm::default();
        form.push_char('a');
        form.field = TaskFormField::DueDate;
        form.push_char('2');
        form.field = TaskFormField::Priority;
        form.push_char('x');
        assert_eq!(form.title, "a");
        assert_eq!(form.due_date, "2");

        form.field = TaskFormField::Title;
        form.pop_char();
        assert!(form.title.is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = TaskForm::default();
        form.title = "Ship the release".to_string();
        form.due_date = "2024-07-01".to_string();
        form.cycle_priority();
        form.field = TaskFormField::DueDate;
        form.reset();
        assert!(form.title.is_empty());
        assert!(form.due_date.is_empty());
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(form.field, TaskFormField::Title);
    }

    #[test]
    fn tab_order_wraps_both_ways() {
        assert_eq!(TaskFormField::Title.next(), TaskFormField::Priority);
        assert_eq!(TaskFormField::DueDate.next(), TaskFormField::Title);
        assert_eq!(TaskFormField::Title.previous(), TaskFormField::DueDate);
        assert_eq!(TaskFormField::Priority.previous(), TaskFormField::Title);
    }
}
