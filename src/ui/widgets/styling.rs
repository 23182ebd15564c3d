use crate::store::{Priority, TaskStatus};
use ratatui::style::{Color, Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style() -> Style {
    current_list_item_style().fg(Color::Cyan)
}

/// Return the style for normal text.
///
pub fn normal_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Return the style for secondary text.
///
pub fn muted_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the style for the banner.
///
pub fn banner_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Return the accent style for a task priority.
///
pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::Low => Style::default().fg(Color::Green),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::High => Style::default().fg(Color::Red),
    }
}

/// Return the accent style for a workflow status.
///
pub fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Todo => Style::default().fg(Color::Blue),
        TaskStatus::InProgress => Style::default().fg(Color::Yellow),
        TaskStatus::Done => Style::default().fg(Color::Green),
    }
}

/// Return the style for due dates that have not passed.
///
pub fn due_date_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Return the style for overdue due dates.
///
pub fn overdue_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
