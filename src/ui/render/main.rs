use super::{create_project, create_task, kanban, list, Frame};
use crate::state::{DeleteTarget, State, View, ViewMode};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &State) {
    if state.is_loading() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("TaskFlow")
            .border_style(styling::normal_block_border_style());
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    if state.active_project().is_none() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("TaskFlow")
            .border_style(styling::normal_block_border_style());
        let text = Paragraph::new("Select or create a project to get started.")
            .block(block)
            .alignment(Alignment::Center)
            .style(styling::muted_text_style());
        frame.render_widget(text, size);
    } else {
        match state.get_view_mode() {
            ViewMode::Kanban => kanban::kanban(frame, size, state),
            ViewMode::List => list::list(frame, size, state),
        }
    }

    // Form modals render on top of the board
    match state.current_view() {
        View::TaskForm => create_task::create_task(frame, size, state),
        View::ProjectForm => create_project::create_project(frame, size, state),
        View::Board => {}
    }

    // The delete confirmation dialog renders on top of everything
    if let Some(target) = state.delete_confirmation() {
        render_delete_confirmation(frame, size, target, state);
    }
}

fn render_delete_confirmation(frame: &mut Frame, size: Rect, target: &DeleteTarget, state: &State) {
    let (kind, name) = match target {
        DeleteTarget::Task { id } => (
            "task",
            state
                .get_tasks()
                .iter()
                .find(|t| &t.id == id)
                .map(|t| t.title.clone())
                .unwrap_or_else(|| "this task".to_string()),
        ),
        DeleteTarget::Project { id } => (
            "project",
            state
                .get_projects()
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "this project".to_string()),
        ),
    };

    let popup_area = centered_rect(60, 25, size);
    frame.render_widget(Clear, popup_area);

    // Truncate long names so the dialog stays on one line
    let display_name = if name.len() > 45 {
        format!("{}...", &name[..45])
    } else {
        name
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete {}: \"{}\"?", kind, display_name),
            styling::normal_text_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            styling::overdue_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: confirm, Esc: cancel",
            styling::muted_text_style(),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Deletion")
                .border_style(styling::active_block_border_style()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Return a centered rectangle taking the given percentages of the area.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, size: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
