use super::Frame;
use crate::state::{Focus, State};
use crate::store::{Task, TaskStatus};
use crate::ui::widgets::styling;
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render kanban board view with one column per workflow status.
///
pub fn kanban(frame: &mut Frame, size: Rect, state: &State) {
    let constraints: Vec<Constraint> = (0..TaskStatus::COLUMNS.len())
        .map(|_| Constraint::Percentage((100 / TaskStatus::COLUMNS.len()) as u16))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(size);

    let today = Local::now().date_naive();
    let board_focused = state.current_focus() == Focus::Board;

    for (idx, status) in TaskStatus::COLUMNS.iter().enumerate() {
        let column_tasks = state.tasks_with_status(*status);
        let is_selected = board_focused && idx == state.kanban_column_index();
        let selected_task_index = if is_selected {
            Some(state.kanban_task_index())
        } else {
            None
        };
        render_column(
            frame,
            chunks[idx],
            *status,
            &column_tasks,
            is_selected,
            selected_task_index,
            today,
        );
    }
}

fn render_column(
    frame: &mut Frame,
    size: Rect,
    status: TaskStatus,
    tasks: &[&Task],
    is_selected: bool,
    selected_task_index: Option<usize>,
    today: NaiveDate,
) {
    let title = format!("{} ({})", status.title(), tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if is_selected {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });

    if tasks.is_empty() {
        let empty_text = Paragraph::new("No tasks")
            .block(block)
            .alignment(Alignment::Center)
            .style(styling::muted_text_style());
        frame.render_widget(empty_text, size);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let name_style = if is_selected && selected_task_index == Some(idx) {
                styling::active_list_item_style()
            } else {
                styling::normal_text_style()
            };

            let mut spans = vec![Span::styled(task.title.clone(), name_style)];
            spans.push(Span::styled(
                format!(" [{}]", task.priority.label()),
                styling::priority_style(task.priority),
            ));
            spans.push(Span::styled(
                format!(" {}", task.due_date),
                if task.is_overdue(today) {
                    styling::overdue_style()
                } else {
                    styling::due_date_style()
                },
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style())
        .highlight_style(styling::active_list_item_style());

    let mut list_state = ratatui::widgets::ListState::default();
    if is_selected {
        let index = selected_task_index.unwrap_or(0).min(tasks.len() - 1);
        list_state.select(Some(index));
    }

    frame.render_stateful_widget(list, size, &mut list_state);
}
