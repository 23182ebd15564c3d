use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render flat task list view in due date order.
///
pub fn list(frame: &mut Frame, size: Rect, state: &State) {
    let tasks = state.get_tasks();
    let is_focused = state.current_focus() == Focus::Board;

    let title = format!("Tasks ({})", tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if is_focused {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });

    if tasks.is_empty() {
        let empty_text = Paragraph::new("No tasks yet. Press n to add one.")
            .block(block)
            .alignment(Alignment::Center)
            .style(styling::muted_text_style());
        frame.render_widget(empty_text, size);
        return;
    }

    let today = Local::now().date_naive();
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let marker = match task.status {
                crate::store::TaskStatus::Todo => "[ ]",
                crate::store::TaskStatus::InProgress => "[~]",
                crate::store::TaskStatus::Done => "[x]",
            };
            let spans = vec![
                Span::styled(format!("{} ", marker), styling::status_style(task.status)),
                Span::styled(task.title.clone(), styling::normal_text_style()),
                Span::styled(
                    format!(" [{}]", task.priority.label()),
                    styling::priority_style(task.priority),
                ),
                Span::styled(
                    format!(" due {}", task.due_date),
                    if task.is_overdue(today) {
                        styling::overdue_style()
                    } else {
                        styling::due_date_style()
                    },
                ),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style())
        .highlight_style(styling::active_list_item_style());

    let mut list_state = ratatui::widgets::ListState::default();
    if is_focused {
        list_state.select(Some(state.list_task_index().min(tasks.len() - 1)));
    }

    frame.render_stateful_widget(list, size, &mut list_state);
}
