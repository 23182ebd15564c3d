use super::Frame;
use crate::state::{Focus, State, View, ViewMode};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

/// Render footer widget with key hints for the current context.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let hints = if state.delete_confirmation().is_some() {
        "Enter: confirm  Esc: cancel"
    } else {
        match state.current_view() {
            View::TaskForm => "Tab: next field  \u{2190}/\u{2192}: priority  Enter: create  Esc: cancel",
            View::ProjectForm => "Enter: create  Esc: cancel",
            View::Board => match state.current_focus() {
                Focus::Sidebar => {
                    "j/k: navigate  Enter: open  a: add  d: delete  Tab: board  v: view  ~: log  q: quit"
                }
                Focus::Board => match state.get_view_mode() {
                    ViewMode::Kanban => {
                        "h/l: column  j/k: task  [/]: move task  n: new  d: delete  Tab: projects  v: view  ~: log  q: quit"
                    }
                    ViewMode::List => {
                        "j/k: task  s: advance status  n: new  d: delete  Tab: projects  v: view  ~: log  q: quit"
                    }
                },
            },
        }
    };

    let paragraph = Paragraph::new(hints).style(styling::muted_text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style()),
    );
    frame.render_widget(paragraph, size);
}
