use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Projects";

/// Render project sidebar widget according to state.
///
pub fn sidebar(frame: &mut Frame, size: Rect, state: &mut State) {
    let is_focused = state.current_focus() == Focus::Sidebar;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());

    let list_item_style;
    if is_focused {
        list_item_style = styling::active_list_item_style();
        block = block
            .border_style(styling::active_block_border_style())
            .title(Span::styled(
                BLOCK_TITLE,
                styling::active_block_title_style(),
            ));
    } else {
        list_item_style = styling::current_list_item_style();
        block = block.title(BLOCK_TITLE);
    }

    // Show the spinner while the initial project load is still in flight
    if state.get_projects().is_empty() && state.is_loading() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    let active_id = state.active_project_id().map(str::to_owned);
    let items: Vec<ListItem> = if state.get_projects().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No projects. Press a to add one.",
            styling::muted_text_style(),
        )))]
    } else {
        state
            .get_projects()
            .iter()
            .map(|p| {
                // Mark the active project so it stands out from the highlight
                if active_id.as_deref() == Some(p.id.as_str()) {
                    ListItem::new(Line::from(vec![
                        Span::styled("● ", styling::active_list_item_style()),
                        Span::styled(p.name.to_owned(), styling::normal_text_style()),
                    ]))
                } else {
                    ListItem::new(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(p.name.to_owned(), styling::normal_text_style()),
                    ]))
                }
            })
            .collect()
    };

    let list = List::new(items)
        .style(styling::normal_text_style())
        .highlight_style(list_item_style)
        .block(block);

    frame.render_stateful_widget(list, size, state.get_projects_list_state());
}
