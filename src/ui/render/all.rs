use super::{footer, log, main, setup, sidebar, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const SIDEBAR_WIDTH: u16 = 28;
const FOOTER_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 10;

/// Render the whole interface according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    // Without usable store settings there is nothing to drive the main UI
    if !state.is_configured() {
        setup::setup(frame, size);
        return;
    }

    let mut constraints = vec![Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    sidebar::sidebar(frame, columns[0], state);
    main::main(frame, columns[1], state);

    if state.is_log_visible() {
        log::log(frame, rows[1]);
    }
    footer::footer(frame, rows[rows.len() - 1], state);
}
