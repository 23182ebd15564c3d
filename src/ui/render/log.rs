use super::Frame;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget showing the application log buffer.
///
pub fn log(frame: &mut Frame, size: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log (~ to hide)")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style()),
        )
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::White))
        .style_debug(Style::default().fg(Color::DarkGray))
        .style_trace(Style::default().fg(Color::DarkGray))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_target(false)
        .output_file(false)
        .output_line(false);

    frame.render_widget(widget, size);
}
