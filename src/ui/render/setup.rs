use super::Frame;
use crate::config::{KEY_ENV_VAR, URL_ENV_VAR};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const BANNER: &str = r#"
  _____         _    _____ _
 |_   _|_ _ ___| | _|  ___| | _____      __
   | |/ _` / __| |/ /| |_  | |/ _ \ \ /\ / /
   | | (_| \__ \   < |  _| | | (_) \ V  V /
   |_|\__,_|___/_|\_\|_|   |_|\___/ \_/\_/
"#;

/// Render the static setup-instructions screen shown while the store
/// settings are unusable. No data loads and no network calls happen in
/// this mode.
///
pub fn setup(frame: &mut Frame, size: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("TaskFlow - Setup Required")
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .margin(1)
        .split(size);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::banner_style())
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let instructions = format!(
        "Welcome to TaskFlow. To start managing your projects, connect the \
         application to your hosted store.\n\n\
         Set these environment variables before launching:\n\n\
         {url}   base endpoint URL (must start with http:// or https://)\n\
         {key}   anonymous access key\n\n\
         Both can also be passed with the --url and --key flags.\n\n\
         Ensure the tables 'proyectos' and 'tareas' exist in your database.\n\n\
         No data is loaded while the application is unconfigured. Press q to exit.",
        url = URL_ENV_VAR,
        key = KEY_ENV_VAR,
    );
    let instructions = Paragraph::new(instructions)
        .style(styling::normal_text_style())
        .wrap(Wrap { trim: true });
    frame.render_widget(instructions, chunks[1]);
}
