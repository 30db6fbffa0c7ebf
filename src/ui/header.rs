use crate::transport::ConnectionStatus;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, connection: &ConnectionStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot_color, status) = match connection {
            ConnectionStatus::Connected { url } => (STATUS_OK, format!("Connected to {url}")),
            ConnectionStatus::Offline { reason } => (STATUS_WARN, format!("Offline: {reason}")),
            ConnectionStatus::Disconnected => (STATUS_ERROR, "Disconnected".to_string()),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "shopcart",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(dot_color)),
            Span::styled(" ", text_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
