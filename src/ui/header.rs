use crate::ui::theme::Theme;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

pub struct Header;

impl Header {
    /// Deck title, with `(i/n)` once there is something to show.
    pub fn widget(heading: &str, theme: &Theme) -> Paragraph<'static> {
        let line = Line::from(Span::styled(heading.to_string(), theme.title));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(theme.borders)
                .border_type(theme.border_type)
                .border_style(theme.border),
        )
    }
}
