use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    /// Key hints with the version right-aligned, then the status line.
    pub fn widget(area: Rect, hints: &str, status: Option<&str>, theme: &Theme) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let chrome = if theme.borders.is_empty() { 0 } else { 2 };
        let content_width = area.width.saturating_sub(chrome) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let hint_line = Line::from(vec![
            Span::styled(hints.to_string(), theme.hint),
            Span::styled(" ".repeat(padding), theme.hint),
            Span::styled(version, theme.hint),
        ]);
        let status_line = match status {
            Some(message) => Line::from(Span::styled(message.to_string(), theme.error)),
            None => Line::from(""),
        };

        Paragraph::new(vec![hint_line, status_line])
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(theme.borders)
                    .border_type(theme.border_type)
                    .border_style(theme.border),
            )
    }
}

pub fn card_hints(revealable: bool, speakable: bool) -> String {
    let mut hints = vec![" ←/→: Prev/Next"];
    if revealable {
        hints.push("Space: Show/Hide Answer");
    }
    if speakable {
        hints.push("s: Speak");
    }
    hints.push("Tab: Add");
    hints.push("q: Quit");
    hints.join(" │ ")
}

pub fn form_hints(populated: bool) -> String {
    let mut hints = vec![" Tab/↑↓: Field", "Enter: Submit"];
    if populated {
        hints.push("Esc: Back");
    }
    hints.push("Ctrl+Q: Quit");
    hints.join(" │ ")
}
