use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{BorderType, Borders};

use crate::config::RenderStyle;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_BACKGROUND: Color = Color::Rgb(0x1f, 0x1f, 0x1f);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Everything the renderer needs to know about a [`RenderStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub borders: Borders,
    pub border_type: BorderType,
    pub border: Style,
    pub title: Style,
    pub label: Style,
    pub text: Style,
    pub answer: Style,
    pub card: Style,
    pub focused_field: Style,
    pub hint: Style,
    pub error: Style,
}

impl Theme {
    pub fn for_style(style: RenderStyle) -> Self {
        match style {
            RenderStyle::Plain => Self::plain(),
            RenderStyle::Card => Self::card(),
            RenderStyle::Rich => Self::rich(),
        }
    }

    pub fn plain() -> Self {
        Self {
            borders: Borders::NONE,
            border_type: BorderType::Plain,
            border: Style::default(),
            title: Style::default(),
            label: Style::default(),
            text: Style::default(),
            answer: Style::default(),
            card: Style::default(),
            focused_field: Style::default().add_modifier(Modifier::REVERSED),
            hint: Style::default(),
            error: Style::default(),
        }
    }

    pub fn card() -> Self {
        Self {
            borders: Borders::ALL,
            border_type: BorderType::Plain,
            label: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            hint: Style::default().add_modifier(Modifier::DIM),
            ..Self::plain()
        }
    }

    pub fn rich() -> Self {
        Self {
            borders: Borders::ALL,
            border_type: BorderType::Rounded,
            border: Style::default().fg(GLOBAL_BORDER),
            title: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            label: Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            text: Style::default().fg(HEADER_TEXT),
            answer: Style::default().fg(ACCENT),
            card: Style::default().bg(CARD_BACKGROUND),
            focused_field: Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT),
            hint: Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            error: Style::default().fg(STATUS_ERROR),
        }
    }

    /// Rows taken by top and bottom borders.
    pub fn vertical_chrome(&self) -> u16 {
        let mut rows = 0;
        if self.borders.contains(Borders::TOP) {
            rows += 1;
        }
        if self.borders.contains(Borders::BOTTOM) {
            rows += 1;
        }
        rows
    }
}
