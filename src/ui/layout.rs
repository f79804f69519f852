use ratatui::layout::{Constraint, Layout, Rect};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    /// Card and navigation when populated, the empty-state message otherwise.
    pub body: Rect,
    pub form: Rect,
    pub footer: Rect,
}

/// Rows a titled block spends outside its content.
pub fn titled_chrome(theme: &Theme) -> u16 {
    theme.vertical_chrome().max(1)
}

/// Empty-state puts the form right under the header with the hint below it;
/// populated-state puts the card first.
pub fn layout_regions(area: Rect, theme: &Theme, form_fields: usize, populated: bool) -> Regions {
    let header_height = 1 + theme.vertical_chrome();
    let footer_height = 2 + theme.vertical_chrome();
    // One row per field plus the submit line.
    let form_height = form_fields as u16 + 1 + titled_chrome(theme);

    if populated {
        let rows = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(form_height),
            Constraint::Length(footer_height),
        ])
        .split(area);
        Regions {
            header: rows[0],
            body: rows[1],
            form: rows[2],
            footer: rows[3],
        }
    } else {
        let rows = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(form_height),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .split(area);
        Regions {
            header: rows[0],
            form: rows[1],
            body: rows[2],
            footer: rows[3],
        }
    }
}

/// Splits the populated body into the card and the navigation row.
pub fn card_and_nav(body: Rect) -> (Rect, Rect) {
    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(body);
    (rows[0], rows[1])
}
