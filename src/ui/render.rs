use crate::model::{CardLine, CardRecord};
use crate::ui::app::App;
use crate::ui::footer::{card_hints, form_hints, Footer};
use crate::ui::header::Header;
use crate::ui::layout::{card_and_nav, layout_regions, Regions};
use crate::ui::theme::Theme;
use crate::ui::view::{view_model, FormView, ViewModel};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<R: CardRecord>(frame: &mut Frame<'_>, app: &App<R>, theme: &Theme) {
    let view = view_model(app);
    let populated = matches!(view, ViewModel::Populated { .. });
    let regions: Regions =
        layout_regions(frame.area(), theme, view.form().fields.len(), populated);

    frame.render_widget(Header::widget(view.heading(), theme), regions.header);
    frame.render_widget(Clear, regions.body);

    let hints = match &view {
        ViewModel::Empty { message, .. } => {
            let hint = Paragraph::new(Line::from(Span::styled(*message, theme.text)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, regions.body);
            form_hints(false)
        }
        ViewModel::Populated {
            front,
            back,
            revealable,
            speakable,
            card_focused,
            ..
        } => {
            let (card_area, nav_area) = card_and_nav(regions.body);
            frame.render_widget(card_widget(front, back.as_deref(), theme), card_area);
            frame.render_widget(
                nav_widget(*revealable, back.is_some(), *speakable, theme),
                nav_area,
            );
            if *card_focused {
                card_hints(*revealable, *speakable)
            } else {
                form_hints(true)
            }
        }
    };

    draw_form(frame, view.form(), regions.form, theme);

    frame.render_widget(
        Footer::widget(regions.footer, &hints, view.status(), theme),
        regions.footer,
    );
}

fn block<'a>(theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(theme.borders)
        .border_type(theme.border_type)
        .border_style(theme.border)
}

fn card_widget<'a>(front: &[CardLine], back: Option<&[CardLine]>, theme: &Theme) -> Paragraph<'a> {
    let mut lines = Vec::new();
    for line in front {
        push_card_line(&mut lines, line, theme.text, theme);
    }
    if let Some(back) = back {
        for line in back {
            push_card_line(&mut lines, line, theme.answer, theme);
        }
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(theme.card)
        .block(block(theme))
}

fn push_card_line(lines: &mut Vec<Line<'_>>, line: &CardLine, value_style: Style, theme: &Theme) {
    lines.push(Line::from(Span::styled(format!("{}:", line.label), theme.label)));
    lines.push(Line::from(Span::styled(line.value.clone(), value_style)));
    lines.push(Line::from(""));
}

fn nav_widget<'a>(revealable: bool, revealed: bool, speakable: bool, theme: &Theme) -> Paragraph<'a> {
    let mut spans = vec![Span::styled("◀ Previous", theme.label)];
    if revealable {
        let toggle = if revealed { "Hide Answer" } else { "Show Answer" };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("[ {} ]", toggle), theme.label));
    }
    if speakable {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[ Speak ]", theme.label));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled("Next ▶", theme.label));
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn draw_form(frame: &mut Frame<'_>, form: &FormView, area: Rect, theme: &Theme) {
    let form_block = block(theme).title(Span::styled(form.heading.clone(), theme.title));
    let inner = form_block.inner(area);

    let mut lines: Vec<Line> = Vec::with_capacity(form.fields.len() + 1);
    let mut cursor = None;
    for (idx, field) in form.fields.iter().enumerate() {
        let marker = if field.required { "*" } else { "" };
        let prefix = format!("{}{}: ", field.label, marker);
        let focused = form.focused == Some(idx);
        let value_style = if focused { theme.focused_field } else { theme.text };
        let line = Line::from(vec![
            Span::styled(prefix, theme.label),
            Span::styled(field.value.clone(), value_style),
        ]);
        if focused {
            cursor = Some((line.width() as u16, idx as u16));
        }
        lines.push(line);
    }
    lines.push(Line::from(Span::styled(
        format!("[Enter] {}", form.submit_label),
        theme.hint,
    )));

    frame.render_widget(Paragraph::new(lines).block(form_block), area);

    if let Some((x, y)) = cursor {
        if inner.width > 0 && y < inner.height {
            let x = inner.x + x.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y + y));
        }
    }
}
