//! Pure mapping from [`App`] state to what is on screen.
//!
//! Two shapes only: empty-state (form and a hint) and populated-state
//! (current card, navigation, form).

use crate::model::{CardLine, CardRecord};
use crate::ui::app::{App, Focus};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub heading: String,
    pub fields: Vec<FieldView>,
    pub submit_label: String,
    /// Set while the form has keyboard focus.
    pub focused: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Empty {
        heading: String,
        message: &'static str,
        form: FormView,
        status: Option<String>,
    },
    Populated {
        heading: String,
        front: Vec<CardLine>,
        /// Present only while revealed.
        back: Option<Vec<CardLine>>,
        revealable: bool,
        speakable: bool,
        card_focused: bool,
        form: FormView,
        status: Option<String>,
    },
}

impl ViewModel {
    pub fn heading(&self) -> &str {
        match self {
            ViewModel::Empty { heading, .. } | ViewModel::Populated { heading, .. } => heading,
        }
    }

    pub fn form(&self) -> &FormView {
        match self {
            ViewModel::Empty { form, .. } | ViewModel::Populated { form, .. } => form,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            ViewModel::Empty { status, .. } | ViewModel::Populated { status, .. } => {
                status.as_deref()
            }
        }
    }
}

pub fn view_model<R: CardRecord>(app: &App<R>) -> ViewModel {
    let deck = app.deck();
    let form_focused = app.focus() == Focus::Form;
    let status = app.status().map(str::to_string);

    let Some((current, (position, total))) = deck.current().zip(deck.position()) else {
        return ViewModel::Empty {
            heading: R::TITLE.to_string(),
            message: R::EMPTY_MESSAGE,
            form: form_view::<R>(app, form_focused, format!("New {}", R::NOUN)),
            status,
        };
    };

    ViewModel::Populated {
        heading: format!("{} ({}/{})", R::TITLE, position, total),
        front: current.front(),
        back: deck.revealed().then(|| current.back()),
        revealable: R::is_revealable(),
        speakable: R::is_speakable(),
        card_focused: !form_focused,
        form: form_view::<R>(app, form_focused, format!("Add New {}", R::NOUN)),
        status,
    }
}

fn form_view<R: CardRecord>(app: &App<R>, focused: bool, heading: String) -> FormView {
    let form = app.form();
    FormView {
        heading,
        fields: R::form_fields()
            .iter()
            .enumerate()
            .map(|(idx, spec)| FieldView {
                label: spec.label,
                value: form.value(idx).unwrap_or_default().to_string(),
                required: spec.required,
            })
            .collect(),
        submit_label: format!("Add {}", R::NOUN),
        focused: focused.then(|| form.focused()),
    }
}
