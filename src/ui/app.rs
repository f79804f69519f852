use crate::model::{first_missing_field, CardRecord, DraftDefaults};
use crate::speech::Speaker;
use crate::store::{StoreCommand, StoreEvent, StoreSender};
use crate::ui::deck::{DeckIntent, DeckReducer, DeckState};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Card,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All view state of the viewer, owned by the UI loop.
pub struct App<R: CardRecord> {
    should_quit: bool,
    focus: Focus,
    /// Collection, index and reveal flag (MVI pattern).
    deck: DeckState<R>,
    /// Pending add-form values (MVI pattern).
    form: FormState,
    /// Last failure or validation message, shown in the footer.
    status: Option<String>,
    store: Option<StoreSender<R>>,
    speaker: Arc<dyn Speaker>,
    defaults: DraftDefaults,
}

impl<R: CardRecord> App<R> {
    pub fn new(defaults: DraftDefaults, speaker: Arc<dyn Speaker>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Card,
            deck: DeckState::default(),
            form: FormState::new(R::form_fields().len()),
            status: None,
            store: None,
            speaker,
            defaults,
        }
    }

    pub fn attach_store(&mut self, store: StoreSender<R>) {
        self.store = Some(store);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Empty-state has nothing but the form, so it always has focus there.
    pub fn focus(&self) -> Focus {
        if self.deck.is_empty() {
            Focus::Form
        } else {
            self.focus
        }
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn focus_card(&mut self) {
        self.focus = Focus::Card;
    }

    pub fn deck(&self) -> &DeckState<R> {
        &self.deck
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn next_card(&mut self) {
        self.dispatch_deck(DeckIntent::Next);
    }

    pub fn prev_card(&mut self) {
        self.dispatch_deck(DeckIntent::Prev);
    }

    pub fn toggle_answer(&mut self) {
        self.dispatch_deck(DeckIntent::ToggleReveal);
    }

    /// Pronounce the current card, if its kind supports it.
    pub fn speak_current(&self) {
        if let Some(text) = self.deck.current().and_then(|card| card.speech_text()) {
            self.speaker.speak(text);
        }
    }

    // ========================================================================
    // Form
    // ========================================================================

    pub fn form_insert(&mut self, text: &str) {
        self.dispatch_form(FormIntent::Insert(text.to_string()));
    }

    pub fn form_backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
    }

    pub fn form_next_field(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn form_prev_field(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    /// Send one create command built from the form.
    ///
    /// Blank required fields block the request; focus moves to the first one.
    /// The form is only cleared once the store reports success.
    pub fn submit_form(&mut self) -> bool {
        if let Some(missing) = first_missing_field::<R>(self.form.values()) {
            let label = R::form_fields()[missing].label;
            tracing::debug!("submit blocked: {} is empty", label);
            self.dispatch_form(FormIntent::FocusField(missing));
            self.status = Some(format!("{} is required", label));
            return false;
        }

        let draft = R::draft(self.form.values(), &self.defaults);
        self.send_command(StoreCommand::Create(draft))
    }

    // ========================================================================
    // Store
    // ========================================================================

    pub fn request_fetch(&mut self) -> bool {
        self.send_command(StoreCommand::FetchAll)
    }

    pub fn on_store_event(&mut self, event: StoreEvent<R>) {
        match event {
            StoreEvent::Fetched(items) => {
                self.status = None;
                self.dispatch_deck(DeckIntent::Loaded { items });
            }
            StoreEvent::Created => {
                self.status = None;
                self.dispatch_form(FormIntent::Clear);
            }
            StoreEvent::FetchFailed(message) | StoreEvent::CreateFailed(message) => {
                self.status = Some(message);
            }
        }
    }

    fn send_command(&mut self, command: StoreCommand<R::Draft>) -> bool {
        let Some(store) = &self.store else {
            return false;
        };

        match store.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("store command not sent: {}", err);
                self.status = Some(format!("Request not sent: {}", err));
                false
            }
        }
    }

    fn dispatch_deck(&mut self, intent: DeckIntent<R>) {
        dispatch_mvi!(self, deck, DeckReducer<R>, intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }
}
