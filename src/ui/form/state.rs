use crate::ui::mvi::UiState;

/// Pending values of the add-form, one per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(super) values: Vec<String>,
    pub(super) focused: usize,
}

impl UiState for FormState {}

impl FormState {
    pub fn new(field_count: usize) -> Self {
        Self {
            values: vec![String::new(); field_count],
            focused: 0,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).map(String::as_str)
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|value| value.is_empty())
    }
}
