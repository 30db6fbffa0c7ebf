use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Stock,
    Cart,
}

/// Cursor and edit-buffer state of the terminal front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub focus: Pane,
    pub stock_row: usize,
    pub cart_row: usize,
    /// Quantity text being typed into the selected cart row, if editing.
    pub edit: Option<String>,
}

impl UiState for NavState {}

impl NavState {
    pub fn selected_row(&self) -> usize {
        match self.focus {
            Pane::Stock => self.stock_row,
            Pane::Cart => self.cart_row,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }
}
