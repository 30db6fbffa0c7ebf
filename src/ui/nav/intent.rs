use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Move the selection in the focused pane. `rows` is that pane's length.
    MoveUp { rows: usize },
    MoveDown { rows: usize },
    SwitchPane,
    /// Start editing the selected cart row's quantity, prefilled with `text`.
    BeginEdit { text: String },
    Type(char),
    Backspace,
    CancelEdit,
    /// Finish editing. The reducer hands the edited text back as its effect.
    CommitEdit,
    /// Pull selections back inside the panes after their lengths changed.
    Clamp { stock_rows: usize, cart_rows: usize },
}

impl Intent for NavIntent {}
