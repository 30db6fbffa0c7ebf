use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{NavState, Pane};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;
    /// Text of a committed quantity edit.
    type Effect = Option<String>;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Self::Effect) {
        match intent {
            NavIntent::MoveUp { rows } => {
                let current = state.selected_row();
                let next = if current == 0 {
                    rows.saturating_sub(1)
                } else {
                    current - 1
                };
                (with_selected(state, next), None)
            }
            NavIntent::MoveDown { rows } => {
                let current = state.selected_row();
                let next = if current + 1 >= rows { 0 } else { current + 1 };
                (with_selected(state, next), None)
            }
            NavIntent::SwitchPane => {
                let focus = match state.focus {
                    Pane::Stock => Pane::Cart,
                    Pane::Cart => Pane::Stock,
                };
                (
                    NavState {
                        focus,
                        edit: None,
                        ..state
                    },
                    None,
                )
            }
            NavIntent::BeginEdit { text } => match state.focus {
                Pane::Cart => (
                    NavState {
                        edit: Some(text),
                        ..state
                    },
                    None,
                ),
                Pane::Stock => (state, None),
            },
            NavIntent::Type(ch) => match state.edit {
                Some(mut text) => {
                    text.push(ch);
                    (
                        NavState {
                            edit: Some(text),
                            ..state
                        },
                        None,
                    )
                }
                None => (state, None),
            },
            NavIntent::Backspace => match state.edit {
                Some(mut text) => {
                    text.pop();
                    (
                        NavState {
                            edit: Some(text),
                            ..state
                        },
                        None,
                    )
                }
                None => (state, None),
            },
            NavIntent::CancelEdit => (NavState { edit: None, ..state }, None),
            NavIntent::CommitEdit => {
                let NavState {
                    focus,
                    stock_row,
                    cart_row,
                    edit,
                } = state;
                (
                    NavState {
                        focus,
                        stock_row,
                        cart_row,
                        edit: None,
                    },
                    edit,
                )
            }
            NavIntent::Clamp {
                stock_rows,
                cart_rows,
            } => (
                NavState {
                    stock_row: state.stock_row.min(stock_rows.saturating_sub(1)),
                    cart_row: state.cart_row.min(cart_rows.saturating_sub(1)),
                    ..state
                },
                None,
            ),
        }
    }
}

fn with_selected(state: NavState, row: usize) -> NavState {
    match state.focus {
        Pane::Stock => NavState {
            stock_row: row,
            ..state
        },
        Pane::Cart => NavState {
            cart_row: row,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, intent: NavIntent) -> NavState {
        NavReducer::reduce(state, intent).0
    }

    #[test]
    fn move_down_wraps_to_top() {
        let state = NavState {
            stock_row: 2,
            ..NavState::default()
        };
        assert_eq!(reduce(state, NavIntent::MoveDown { rows: 3 }).stock_row, 0);
    }

    #[test]
    fn move_up_wraps_to_bottom() {
        let state = reduce(NavState::default(), NavIntent::MoveUp { rows: 3 });
        assert_eq!(state.stock_row, 2);
    }

    #[test]
    fn move_in_empty_pane_stays_at_zero() {
        let state = NavState {
            focus: Pane::Cart,
            ..NavState::default()
        };
        assert_eq!(reduce(state.clone(), NavIntent::MoveUp { rows: 0 }).cart_row, 0);
        assert_eq!(reduce(state, NavIntent::MoveDown { rows: 0 }).cart_row, 0);
    }

    #[test]
    fn begin_edit_ignored_on_stock_pane() {
        let state = reduce(
            NavState::default(),
            NavIntent::BeginEdit {
                text: "1".to_string(),
            },
        );
        assert!(!state.is_editing());
    }

    #[test]
    fn typing_then_commit_returns_text() {
        let state = NavState {
            focus: Pane::Cart,
            ..NavState::default()
        };
        let state = reduce(
            state,
            NavIntent::BeginEdit {
                text: "1".to_string(),
            },
        );
        let state = reduce(state, NavIntent::Type('2'));
        let state = reduce(state, NavIntent::Type('x'));
        let state = reduce(state, NavIntent::Backspace);
        let (state, committed) = NavReducer::reduce(state, NavIntent::CommitEdit);
        assert_eq!(committed.as_deref(), Some("12"));
        assert!(!state.is_editing());
    }

    #[test]
    fn switch_pane_drops_edit() {
        let state = NavState {
            focus: Pane::Cart,
            edit: Some("3".to_string()),
            ..NavState::default()
        };
        let state = reduce(state, NavIntent::SwitchPane);
        assert_eq!(state.focus, Pane::Stock);
        assert!(!state.is_editing());
    }

    #[test]
    fn clamp_pulls_rows_into_range() {
        let state = NavState {
            stock_row: 5,
            cart_row: 4,
            ..NavState::default()
        };
        let state = reduce(
            state,
            NavIntent::Clamp {
                stock_rows: 3,
                cart_rows: 0,
            },
        );
        assert_eq!(state.stock_row, 2);
        assert_eq!(state.cart_row, 0);
    }
}
