//! Typed session store.
//!
//! Replaces the usual ambient global store with an explicit value: pure
//! reducers over [`AppState`], applied one at a time through
//! [`Store::dispatch`]. A mutation is fully applied before the next one
//! is observed.

use api_types::group::GroupSummary;

/// The authenticated user for this session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub user_id: i64,
    pub name: String,
}

/// A user-defined label grouping non-shared expenses.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Which top-level view is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Context {
    Friends,
    Groups,
    Tags,
    Activity,
}

/// Everything the UI shares across views.
///
/// The `expense_created*` flags implement the refetch contract: a
/// successful mutation raises a flag, the owning view refetches its
/// collection wholesale and lowers it again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub user: Option<SessionUser>,
    pub selected_group: Option<GroupSummary>,
    pub selected_tag: Option<Tag>,
    pub active_context: Option<Context>,
    pub expense_created: bool,
    pub expense_created_for_friend: bool,
    pub expense_created_for_tag: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetUser(SessionUser),
    ClearUser,
    SetSelectedGroup(GroupSummary),
    ClearSelectedGroup,
    SetExpenseCreated(bool),
    ExpenseCreatedForFriend(bool),
    SetSelectedTag(Tag),
    ClearSelectedTag,
    SetExpenseCreatedForTag(bool),
    SetActiveContext(Context),
}

/// Applies one action to the state. Pure apart from the `&mut`; each
/// action touches exactly one slice.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::SetUser(user) => state.user = Some(user),
        Action::ClearUser => state.user = None,
        Action::SetSelectedGroup(group) => state.selected_group = Some(group),
        Action::ClearSelectedGroup => state.selected_group = None,
        Action::SetExpenseCreated(flag) => state.expense_created = flag,
        Action::ExpenseCreatedForFriend(flag) => state.expense_created_for_friend = flag,
        Action::SetSelectedTag(tag) => state.selected_tag = Some(tag),
        Action::ClearSelectedTag => state.selected_tag = None,
        Action::SetExpenseCreatedForTag(flag) => state.expense_created_for_tag = flag,
        Action::SetActiveContext(context) => state.active_context = Some(context),
    }
}

/// Owning wrapper for callers that want serialized dispatch instead of
/// reducing by hand.
#[derive(Clone, Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        reduce(&mut self.state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            user_id: 42,
            name: "You".to_string(),
        }
    }

    #[test]
    fn actions_touch_only_their_slice() {
        let mut store = Store::new();
        store.dispatch(Action::SetUser(user()));
        store.dispatch(Action::SetActiveContext(Context::Friends));
        store.dispatch(Action::ExpenseCreatedForFriend(true));

        let state = store.state();
        assert_eq!(state.user.as_ref().map(|u| u.user_id), Some(42));
        assert_eq!(state.active_context, Some(Context::Friends));
        assert!(state.expense_created_for_friend);
        assert!(!state.expense_created);
        assert!(state.selected_group.is_none());
    }

    #[test]
    fn clear_actions_reset_their_slice() {
        let mut store = Store::new();
        store.dispatch(Action::SetUser(user()));
        store.dispatch(Action::SetSelectedTag(Tag {
            id: 1,
            name: "food".to_string(),
        }));
        store.dispatch(Action::ClearSelectedTag);
        store.dispatch(Action::ClearUser);

        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn refetch_flag_round_trip() {
        let mut state = AppState::default();
        reduce(&mut state, Action::SetExpenseCreated(true));
        assert!(state.expense_created);
        reduce(&mut state, Action::SetExpenseCreated(false));
        assert!(!state.expense_created);
    }
}
