//! Notification list with read/unread filtering and bulk actions.

use crate::list::{ListItem, ListView};
use crate::mvi::{Intent, Reducer, UiState};

pub const EMPTY_MESSAGE: &str = "No notifications to display.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub read: bool,
}

impl Notification {
    pub fn new(id: u32, message: impl Into<String>, read: bool) -> Self {
        Self {
            id,
            message: message.into(),
            read,
        }
    }
}

impl ListItem for Notification {
    type Id = u32;
    type State = bool;

    fn id(&self) -> u32 {
        self.id
    }

    fn state(&self) -> bool {
        self.read
    }

    fn with_state(&self, read: bool) -> Self {
        Self {
            read,
            ..self.clone()
        }
    }
}

pub fn is_unread(n: &Notification) -> bool {
    !n.read
}

pub fn is_read(n: &Notification) -> bool {
    n.read
}

/// Notifications every new session starts with.
pub fn default_notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, "Your order has shipped.", false),
        Notification::new(2, "A new login was detected.", false),
        Notification::new(3, "Your support ticket was updated.", true),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl NotificationFilter {
    pub fn matches(self, n: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => is_unread(n),
            Self::Read => is_read(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationsState {
    pub list: ListView<Notification>,
    pub filter: NotificationFilter,
}

impl UiState for NotificationsState {}

impl NotificationsState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            list: ListView::new(items),
            filter: NotificationFilter::All,
        }
    }

    /// Notifications passing the active filter, in arrival order.
    pub fn filtered(&self) -> Vec<&Notification> {
        let filter = self.filter;
        self.list.visible(|n| filter.matches(n))
    }

    pub fn unread_count(&self) -> usize {
        self.list.count(is_unread)
    }

    /// Label of the unread filter button, e.g. `Unread (2)`.
    pub fn unread_label(&self) -> String {
        format!("Unread ({})", self.unread_count())
    }

    /// "Mark all as read" is disabled when nothing is unread.
    pub fn can_mark_all(&self) -> bool {
        self.unread_count() > 0
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.filtered().is_empty().then_some(EMPTY_MESSAGE)
    }
}

#[derive(Debug, Clone)]
pub enum NotificationIntent {
    SetFilter(NotificationFilter),
    MarkAsRead(u32),
    MarkAllAsRead,
    /// Drop every read notification.
    ClearRead,
}

impl Intent for NotificationIntent {}

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationsState;
    type Intent = NotificationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::SetFilter(filter) => NotificationsState { filter, ..state },
            NotificationIntent::MarkAsRead(id) => NotificationsState {
                list: state.list.set_item_state(&id, true),
                ..state
            },
            NotificationIntent::MarkAllAsRead => NotificationsState {
                list: state.list.set_all_items_state(true),
                ..state
            },
            NotificationIntent::ClearRead => NotificationsState {
                list: state.list.remove_where(is_read),
                ..state
            },
        }
    }
}

/// Owner of the notifications state; the single entry point for intents.
pub struct NotificationCenter {
    state: NotificationsState,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            state: NotificationsState::new(items),
        }
    }

    pub fn state(&self) -> &NotificationsState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: NotificationIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = NotificationsReducer::reduce(state, intent);
    }

    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.dispatch(NotificationIntent::SetFilter(filter));
    }

    pub fn mark_as_read(&mut self, id: u32) {
        self.dispatch(NotificationIntent::MarkAsRead(id));
    }

    pub fn mark_all_as_read(&mut self) {
        self.dispatch(NotificationIntent::MarkAllAsRead);
    }

    pub fn clear_read(&mut self) {
        self.dispatch(NotificationIntent::ClearRead);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(default_notifications())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NotificationsState, intent: NotificationIntent) -> NotificationsState {
        NotificationsReducer::reduce(state, intent)
    }

    #[test]
    fn set_filter_keeps_items() {
        let before = NotificationsState::new(default_notifications());
        let after = reduce(before.clone(), NotificationIntent::SetFilter(NotificationFilter::Read));
        assert_eq!(after.filter, NotificationFilter::Read);
        assert!(after.list.same_items(&before.list));
    }

    #[test]
    fn mark_as_read_replaces_list() {
        let before = NotificationsState::new(default_notifications());
        let after = reduce(before.clone(), NotificationIntent::MarkAsRead(1));
        assert!(!after.list.same_items(&before.list));
        assert_eq!(after.unread_count(), 1);
    }

    #[test]
    fn mark_unknown_id_keeps_list_identity() {
        let before = NotificationsState::new(default_notifications());
        let after = reduce(before.clone(), NotificationIntent::MarkAsRead(99));
        assert!(after.list.same_items(&before.list));
    }

    #[test]
    fn read_filter_shows_only_read() {
        let mut state = NotificationsState::new(default_notifications());
        state.filter = NotificationFilter::Read;
        let ids: Vec<u32> = state.filtered().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn empty_message_when_filter_matches_nothing() {
        let state = reduce(
            NotificationsState::new(default_notifications()),
            NotificationIntent::MarkAllAsRead,
        );
        let state = reduce(state, NotificationIntent::SetFilter(NotificationFilter::Unread));
        assert_eq!(state.empty_message(), Some(EMPTY_MESSAGE));
        assert!(!state.can_mark_all());
    }
}
