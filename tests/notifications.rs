use proptest::prelude::*;
use viewstate::screens::notifications::{
    default_notifications, Notification, NotificationCenter, NotificationFilter, NotificationIntent,
    EMPTY_MESSAGE,
};

fn ids(center: &NotificationCenter) -> Vec<u32> {
    center.state().filtered().iter().map(|n| n.id).collect()
}

#[test]
fn mark_one_then_filter_and_clear() {
    let mut center = NotificationCenter::default();
    assert_eq!(center.state().unread_label(), "Unread (2)");

    center.mark_as_read(1);
    assert_eq!(center.state().unread_count(), 1);

    center.set_filter(NotificationFilter::Read);
    assert_eq!(ids(&center), vec![1, 3]);

    center.set_filter(NotificationFilter::Unread);
    assert_eq!(ids(&center), vec![2]);

    center.clear_read();
    center.set_filter(NotificationFilter::All);
    assert_eq!(ids(&center), vec![2]);
    assert_eq!(center.state().list.len(), 1);
}

#[test]
fn mark_all_disables_the_action() {
    let mut center = NotificationCenter::default();
    assert!(center.state().can_mark_all());

    center.mark_all_as_read();
    assert_eq!(center.state().unread_count(), 0);
    assert_eq!(center.state().unread_label(), "Unread (0)");
    assert!(!center.state().can_mark_all());

    center.set_filter(NotificationFilter::Unread);
    assert_eq!(center.state().empty_message(), Some(EMPTY_MESSAGE));
}

#[test]
fn unknown_id_changes_nothing() {
    let mut center = NotificationCenter::default();
    let before = center.state().clone();
    center.mark_as_read(42);
    assert_eq!(center.state(), &before);
    assert!(center.state().list.same_items(&before.list));
}

#[test]
fn clearing_everything_shows_empty_message() {
    let mut center = NotificationCenter::new(vec![Notification::new(1, "Only one", true)]);
    assert_eq!(center.state().empty_message(), None);
    center.clear_read();
    assert!(center.state().list.is_empty());
    assert_eq!(center.state().empty_message(), Some(EMPTY_MESSAGE));
}

fn arb_intent() -> impl Strategy<Value = NotificationIntent> {
    prop_oneof![
        (0u32..5).prop_map(NotificationIntent::MarkAsRead),
        Just(NotificationIntent::MarkAllAsRead),
        Just(NotificationIntent::ClearRead),
        prop_oneof![
            Just(NotificationFilter::All),
            Just(NotificationFilter::Unread),
            Just(NotificationFilter::Read),
        ]
        .prop_map(NotificationIntent::SetFilter),
    ]
}

proptest! {
    #[test]
    fn unread_count_matches_unread_filter(intents in prop::collection::vec(arb_intent(), 0..20)) {
        let mut center = NotificationCenter::default();
        for intent in intents {
            center.dispatch(intent);

            let state = center.state();
            let mut unread = state.clone();
            unread.filter = NotificationFilter::Unread;
            prop_assert_eq!(state.unread_count(), unread.filtered().len());
            prop_assert!(state.list.len() <= default_notifications().len());
        }
    }

    #[test]
    fn filtered_view_preserves_order(intents in prop::collection::vec(arb_intent(), 0..20)) {
        let mut center = NotificationCenter::default();
        for intent in intents {
            center.dispatch(intent);
        }
        let shown = ids(&center);
        let mut sorted = shown.clone();
        sorted.sort_unstable();
        prop_assert_eq!(shown, sorted);
    }
}
