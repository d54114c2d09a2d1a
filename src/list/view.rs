//! Filterable ordered collection with derived counts.

use std::fmt;
use std::sync::Arc;

use super::item::ListItem;

/// Shared item predicate used for filters and tallies.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Wrap a closure as a [`Predicate`].
pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Ordered items plus an optional view filter.
///
/// Mutators never touch the current storage: they return a new view with
/// fresh backing storage, so [`same_items`](Self::same_items) tells callers
/// whether anything changed. Counts are computed from the items on every
/// call and never stored.
pub struct ListView<T> {
    items: Arc<[T]>,
    filter: Option<Predicate<T>>,
}

impl<T> ListView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
            filter: None,
        }
    }

    /// All items in insertion order, ignoring the filter.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Same items, seen through `filter`.
    pub fn with_filter(&self, filter: Predicate<T>) -> Self {
        Self {
            items: Arc::clone(&self.items),
            filter: Some(filter),
        }
    }

    pub fn without_filter(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            filter: None,
        }
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Items passing the view filter, in insertion order.
    pub fn visible_items(&self) -> Vec<&T> {
        match &self.filter {
            Some(filter) => self.visible(|item| filter(item)),
            None => self.items.iter().collect(),
        }
    }

    /// Items passing `pred`, in insertion order.
    pub fn visible(&self, pred: impl Fn(&T) -> bool) -> Vec<&T> {
        self.items.iter().filter(|item| pred(item)).collect()
    }

    /// Number of items passing `pred`; always `visible(pred).len()`.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.items.iter().filter(|item| pred(item)).count()
    }

    /// `true` when both views share backing storage, i.e. no mutation
    /// happened between them.
    pub fn same_items(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    fn replace_items(&self, items: Arc<[T]>) -> Self {
        Self {
            items,
            filter: self.filter.clone(),
        }
    }
}

impl<T: ListItem> ListView<T> {
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    /// Replace the state of the item with `id`. An unknown id returns a view
    /// over the same storage.
    pub fn set_item_state(&self, id: &T::Id, state: T::State) -> Self {
        if self.find(id).is_none() {
            tracing::debug!(id = ?id, "Ignoring state change for unknown item");
            return self.clone();
        }

        self.replace_items(
            self.items
                .iter()
                .map(|item| {
                    if &item.id() == id {
                        item.with_state(state.clone())
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        )
    }

    pub fn set_all_items_state(&self, state: T::State) -> Self {
        self.replace_items(
            self.items
                .iter()
                .map(|item| item.with_state(state.clone()))
                .collect(),
        )
    }
}

impl<T: Clone> ListView<T> {
    /// View without the items matching `pred`. Keeps the filter.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> Self {
        self.replace_items(
            self.items
                .iter()
                .filter(|item: &&T| !pred(*item))
                .cloned()
                .collect(),
        )
    }
}

impl<T> Clone for ListView<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            filter: self.filter.clone(),
        }
    }
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: PartialEq> PartialEq for ListView<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_filter = match (&self.filter, &other.filter) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_filter && self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("items", &self.items)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        id: u32,
        done: bool,
    }

    impl ListItem for Task {
        type Id = u32;
        type State = bool;

        fn id(&self) -> u32 {
            self.id
        }

        fn state(&self) -> bool {
            self.done
        }

        fn with_state(&self, done: bool) -> Self {
            Self { done, ..self.clone() }
        }
    }

    fn tasks() -> ListView<Task> {
        ListView::new(vec![
            Task { id: 1, done: false },
            Task { id: 2, done: true },
            Task { id: 3, done: false },
        ])
    }

    fn open(task: &Task) -> bool {
        !task.done
    }

    #[test]
    fn filter_preserves_order_and_storage() {
        let list = tasks();
        let open_view = list.with_filter(predicate(open));
        let ids: Vec<u32> = open_view.visible_items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(open_view.len(), 3);
        assert!(open_view.same_items(&list));
    }

    #[test]
    fn unfiltered_view_shows_everything() {
        assert_eq!(tasks().visible_items().len(), 3);
    }

    #[test]
    fn count_matches_visible() {
        let list = tasks();
        assert_eq!(list.count(open), 2);
        assert_eq!(list.count(open), list.visible(open).len());
    }

    #[test]
    fn set_item_state_replaces_storage() {
        let list = tasks();
        let updated = list.set_item_state(&1, true);
        assert!(!updated.same_items(&list));
        assert_eq!(updated.count(open), 1);
        assert_eq!(list.count(open), 2);
    }

    #[test]
    fn unknown_id_is_noop() {
        let list = tasks();
        let updated = list.set_item_state(&42, true);
        assert!(updated.same_items(&list));
        assert_eq!(updated, list);
    }

    #[test]
    fn set_all_items_state() {
        let updated = tasks().set_all_items_state(true);
        assert_eq!(updated.count(open), 0);
        assert_eq!(updated.len(), 3);
    }

    #[test]
    fn remove_where_keeps_order_and_filter() {
        let list = tasks().with_filter(predicate(open));
        let trimmed = list.remove_where(|t| t.id == 1);
        assert!(trimmed.has_filter());
        let ids: Vec<u32> = trimmed.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn find_by_id() {
        let list = tasks();
        assert_eq!(list.find(&2).map(|t| t.state()), Some(true));
        assert!(list.find(&9).is_none());
    }

    #[derive(Debug, Clone)]
    enum Op {
        SetState(u32, bool),
        SetAll(bool),
        RemoveDone,
        RemoveId(u32),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        // Ids 4 and up are never in the list.
        prop_oneof![
            (0u32..6, any::<bool>()).prop_map(|(id, done)| Op::SetState(id, done)),
            any::<bool>().prop_map(Op::SetAll),
            Just(Op::RemoveDone),
            (0u32..6).prop_map(Op::RemoveId),
        ]
    }

    fn done(task: &Task) -> bool {
        task.done
    }

    proptest! {
        #[test]
        fn count_matches_filtered_view(ops in prop::collection::vec(arb_op(), 0..24)) {
            let mut list = tasks();
            for op in ops {
                let before = list.clone();
                list = match op {
                    Op::SetState(id, state) => {
                        let next = list.set_item_state(&id, state);
                        if before.find(&id).is_none() {
                            prop_assert!(next.same_items(&before));
                        }
                        next
                    }
                    Op::SetAll(state) => list.set_all_items_state(state),
                    Op::RemoveDone => list.remove_where(done),
                    Op::RemoveId(id) => list.remove_where(|t| t.id == id),
                };

                let open_view = list.with_filter(predicate(open));
                let done_view = list.with_filter(predicate(done));
                prop_assert_eq!(list.count(open), open_view.visible_items().len());
                prop_assert_eq!(list.count(done), done_view.visible_items().len());
                prop_assert_eq!(list.count(open) + list.count(done), list.len());
            }
        }
    }
}
