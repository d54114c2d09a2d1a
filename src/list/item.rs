use std::fmt::Debug;

/// An entry of a [`ListView`](super::ListView) with an identity and a
/// replaceable state field (read/unread, done/open, ...).
pub trait ListItem: Clone {
    type Id: PartialEq + Debug;
    type State: Clone + PartialEq;

    fn id(&self) -> Self::Id;

    fn state(&self) -> Self::State;

    /// Copy of this item with `state` swapped in.
    fn with_state(&self, state: Self::State) -> Self;
}
