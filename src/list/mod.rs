//! Filterable, ordered collections with derived tallies.

mod item;
mod view;

pub use item::ListItem;
pub use view::{predicate, ListView, Predicate};
