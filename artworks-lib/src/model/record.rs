//! Record traits shared by the store, the selection tracker and the view.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for values that identify a record within the remote collection.
///
/// Identifiers are opaque to this crate. They only need to be comparable,
/// hashable and cheap enough to clone into a selection set.
pub trait RecordId: Clone + Eq + Hash + Ord + Debug + Send + Sync + 'static {}

impl<T> RecordId for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync + 'static {}

/// A record that can be shown as one row of the browser table.
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Identifier type, unique within a page.
    type Id: RecordId;

    /// Column headers, in display order.
    fn columns() -> &'static [&'static str];

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the display text for each column, in the order of [`columns`](Self::columns).
    fn cells(&self) -> Vec<String>;
}
