//! Selection events forwarded from the view.

use serde::Deserialize;
use serde::Serialize;

use crate::model::PageNumber;

/// A user interaction that mutates the selection.
///
/// These are the only two shapes the view sends into the tracker. They
/// serialize with a `type` tag, for example
/// `{"type":"toggleOne","page":1,"id":7,"selected":true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectionEvent<Id> {
    /// A single row checkbox changed.
    ToggleOne {
        page: PageNumber,
        id: Id,
        selected: bool,
    },
    /// The header checkbox changed. `ids` is the loaded page's record set.
    ToggleAllOnPage {
        page: PageNumber,
        ids: Vec<Id>,
        selected: bool,
    },
}

impl<Id> SelectionEvent<Id> {
    /// Returns the page this event applies to.
    pub fn page(&self) -> PageNumber {
        match self {
            Self::ToggleOne { page, .. } | Self::ToggleAllOnPage { page, .. } => *page,
        }
    }

    /// Returns whether the event selects or deselects.
    pub fn selected(&self) -> bool {
        match self {
            Self::ToggleOne { selected, .. } | Self::ToggleAllOnPage { selected, .. } => *selected,
        }
    }
}
