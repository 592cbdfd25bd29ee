//! Host notification events.
//!
//! The collection queues one event per successful mutation; hosts drain the
//! queue with [`super::TabCollection::take_events`] each frame. Events are
//! fire-and-forget: nothing is returned to the widget and the host is never
//! a synchronous collaborator in a transition.

use super::{Tab, TabId};

/// Notifications emitted by the collection after successful mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum PageNavEvent {
    /// The active tab changed (or a tab was re-selected).
    Selected(TabId),
    /// A draft committed at the end of the strip: structural growth.
    PageAddRequested,
    /// The tab order changed; carries the full new id sequence.
    Reordered(Vec<TabId>),
    /// A draft committed into a real tab. `insert_index` is `None` for a
    /// trailing append and `Some(i)` for an interior insertion.
    TabAdded {
        /// The committed tab.
        tab: Tab,
        /// Position for interior insertions, `None` when appended at the end.
        insert_index: Option<usize>,
    },
    /// A tab was removed.
    TabDeleted(TabId),
    /// A rename session committed a new label.
    TabRenamed {
        /// The renamed tab.
        id: TabId,
        /// The new label, already trimmed.
        name: String,
    },
    /// A tab was duplicated; carries the source tab's id.
    Duplicated(TabId),
    /// A tab was moved to the front of the strip.
    SetFirst(TabId),
}
