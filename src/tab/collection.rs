//! Tab collection controller.
//!
//! [`TabCollection`] is the only owner and mutator of the canonical tab
//! sequence and the active-tab id. Every mutating operation computes the
//! entire new sequence synchronously, queues the matching
//! [`PageNavEvent`]s, and returns; partial states are never observable.
//! Invalid operations are silent no-ops logged at debug level.

use super::{PageNavEvent, PageSeed, Tab, TabId};

/// How the current edit session started. Determines what `cancel_edit` and
/// `commit_edit` do with the tab.
#[derive(Debug, Clone)]
enum EditOrigin {
    /// Newly created tab awaiting its first name; discarded on cancel.
    Draft,
    /// Rename of a pre-existing tab; the prior label is restored on cancel.
    Rename { prior_label: String },
}

/// Owns the ordered tab sequence, the active-tab id, and the pending host
/// notifications.
pub struct TabCollection {
    /// All tabs, in strip order.
    tabs: Vec<Tab>,
    /// Currently active tab id.
    active_tab_id: Option<TabId>,
    /// Counter for generating unique tab ids.
    next_tab_id: TabId,
    /// Origin of the in-flight edit session, if any.
    edit_origin: Option<EditOrigin>,
    /// Notifications queued for the host, drained by `take_events`.
    pending_events: Vec<PageNavEvent>,
}

impl TabCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            next_tab_id: 1,
            edit_origin: None,
            pending_events: Vec::new(),
        }
    }

    /// Create a collection from host-supplied pages. The first page becomes
    /// active. Seeding queues no events.
    pub fn from_pages(pages: impl IntoIterator<Item = PageSeed>) -> Self {
        let mut collection = Self::new();
        for seed in pages {
            let id = collection.alloc_id();
            let mut tab = Tab::new(id, seed.label, seed.icon);
            tab.completed = seed.completed;
            collection.tabs.push(tab);
        }
        collection.active_tab_id = collection.tabs.first().map(|t| t.id);
        collection
    }

    fn alloc_id(&mut self) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    /// Drain the queued host notifications.
    pub fn take_events(&mut self) -> Vec<PageNavEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// All tabs as a slice, in strip order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get a tab by id.
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// The active tab id.
    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    /// The active tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.and_then(|id| self.get_tab(id))
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the collection holds no tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Whether there is more than one tab.
    pub fn has_multiple_tabs(&self) -> bool {
        self.tabs.len() > 1
    }

    /// The tab currently in edit mode, if any. At most one exists.
    pub fn editing_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.editing)
    }

    /// Ids of all tabs not in edit mode, in strip order. These are the tabs
    /// eligible to participate in a drag reorder.
    pub fn non_editing_ids(&self) -> Vec<TabId> {
        self.tabs
            .iter()
            .filter(|t| !t.editing)
            .map(|t| t.id)
            .collect()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Make a tab active and queue `Selected`. No-op if the tab is absent or
    /// in edit mode. Does not mutate the sequence; selecting the already
    /// active tab leaves state identical.
    pub fn select_tab(&mut self, id: TabId) {
        match self.get_tab(id) {
            Some(tab) if tab.editing => {
                log::debug!("Ignoring selection of editing tab {id}");
            }
            Some(_) => {
                self.active_tab_id = Some(id);
                self.pending_events.push(PageNavEvent::Selected(id));
                log::debug!("Selected tab {id}");
            }
            None => log::debug!("Ignoring selection of unknown tab {id}"),
        }
    }

    /// Host confirmation of the active tab (input prop path). Mirrors the
    /// value without queuing events; ignored for absent or editing tabs.
    pub fn set_active(&mut self, id: TabId) {
        if self.get_tab(id).is_some_and(|t| !t.editing) {
            self.active_tab_id = Some(id);
        }
    }

    // ------------------------------------------------------------------
    // Drafts and inline edit
    // ------------------------------------------------------------------

    /// Append a draft tab at the end of the strip and make it active.
    /// Returns the draft id, or `None` if an edit session is already open
    /// (at most one draft/edit at a time).
    pub fn append_draft(&mut self, icon: Option<String>) -> Option<TabId> {
        if self.editing_tab().is_some() {
            log::debug!("Ignoring append_draft: an edit session is already open");
            return None;
        }
        let id = self.alloc_id();
        self.tabs.push(Tab::draft(id, icon));
        self.active_tab_id = Some(id);
        self.edit_origin = Some(EditOrigin::Draft);
        log::info!("Appended draft tab {id} (total: {})", self.tabs.len());
        Some(id)
    }

    /// Insert a draft tab immediately after `index` and make it active.
    /// Same single-edit constraint as [`Self::append_draft`].
    pub fn insert_draft_after(&mut self, index: usize, icon: Option<String>) -> Option<TabId> {
        if self.editing_tab().is_some() {
            log::debug!("Ignoring insert_draft_after: an edit session is already open");
            return None;
        }
        let id = self.alloc_id();
        let at = (index + 1).min(self.tabs.len());
        self.tabs.insert(at, Tab::draft(id, icon));
        self.active_tab_id = Some(id);
        self.edit_origin = Some(EditOrigin::Draft);
        log::info!("Inserted draft tab {id} at index {at}");
        Some(id)
    }

    /// Begin renaming a tab inline. No-op if another edit session is open or
    /// the tab is absent. The prior label is kept for cancel-to-revert.
    pub fn rename_start(&mut self, id: TabId) -> bool {
        if self.editing_tab().is_some() {
            log::debug!("Ignoring rename_start({id}): an edit session is already open");
            return false;
        }
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            log::debug!("Ignoring rename_start for unknown tab {id}");
            return false;
        };
        self.edit_origin = Some(EditOrigin::Rename {
            prior_label: tab.label.clone(),
        });
        tab.editing = true;
        log::info!("Renaming tab {id}");
        true
    }

    /// Commit the in-flight edit session with `raw_name`. The name is
    /// trimmed; an empty result behaves as [`Self::cancel_edit`]. Draft
    /// commits queue `TabAdded` (plus `PageAddRequested` when the tab ends up
    /// last); rename commits queue `TabRenamed`. Both queue `Selected`.
    pub fn commit_edit(&mut self, id: TabId, raw_name: &str) {
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            self.cancel_edit(id);
            return;
        }
        let Some(idx) = self.tabs.iter().position(|t| t.id == id && t.editing) else {
            log::debug!("Ignoring commit_edit for tab {id}: not editing");
            return;
        };

        self.tabs[idx].label = trimmed.to_string();
        self.tabs[idx].editing = false;

        match self.edit_origin.take() {
            Some(EditOrigin::Rename { .. }) => {
                self.pending_events.push(PageNavEvent::TabRenamed {
                    id,
                    name: trimmed.to_string(),
                });
                log::info!("Renamed tab {id} to {trimmed:?}");
            }
            // A draft (or an edit adopted from seeded state) became real.
            _ => {
                let at_end = idx == self.tabs.len() - 1;
                self.pending_events.push(PageNavEvent::TabAdded {
                    tab: self.tabs[idx].clone(),
                    insert_index: (!at_end).then_some(idx),
                });
                if at_end {
                    self.pending_events.push(PageNavEvent::PageAddRequested);
                }
                log::info!("Committed draft tab {id} as {trimmed:?} (total: {})", self.tabs.len());
            }
        }

        self.active_tab_id = Some(id);
        self.pending_events.push(PageNavEvent::Selected(id));
    }

    /// Cancel the in-flight edit session. Drafts are discarded; a rename
    /// reverts to the prior label. If a discarded draft was active, the new
    /// active tab is the first remaining tab.
    pub fn cancel_edit(&mut self, id: TabId) {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id && t.editing) else {
            log::debug!("Ignoring cancel_edit for tab {id}: not editing");
            return;
        };

        match self.edit_origin.take() {
            Some(EditOrigin::Rename { prior_label }) => {
                self.tabs[idx].label = prior_label;
                self.tabs[idx].editing = false;
                log::info!("Reverted rename of tab {id}");
            }
            _ => {
                self.tabs.remove(idx);
                log::info!("Discarded draft tab {id} (total: {})", self.tabs.len());
                if self.active_tab_id == Some(id) {
                    self.active_tab_id = self.tabs.first().map(|t| t.id);
                    if let Some(new_active) = self.active_tab_id {
                        self.pending_events.push(PageNavEvent::Selected(new_active));
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Order changes
    // ------------------------------------------------------------------

    /// Replace the order of the non-editing tabs. `new_order` must be a
    /// permutation of the current non-editing ids or the call is rejected;
    /// the editing tab (if any) keeps its absolute position. This is the
    /// only legal order change outside insert/delete and `set_first`.
    pub fn reorder(&mut self, new_order: &[TabId]) -> bool {
        let current = self.non_editing_ids();
        let mut expected = current.clone();
        let mut proposed = new_order.to_vec();
        expected.sort_unstable();
        proposed.sort_unstable();
        if expected != proposed {
            log::debug!("Rejecting reorder: {new_order:?} is not a permutation of {current:?}");
            return false;
        }

        let mut remaining = std::mem::take(&mut self.tabs);
        let editing_pos = remaining.iter().position(|t| t.editing);
        let editing_tab = editing_pos.map(|i| remaining.remove(i));

        let mut reordered: Vec<Tab> = new_order
            .iter()
            .map(|id| {
                let pos = remaining
                    .iter()
                    .position(|t| t.id == *id)
                    .expect("validated permutation");
                remaining.remove(pos)
            })
            .collect();

        if let (Some(pos), Some(tab)) = (editing_pos, editing_tab) {
            reordered.insert(pos.min(reordered.len()), tab);
        }
        self.tabs = reordered;

        let full_order: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();
        log::info!("Reordered tabs: {full_order:?}");
        self.pending_events.push(PageNavEvent::Reordered(full_order));
        true
    }

    /// Relocate one non-editing tab to `target_index` within the non-editing
    /// sequence (drag-and-drop entry point). A single-element move: tabs
    /// between source and target shift by one. Returns false when the tab is
    /// unknown, editing, or already at the target.
    pub fn move_tab_to_index(&mut self, id: TabId, target_index: usize) -> bool {
        let mut order = self.non_editing_ids();
        let Some(src) = order.iter().position(|t| *t == id) else {
            log::debug!("Ignoring move of tab {id}: not a sortable tab");
            return false;
        };
        let clamped = target_index.min(order.len().saturating_sub(1));
        if clamped == src {
            return false;
        }
        let moved = order.remove(src);
        order.insert(clamped, moved);
        log::debug!("Moving tab {id} from index {src} to {clamped}");
        self.reorder(&order)
    }

    /// Move the active tab one slot left (keyboard reorder, no wraparound).
    pub fn move_active_tab_left(&mut self) -> bool {
        self.move_active_by(-1)
    }

    /// Move the active tab one slot right (keyboard reorder, no wraparound).
    pub fn move_active_tab_right(&mut self) -> bool {
        self.move_active_by(1)
    }

    fn move_active_by(&mut self, direction: isize) -> bool {
        let Some(id) = self.active_tab_id else {
            return false;
        };
        let order = self.non_editing_ids();
        let Some(src) = order.iter().position(|t| *t == id) else {
            return false;
        };
        let Some(target) = src.checked_add_signed(direction).filter(|t| *t < order.len()) else {
            return false;
        };
        self.move_tab_to_index(id, target)
    }

    /// Move a tab to the front of the strip, preserving the relative order
    /// of all others. No-op if already first, editing, or absent.
    pub fn set_first(&mut self, id: TabId) -> bool {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            log::debug!("Ignoring set_first for unknown tab {id}");
            return false;
        };
        if idx == 0 || self.tabs[idx].editing {
            return false;
        }
        let tab = self.tabs.remove(idx);
        self.tabs.insert(0, tab);
        log::info!("Set tab {id} as first page");
        self.pending_events.push(PageNavEvent::SetFirst(id));
        true
    }

    // ------------------------------------------------------------------
    // Duplicate / delete
    // ------------------------------------------------------------------

    /// Duplicate a tab: fresh id, label `"<label> Copy"`, same icon,
    /// `completed` reset, inserted immediately after the source, active.
    pub fn duplicate(&mut self, id: TabId) -> Option<TabId> {
        let idx = self.tabs.iter().position(|t| t.id == id)?;
        if self.tabs[idx].editing {
            log::debug!("Ignoring duplicate of editing tab {id}");
            return None;
        }
        let label = format!("{} Copy", self.tabs[idx].label);
        let icon = self.tabs[idx].icon.clone();

        let new_id = self.alloc_id();
        self.tabs.insert(idx + 1, Tab::new(new_id, label, icon));
        self.active_tab_id = Some(new_id);

        log::info!("Duplicated tab {id} as {new_id}");
        self.pending_events.push(PageNavEvent::Duplicated(id));
        self.pending_events.push(PageNavEvent::Selected(new_id));
        Some(new_id)
    }

    /// Delete a tab. Refused when it is the last remaining tab: the
    /// collection never becomes empty. If the deleted tab was active, the
    /// new active tab is the first tab of the resulting sequence.
    pub fn delete(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            log::debug!("Refusing to delete the last remaining tab");
            return false;
        }
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            log::debug!("Ignoring delete of unknown tab {id}");
            return false;
        };

        let removed = self.tabs.remove(idx);
        if removed.editing {
            self.edit_origin = None;
        }
        log::info!("Deleted tab {id} (total: {})", self.tabs.len());
        self.pending_events.push(PageNavEvent::TabDeleted(id));

        if self.active_tab_id == Some(id) {
            self.active_tab_id = self.tabs.first().map(|t| t.id);
            if let Some(new_active) = self.active_tab_id {
                self.pending_events.push(PageNavEvent::Selected(new_active));
            }
        }
        true
    }
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collection seeded with one committed tab per label.
    fn collection_with(labels: &[&str]) -> TabCollection {
        TabCollection::from_pages(labels.iter().map(|l| PageSeed::new(*l)))
    }

    fn ids(collection: &TabCollection) -> Vec<TabId> {
        collection.tabs().iter().map(|t| t.id).collect()
    }

    #[test]
    fn from_pages_activates_first() {
        let mut collection = collection_with(&["A", "B", "C"]);
        assert_eq!(collection.tab_count(), 3);
        assert_eq!(collection.active_tab_id(), Some(1));
        assert!(collection.take_events().is_empty(), "seeding queues no events");
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut collection = collection_with(&["A", "B"]);
        collection.duplicate(1);
        collection.append_draft(None);
        let mut seen = ids(&collection);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), collection.tab_count());
    }

    #[test]
    fn move_tab_to_index_forward() {
        let mut collection = collection_with(&["A", "B", "C", "D"]);
        assert!(collection.move_tab_to_index(1, 2));
        assert_eq!(ids(&collection), vec![2, 3, 1, 4]);
    }

    #[test]
    fn move_tab_to_index_backward() {
        let mut collection = collection_with(&["A", "B", "C", "D"]);
        assert!(collection.move_tab_to_index(3, 0));
        assert_eq!(ids(&collection), vec![3, 1, 2, 4]);
    }

    #[test]
    fn move_tab_to_index_same_position() {
        let mut collection = collection_with(&["A", "B", "C"]);
        assert!(!collection.move_tab_to_index(2, 1));
        assert_eq!(ids(&collection), vec![1, 2, 3]);
    }

    #[test]
    fn move_tab_to_index_out_of_bounds_clamped() {
        let mut collection = collection_with(&["A", "B", "C"]);
        assert!(collection.move_tab_to_index(1, 100));
        assert_eq!(ids(&collection), vec![2, 3, 1]);
    }

    #[test]
    fn move_tab_to_index_invalid_id() {
        let mut collection = collection_with(&["A", "B", "C"]);
        assert!(!collection.move_tab_to_index(99, 0));
        assert_eq!(ids(&collection), vec![1, 2, 3]);
    }

    #[test]
    fn move_active_tab_does_not_wrap() {
        let mut collection = collection_with(&["A", "B"]);
        collection.select_tab(1);
        assert!(!collection.move_active_tab_left());
        collection.select_tab(2);
        assert!(!collection.move_active_tab_right());
        assert_eq!(ids(&collection), vec![1, 2]);
    }

    #[test]
    fn reorder_rejects_non_permutation() {
        let mut collection = collection_with(&["A", "B", "C"]);
        assert!(!collection.reorder(&[1, 2]));
        assert!(!collection.reorder(&[1, 2, 2]));
        assert!(!collection.reorder(&[1, 2, 99]));
        assert_eq!(ids(&collection), vec![1, 2, 3]);
    }

    #[test]
    fn reorder_keeps_editing_tab_in_place() {
        let mut collection = collection_with(&["A", "B", "C"]);
        let draft = collection.insert_draft_after(0, None).unwrap();
        // [A, draft, B, C]; sortable ids are [1, 2, 3]
        assert!(collection.reorder(&[3, 2, 1]));
        let order = ids(&collection);
        assert_eq!(order[1], draft, "draft keeps absolute position 1");
        assert_eq!(order, vec![3, draft, 2, 1]);
    }

    #[test]
    fn delete_refuses_last_tab() {
        let mut collection = collection_with(&["Only"]);
        assert!(!collection.delete(1));
        assert_eq!(collection.tab_count(), 1);
    }

    #[test]
    fn duplicate_resets_completed() {
        let mut collection =
            TabCollection::from_pages([PageSeed::new("Done").completed(true), PageSeed::new("B")]);
        let new_id = collection.duplicate(1).unwrap();
        let copy = collection.get_tab(new_id).unwrap();
        assert_eq!(copy.label, "Done Copy");
        assert!(!copy.completed);
        assert_eq!(collection.active_tab_id(), Some(new_id));
    }

    #[test]
    fn second_draft_is_refused() {
        let mut collection = collection_with(&["A"]);
        assert!(collection.append_draft(None).is_some());
        assert!(collection.append_draft(None).is_none());
        assert!(collection.insert_draft_after(0, None).is_none());
        assert!(!collection.rename_start(1));
    }

    #[test]
    fn cancel_rename_reverts_label() {
        let mut collection = collection_with(&["Info", "Other"]);
        assert!(collection.rename_start(1));
        collection.cancel_edit(1);
        let tab = collection.get_tab(1).unwrap();
        assert_eq!(tab.label, "Info");
        assert!(!tab.editing);
        assert_eq!(collection.tab_count(), 2);
    }

    #[test]
    fn commit_with_whitespace_only_cancels() {
        let mut collection = collection_with(&["A"]);
        let draft = collection.append_draft(None).unwrap();
        collection.commit_edit(draft, "   ");
        assert_eq!(collection.tab_count(), 1);
        assert!(collection.get_tab(draft).is_none());
    }
}
