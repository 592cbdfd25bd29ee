//! Tests for the tab collection controller.
//!
//! These exercise the canonical-state invariants: at most one tab in edit
//! mode, at least one tab after initialization, pairwise-distinct ids, the
//! permutation law for reorders, and the exact event sequences the host
//! observes for each operation.

use page_nav::tab::{PageNavEvent, PageSeed, Tab, TabCollection, TabId};

fn collection(labels: &[&str]) -> TabCollection {
    TabCollection::from_pages(labels.iter().map(|l| PageSeed::new(*l)))
}

fn ids(collection: &TabCollection) -> Vec<TabId> {
    collection.tabs().iter().map(|t| t.id).collect()
}

fn labels(collection: &TabCollection) -> Vec<String> {
    collection.tabs().iter().map(|t| t.label.clone()).collect()
}

fn editing_count(collection: &TabCollection) -> usize {
    collection.tabs().iter().filter(|t| t.editing).count()
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn at_most_one_tab_editing_through_mixed_operations() {
    let mut c = collection(&["A", "B", "C"]);
    assert_eq!(editing_count(&c), 0);

    c.append_draft(None);
    assert_eq!(editing_count(&c), 1);

    // Every way of opening a second session is refused
    assert!(c.append_draft(None).is_none());
    assert!(c.insert_draft_after(0, None).is_none());
    assert!(!c.rename_start(1));
    assert_eq!(editing_count(&c), 1);
}

#[test]
fn collection_never_becomes_empty() {
    let mut c = collection(&["A", "B"]);
    assert!(c.delete(1));
    assert!(!c.delete(2), "last tab must not be deletable");
    assert_eq!(c.tab_count(), 1);
}

#[test]
fn ids_stay_pairwise_distinct() {
    let mut c = collection(&["A", "B", "C"]);
    c.duplicate(2);
    let draft = c.append_draft(None).unwrap();
    c.commit_edit(draft, "New");
    c.duplicate(draft);

    let mut seen = ids(&c);
    seen.sort_unstable();
    let len = seen.len();
    seen.dedup();
    assert_eq!(seen.len(), len, "duplicate id detected");
}

#[test]
fn select_tab_is_idempotent_on_state() {
    let mut c = collection(&["A", "B", "C"]);
    c.select_tab(2);
    let tabs_once: Vec<Tab> = c.tabs().to_vec();
    let active_once = c.active_tab_id();

    c.select_tab(2);
    assert_eq!(c.tabs(), tabs_once.as_slice());
    assert_eq!(c.active_tab_id(), active_once);
}

#[test]
fn selecting_an_editing_tab_is_a_no_op() {
    let mut c = collection(&["A", "B"]);
    let draft = c.append_draft(None).unwrap();
    c.take_events();

    // Make another tab active through the host path first
    c.set_active(1);
    c.select_tab(draft);
    assert_eq!(c.active_tab_id(), Some(1));
    assert!(c.take_events().is_empty());
}

// ============================================================================
// Permutation law
// ============================================================================

#[test]
fn reorder_rejects_anything_but_a_permutation() {
    let mut c = collection(&["A", "B", "C"]);
    assert!(!c.reorder(&[1, 2]), "missing id");
    assert!(!c.reorder(&[1, 2, 3, 3]), "duplicated id");
    assert!(!c.reorder(&[1, 2, 9]), "foreign id");
    assert_eq!(ids(&c), vec![1, 2, 3]);
    assert!(c.take_events().is_empty());
}

#[test]
fn reorder_accepts_a_permutation_and_notifies() {
    let mut c = collection(&["A", "B", "C"]);
    assert!(c.reorder(&[3, 1, 2]));
    assert_eq!(ids(&c), vec![3, 1, 2]);
    assert_eq!(c.take_events(), vec![PageNavEvent::Reordered(vec![3, 1, 2])]);
}

#[test]
fn editing_tab_keeps_absolute_position_through_reorder() {
    let mut c = collection(&["A", "B", "C"]);
    let draft = c.insert_draft_after(0, None).unwrap(); // [A, draft, B, C]
    assert!(c.reorder(&[3, 2, 1]));
    let order = ids(&c);
    assert_eq!(order[1], draft);
    assert_eq!(order, vec![3, draft, 2, 1]);
}

#[test]
fn reorder_over_editing_ids_is_rejected() {
    let mut c = collection(&["A", "B"]);
    let draft = c.append_draft(None).unwrap();
    // The draft is not part of the sortable set
    assert!(!c.reorder(&[draft, 1, 2]));
    assert!(!c.reorder(&[draft, 1]));
}

// ============================================================================
// Operation semantics
// ============================================================================

#[test]
fn set_first_preserves_relative_order() {
    // [A,B,C,D], setFirst(C) → [C,A,B,D], active unchanged
    let mut c = collection(&["A", "B", "C", "D"]);
    assert!(c.set_first(3));
    assert_eq!(labels(&c), vec!["C", "A", "B", "D"]);
    assert_eq!(c.active_tab_id(), Some(1), "active tab identity unchanged");
    assert_eq!(c.take_events(), vec![PageNavEvent::SetFirst(3)]);

    // Already first: no-op, no event
    assert!(!c.set_first(3));
    assert!(c.take_events().is_empty());
}

#[test]
fn append_draft_and_commit_trailing() {
    // appendDraft on [A,B] → [A,B,draft]; commit "  Notes " → trailing add
    let mut c = collection(&["A", "B"]);
    let draft = c.append_draft(None).unwrap();
    assert_eq!(c.tab_count(), 3);
    let tab = c.get_tab(draft).unwrap();
    assert!(tab.editing);
    assert!(tab.label.is_empty());
    assert_eq!(c.active_tab_id(), Some(draft));

    c.commit_edit(draft, "  Notes ");
    let tab = c.get_tab(draft).unwrap();
    assert_eq!(tab.label, "Notes");
    assert!(!tab.editing);

    let events = c.take_events();
    assert_eq!(
        events,
        vec![
            PageNavEvent::TabAdded {
                tab: Tab {
                    id: draft,
                    label: "Notes".into(),
                    icon: None,
                    completed: false,
                    editing: false,
                },
                insert_index: None,
            },
            PageNavEvent::PageAddRequested,
            PageNavEvent::Selected(draft),
        ],
        "trailing commit fires the un-indexed add plus the page-add request"
    );
}

#[test]
fn interior_commit_fires_indexed_add_without_page_add() {
    let mut c = collection(&["A", "B", "C"]);
    let draft = c.insert_draft_after(0, None).unwrap(); // index 1
    c.commit_edit(draft, "Mid");

    let events = c.take_events();
    assert!(matches!(
        events[0],
        PageNavEvent::TabAdded { insert_index: Some(1), .. }
    ));
    assert!(!events.contains(&PageNavEvent::PageAddRequested));
    assert_eq!(events.last(), Some(&PageNavEvent::Selected(draft)));
}

#[test]
fn insert_draft_then_cancel_restores_sequence() {
    // insertDraftAfter(0) on [A,B,C] → [A,draft,B,C]; cancel → [A,B,C]
    let mut c = collection(&["A", "B", "C"]);
    let draft = c.insert_draft_after(0, None).unwrap();
    assert_eq!(ids(&c), vec![1, draft, 2, 3]);
    assert_eq!(c.active_tab_id(), Some(draft));
    c.take_events();

    c.cancel_edit(draft);
    assert_eq!(ids(&c), vec![1, 2, 3]);
    assert_eq!(
        c.active_tab_id(),
        Some(1),
        "active falls back to the first remaining tab"
    );
    assert_eq!(c.take_events(), vec![PageNavEvent::Selected(1)]);
}

#[test]
fn drag_relocation_is_a_move_not_a_swap() {
    // Drag B onto D in [A,B,C,D] → [A,C,D,B]
    let mut c = collection(&["A", "B", "C", "D"]);
    assert!(c.move_tab_to_index(2, 3));
    assert_eq!(labels(&c), vec!["A", "C", "D", "B"]);
}

#[test]
fn duplicate_inserts_after_source() {
    // duplicate(B) on [A,B,C] → [A,B,"B Copy",C], new tab active, fresh id
    let mut c = collection(&["A", "B", "C"]);
    let new_id = c.duplicate(2).unwrap();
    assert_eq!(labels(&c), vec!["A", "B", "B Copy", "C"]);
    assert!(![1, 2, 3].contains(&new_id), "duplicate gets a fresh id");
    assert_eq!(c.active_tab_id(), Some(new_id));
    assert_eq!(
        c.take_events(),
        vec![PageNavEvent::Duplicated(2), PageNavEvent::Selected(new_id)]
    );
}

#[test]
fn delete_active_falls_back_to_first() {
    // delete(A) on [A*,B,C] → [B,C], active B
    let mut c = collection(&["A", "B", "C"]);
    assert_eq!(c.active_tab_id(), Some(1));
    assert!(c.delete(1));
    assert_eq!(labels(&c), vec!["B", "C"]);
    assert_eq!(c.active_tab_id(), Some(2));
    assert_eq!(
        c.take_events(),
        vec![PageNavEvent::TabDeleted(1), PageNavEvent::Selected(2)]
    );
}

#[test]
fn delete_inactive_keeps_active_and_fires_single_event() {
    let mut c = collection(&["A", "B", "C"]);
    assert!(c.delete(3));
    assert_eq!(c.active_tab_id(), Some(1));
    assert_eq!(c.take_events(), vec![PageNavEvent::TabDeleted(3)]);
}

// ============================================================================
// Rename semantics
// ============================================================================

#[test]
fn rename_commit_fires_renamed_not_added() {
    let mut c = collection(&["Info", "Other"]);
    assert!(c.rename_start(1));
    c.commit_edit(1, " Overview ");

    let tab = c.get_tab(1).unwrap();
    assert_eq!(tab.label, "Overview");
    assert!(!tab.editing);
    assert_eq!(
        c.take_events(),
        vec![
            PageNavEvent::TabRenamed {
                id: 1,
                name: "Overview".into(),
            },
            PageNavEvent::Selected(1),
        ]
    );
}

#[test]
fn rename_cancel_reverts_without_deleting() {
    let mut c = collection(&["Info", "Other"]);
    c.rename_start(2);
    c.cancel_edit(2);
    assert_eq!(c.tab_count(), 2);
    assert_eq!(c.get_tab(2).unwrap().label, "Other");
    assert!(c.take_events().is_empty());
}

#[test]
fn rename_commit_with_whitespace_reverts_like_cancel() {
    let mut c = collection(&["Info", "Other"]);
    c.rename_start(2);
    c.commit_edit(2, "   ");
    assert_eq!(c.tab_count(), 2, "rename-origin cancel keeps the tab");
    assert_eq!(c.get_tab(2).unwrap().label, "Other");
}

#[test]
fn draft_commit_with_whitespace_discards_the_draft() {
    let mut c = collection(&["A", "B"]);
    let draft = c.append_draft(None).unwrap();
    c.take_events();
    c.commit_edit(draft, " \t ");
    assert_eq!(c.tab_count(), 2);
    assert!(c.get_tab(draft).is_none());
    assert_eq!(c.take_events(), vec![PageNavEvent::Selected(1)]);
}

// ============================================================================
// Host input paths
// ============================================================================

#[test]
fn from_pages_seeds_order_icons_and_completion() {
    let c = TabCollection::from_pages([
        PageSeed::new("Info").icon("i"),
        PageSeed::new("Ending").completed(true),
    ]);
    assert_eq!(labels(&c), vec!["Info", "Ending"]);
    assert_eq!(c.tabs()[0].icon.as_deref(), Some("i"));
    assert!(c.tabs()[1].completed);
    assert_eq!(c.active_tab_id(), Some(1));
}

#[test]
fn set_active_mirrors_without_events() {
    let mut c = collection(&["A", "B"]);
    c.set_active(2);
    assert_eq!(c.active_tab_id(), Some(2));
    assert!(c.take_events().is_empty());

    // Unknown ids are ignored
    c.set_active(99);
    assert_eq!(c.active_tab_id(), Some(2));
}
