//! Tab entities and the collection controller.
//!
//! This module provides the core tab infrastructure:
//! - [`Tab`]: a single page entry in the strip
//! - [`TabCollection`]: owns the canonical tab order and active-tab id
//! - [`PageNavEvent`]: notifications queued for the host
//! - [`TabId`]: unique identifier for each tab

mod collection;
mod events;

pub use collection::TabCollection;
pub use events::PageNavEvent;

/// Unique identifier for a tab, allocated from the collection's monotonic
/// counter. Never reused within a process lifetime.
pub type TabId = u64;

/// A single page tab.
///
/// The icon is an opaque glyph token the core passes through to rendering
/// untouched; `completed` is display-only. `label` is empty only while
/// `editing` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Unique id, immutable for the tab's lifetime.
    pub id: TabId,
    /// Display label.
    pub label: String,
    /// Opaque icon glyph, rendered verbatim.
    pub icon: Option<String>,
    /// Display-only completion marker.
    pub completed: bool,
    /// Whether this tab currently hosts an inline edit session.
    pub editing: bool,
}

impl Tab {
    /// Create a committed tab.
    pub fn new(id: TabId, label: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon,
            completed: false,
            editing: false,
        }
    }

    /// Create a draft tab: empty label, edit mode on. The tab is not
    /// considered real until the user commits a name for it.
    pub fn draft(id: TabId, icon: Option<String>) -> Self {
        Self {
            id,
            label: String::new(),
            icon,
            completed: false,
            editing: true,
        }
    }
}

/// Host-supplied description of one initial page, consumed by
/// [`TabCollection::from_pages`].
#[derive(Debug, Clone, Default)]
pub struct PageSeed {
    /// Initial label.
    pub label: String,
    /// Opaque icon glyph.
    pub icon: Option<String>,
    /// Initial completion marker.
    pub completed: bool,
}

impl PageSeed {
    /// Seed with a label only.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the icon glyph.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the page completed.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tab_is_committed() {
        let tab = Tab::new(1, "Info", Some("i".into()));
        assert_eq!(tab.label, "Info");
        assert!(!tab.editing);
        assert!(!tab.completed);
    }

    #[test]
    fn draft_tab_is_editing_with_empty_label() {
        let tab = Tab::draft(2, None);
        assert!(tab.label.is_empty());
        assert!(tab.editing);
    }

    #[test]
    fn page_seed_builder() {
        let seed = PageSeed::new("Ending").icon("\u{2713}").completed(true);
        assert_eq!(seed.label, "Ending");
        assert!(seed.completed);
        assert_eq!(seed.icon.as_deref(), Some("\u{2713}"));
    }
}
