//! `PageNavUI` struct definition and constructor.

use crate::tab::TabId;

/// Transient state of one inline edit session. The buffer holds the draft
/// text; nothing is committed until Enter/blur.
#[derive(Debug, Clone)]
pub(super) struct EditSession {
    /// Tab being named or renamed.
    pub tab_id: TabId,
    /// Draft text bound to the text field.
    pub buffer: String,
    /// Whether focus + select-all have been requested for the field.
    pub focus_requested: bool,
}

/// Pending hover-reveal of a connector's insert button.
#[derive(Debug, Clone, Copy)]
pub(super) struct ConnectorHover {
    /// Connector index (after tab `index`).
    pub index: usize,
    /// Input-clock deadline at which the split affordance appears.
    pub deadline: f64,
}

/// Deferred scroll-to-reveal of a tab that just entered edit mode, delayed
/// so the edit-mode layout change settles first.
#[derive(Debug, Clone, Copy)]
pub(super) struct PendingReveal {
    /// Tab to bring fully into view.
    pub tab_id: TabId,
    /// Input-clock time at which to perform the reveal.
    pub at: f64,
}

/// Page strip UI state.
pub struct PageNavUI {
    /// Currently hovered tab id.
    pub hovered_tab: Option<TabId>,
    /// Whether a drag is in progress.
    pub(super) drag_in_progress: bool,
    /// Tab being dragged.
    pub(super) dragging_tab: Option<TabId>,
    /// Cached label of the dragged tab (for ghost rendering).
    pub(super) dragging_label: String,
    /// Cached icon of the dragged tab.
    pub(super) dragging_icon: Option<String>,
    /// Width of the dragged tab (for ghost rendering).
    pub(super) dragging_tab_width: f32,
    /// Drop target: index within the sortable (non-editing) sequence.
    pub(super) drop_target_index: Option<usize>,
    /// Per-frame cache of all tab rects, in strip order.
    pub(super) tab_rects: Vec<(TabId, egui::Rect)>,
    /// Per-frame cache of non-editing tab rects; the drag-eligible set.
    pub(super) sortable_rects: Vec<(TabId, egui::Rect)>,
    /// Tab whose dropdown menu is open.
    pub(super) menu_tab: Option<TabId>,
    /// Position where the menu was opened.
    pub(super) menu_pos: egui::Pos2,
    /// Frame when the menu was opened (so the opening click doesn't close it).
    pub(super) menu_opened_frame: u64,
    /// In-flight inline edit session.
    pub(super) edit_session: Option<EditSession>,
    /// Armed connector hover-reveal timer.
    pub(super) connector_hover: Option<ConnectorHover>,
    /// Armed post-edit scroll reveal timer.
    pub(super) pending_reveal: Option<PendingReveal>,
    /// Horizontal scroll offset of the tab area, in points.
    pub(super) scroll_offset: f32,
    /// Target offset of an in-flight smooth scroll.
    pub(super) scroll_target: Option<f32>,
    /// Content width measured last frame.
    pub(super) last_content_width: f32,
    /// Visible container rect measured last frame.
    pub(super) last_container_rect: egui::Rect,
}

impl PageNavUI {
    /// Create a new page strip UI.
    pub fn new() -> Self {
        Self {
            hovered_tab: None,
            drag_in_progress: false,
            dragging_tab: None,
            dragging_label: String::new(),
            dragging_icon: None,
            dragging_tab_width: 0.0,
            drop_target_index: None,
            tab_rects: Vec::new(),
            sortable_rects: Vec::new(),
            menu_tab: None,
            menu_pos: egui::Pos2::ZERO,
            menu_opened_frame: 0,
            edit_session: None,
            connector_hover: None,
            pending_reveal: None,
            scroll_offset: 0.0,
            scroll_target: None,
            last_content_width: 0.0,
            last_container_rect: egui::Rect::ZERO,
        }
    }
}

impl Default for PageNavUI {
    fn default() -> Self {
        Self::new()
    }
}
