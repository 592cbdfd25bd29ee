//! Page strip UI using egui.
//!
//! Renders the ordered page tabs with drag reorder, inline create/rename,
//! overflow scrolling, and per-tab menu, and routes every interaction
//! through the collection controller.
//!
//! ## Module layout
//!
//! - [`state`]: `PageNavUI` struct definition and constructor.
//! - [`tab_rendering`]: individual committed-tab rendering and drag start.
//! - [`inline_edit`]: the in-strip edit tab (text field, save/cancel).
//! - [`drag_drop`]: drag feedback, drop targeting, and the floating ghost.
//! - [`connector`]: dotted connectors with the delayed insert affordance.
//! - [`menu`]: per-tab dropdown menu (set first, rename, duplicate, delete).
//! - [`scroll`]: overflow detection, scroll buttons, and scroll-to-reveal.

mod connector;
mod drag_drop;
mod inline_edit;
mod menu;
mod scroll;
mod state;
mod tab_rendering;

pub use scroll::{ScrollState, derive_scroll_state};
pub use state::PageNavUI;

use crate::config::PageNavConfig;
use crate::tab::{TabCollection, TabId};
use crate::ui_constants::SCROLL_BTN_WIDTH;

/// Interactions produced by the strip, applied to the collection by
/// [`PageNavUI::apply_action`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageNavAction {
    /// No interaction this frame.
    None,
    /// Select a tab.
    Select(TabId),
    /// Append a draft tab at the end of the strip.
    AppendDraft,
    /// Insert a draft tab after the given index.
    InsertDraftAfter(usize),
    /// Commit the inline edit session with the entered text.
    CommitEdit(TabId, String),
    /// Cancel the inline edit session.
    CancelEdit(TabId),
    /// Relocate a tab to a target index in the sortable sequence.
    Reorder(TabId, usize),
    /// Move a tab to the front of the strip.
    SetFirst(TabId),
    /// Begin renaming a tab inline.
    Rename(TabId),
    /// Duplicate a tab.
    Duplicate(TabId),
    /// Delete a tab.
    Delete(TabId),
    /// Keyboard reorder: move the active tab one slot left.
    MoveActiveLeft,
    /// Keyboard reorder: move the active tab one slot right.
    MoveActiveRight,
}

impl PageNavUI {
    /// Whether a drag operation is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_in_progress
    }

    /// Id of the tab currently being dragged. Hosts and the renderer use
    /// this to suppress the original tab's interactive affordances while its
    /// ghost follows the cursor.
    pub fn dragging_tab(&self) -> Option<TabId> {
        if self.drag_in_progress {
            self.dragging_tab
        } else {
            None
        }
    }

    /// Whether a per-tab menu is currently open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_tab.is_some()
    }

    /// Whether an inline edit session is active.
    pub fn is_editing(&self) -> bool {
        self.edit_session.is_some()
    }

    /// Render the strip in a top panel and apply the resulting interaction
    /// to the collection. Hosts drain `collection.take_events()` afterwards.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        collection: &mut TabCollection,
        config: &PageNavConfig,
    ) {
        let bg = config.strip_background;
        let mut action = PageNavAction::None;

        egui::TopBottomPanel::top("page_nav")
            .exact_height(config.strip_height)
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(bg[0], bg[1], bg[2])))
            .show(ctx, |ui| {
                action = self.render_strip(ui, collection, config);
            });

        // Floating ghost tab during drag (must be outside the panel)
        if self.drag_in_progress && self.dragging_tab.is_some() {
            self.render_ghost_tab(ctx, config);
        }

        // Per-tab dropdown menu
        if let Some(menu_tab) = self.menu_tab {
            let menu_action = self.render_menu(ctx, menu_tab, collection.has_multiple_tabs());
            if menu_action != PageNavAction::None {
                action = menu_action;
            }
        }

        self.apply_action(collection, config, action);
    }

    /// Render the strip into an existing `Ui` and return the interaction for
    /// the caller to feed to [`Self::apply_action`]. [`Self::show`] wraps
    /// this for the common top-panel embedding.
    pub fn render_strip(
        &mut self,
        ui: &mut egui::Ui,
        collection: &TabCollection,
        config: &PageNavConfig,
    ) -> PageNavAction {
        let now = ui.input(|i| i.time);
        self.sync_edit_session(collection, now);
        self.step_scroll_animation(ui.ctx());
        self.process_pending_reveal(now, ui.ctx());

        // Clear per-frame rect caches
        self.tab_rects.clear();
        self.sortable_rects.clear();

        let mut action = PageNavAction::None;

        // Keyboard reorder of the active tab while the strip is hovered
        if !self.drag_in_progress && ui.rect_contains_pointer(ui.max_rect()) {
            let (alt, left, right) = ui.input(|i| {
                (
                    i.modifiers.alt,
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                )
            });
            if alt && left {
                action = PageNavAction::MoveActiveLeft;
            } else if alt && right {
                action = PageNavAction::MoveActiveRight;
            }
        }

        // Overflow state derives from last frame's measurements; it settles
        // one frame after the content does.
        let scroll_state = derive_scroll_state(
            self.last_content_width,
            self.last_container_rect.width(),
            self.scroll_offset,
        );

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);

            if scroll_state.needs_scrolling {
                let left_btn = ui.add_enabled(
                    scroll_state.can_scroll_left,
                    egui::Button::new("\u{25C0}")
                        .min_size(egui::vec2(SCROLL_BTN_WIDTH, config.strip_height))
                        .fill(egui::Color32::TRANSPARENT),
                );
                if left_btn.clicked_by(egui::PointerButton::Primary) {
                    self.scroll_to_start();
                }
            }

            let reserved = if scroll_state.needs_scrolling {
                SCROLL_BTN_WIDTH
            } else {
                0.0
            };
            let tabs_area_width = (ui.available_width() - reserved).max(0.0);

            // Wheel input is redirected manually (vertical delta maps to
            // horizontal offset), so the area's own scroll handling is off
            let output = egui::ScrollArea::horizontal()
                .id_salt("page_nav_tabs")
                .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                .enable_scrolling(false)
                .max_width(tabs_area_width)
                .horizontal_scroll_offset(self.scroll_offset)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);
                        let strip_action = self.render_tabs_row(ui, collection, config, now);
                        if strip_action != PageNavAction::None {
                            action = strip_action;
                        }
                    });
                });

            self.scroll_offset = output.state.offset.x;
            self.last_content_width = output.content_size.x;
            self.last_container_rect = output.inner_rect;

            self.handle_wheel(ui, output.inner_rect);

            if scroll_state.needs_scrolling {
                let right_btn = ui.add_enabled(
                    scroll_state.can_scroll_right,
                    egui::Button::new("\u{25B6}")
                        .min_size(egui::vec2(SCROLL_BTN_WIDTH, config.strip_height))
                        .fill(egui::Color32::TRANSPARENT),
                );
                if right_btn.clicked_by(egui::PointerButton::Primary) {
                    self.scroll_to_end();
                }
            }
        });

        // Drag feedback and drop detection, painted over the strip
        if self.drag_in_progress {
            let drag_action = self.render_drag_feedback(ui, config);
            if drag_action != PageNavAction::None {
                action = drag_action;
            }
        }

        action
    }

    /// Render the tab pills, connectors, and trailing add affordances.
    fn render_tabs_row(
        &mut self,
        ui: &mut egui::Ui,
        collection: &TabCollection,
        config: &PageNavConfig,
        now: f64,
    ) -> PageNavAction {
        let mut action = PageNavAction::None;
        let tabs = collection.tabs();
        let active_id = collection.active_tab_id();
        let sortable_count = tabs.iter().filter(|t| !t.editing).count();

        for (index, tab) in tabs.iter().enumerate() {
            let is_active = Some(tab.id) == active_id;
            let (tab_action, tab_rect) = if tab.editing {
                self.render_edit_tab(ui, tab, index == tabs.len() - 1, config)
            } else {
                self.render_tab(ui, tab, index, is_active, sortable_count, config)
            };
            self.tab_rects.push((tab.id, tab_rect));
            if !tab.editing {
                self.sortable_rects.push((tab.id, tab_rect));
            }
            Self::merge_action(&mut action, tab_action);

            // Connector with insert affordance between two committed tabs
            let next_editing = tabs.get(index + 1).is_some_and(|t| t.editing);
            if index + 1 < tabs.len() && !tab.editing && !next_editing {
                let connector_action = self.render_connector(ui, index, config, now);
                Self::merge_action(&mut action, connector_action);
            }
        }

        // Trailing connector and add-page button, hidden while the last tab
        // is still being named
        if !tabs.last().is_some_and(|t| t.editing) {
            self.render_trailing_connector(ui, config);
            let add_action = self.render_add_page_button(ui, config);
            Self::merge_action(&mut action, add_action);
        }

        action
    }

    /// Merge a component's action into the frame action. A blur-commit or
    /// blur-cancel from the edit field may land on the same frame as the
    /// click that caused the blur; the edit resolution must win or the
    /// session would be left dangling without focus.
    fn merge_action(current: &mut PageNavAction, new: PageNavAction) {
        if new == PageNavAction::None {
            return;
        }
        let current_resolves_edit = matches!(
            current,
            PageNavAction::CommitEdit(..) | PageNavAction::CancelEdit(..)
        );
        let new_resolves_edit = matches!(
            new,
            PageNavAction::CommitEdit(..) | PageNavAction::CancelEdit(..)
        );
        if current_resolves_edit && !new_resolves_edit {
            return;
        }
        *current = new;
    }

    /// Apply an interaction to the collection. The collection validates and
    /// queues host events; invalid interactions are silent no-ops.
    pub fn apply_action(
        &mut self,
        collection: &mut TabCollection,
        config: &PageNavConfig,
        action: PageNavAction,
    ) {
        match action {
            PageNavAction::None => {}
            PageNavAction::Select(id) => collection.select_tab(id),
            PageNavAction::AppendDraft => {
                collection.append_draft(config.default_tab_icon.clone());
            }
            PageNavAction::InsertDraftAfter(index) => {
                collection.insert_draft_after(index, config.default_tab_icon.clone());
            }
            PageNavAction::CommitEdit(id, name) => {
                collection.commit_edit(id, &name);
                self.edit_session = None;
            }
            PageNavAction::CancelEdit(id) => {
                collection.cancel_edit(id);
                self.edit_session = None;
            }
            PageNavAction::Reorder(id, target) => {
                collection.move_tab_to_index(id, target);
            }
            PageNavAction::SetFirst(id) => {
                collection.set_first(id);
            }
            PageNavAction::Rename(id) => {
                collection.rename_start(id);
            }
            PageNavAction::Duplicate(id) => {
                collection.duplicate(id);
            }
            PageNavAction::Delete(id) => {
                collection.delete(id);
            }
            PageNavAction::MoveActiveLeft => {
                collection.move_active_tab_left();
            }
            PageNavAction::MoveActiveRight => {
                collection.move_active_tab_right();
            }
        }
    }

    /// Calculate the drop target for a drag given a pointer x position:
    /// the eligible tab whose center is nearest the pointer. Returns `None`
    /// when the nearest tab is the drag source itself (a no-op drop) or no
    /// eligible tabs exist.
    ///
    /// This is a pure helper that can be tested without egui rendering.
    pub fn calculate_drop_target(
        tab_rects: &[(TabId, egui::Rect)],
        source_index: Option<usize>,
        pointer_x: f32,
    ) -> Option<usize> {
        let mut nearest: Option<(usize, f32)> = None;
        for (i, (_id, rect)) in tab_rects.iter().enumerate() {
            let dist = (pointer_x - rect.center().x).abs();
            if nearest.is_none_or(|(_, best)| dist < best) {
                nearest = Some((i, dist));
            }
        }
        let (target, _) = nearest?;
        if source_index == Some(target) {
            return None;
        }
        Some(target)
    }

    // ------------------------------------------------------------------
    // Test accessors: used by integration tests to exercise state
    // transitions without requiring a live egui render loop.
    // ------------------------------------------------------------------

    /// Set drag state directly; used by integration tests.
    pub fn test_set_drag_state(&mut self, tab_id: Option<TabId>, in_progress: bool) {
        self.drag_in_progress = in_progress;
        self.dragging_tab = tab_id;
    }

    /// Set the drop target index directly; used by integration tests.
    pub fn test_set_drop_target(&mut self, index: Option<usize>) {
        self.drop_target_index = index;
    }

    /// Get the current drop target index; used by integration tests.
    pub fn test_drop_target_index(&self) -> Option<usize> {
        self.drop_target_index
    }

    /// Open the menu for a specific tab; used by integration tests.
    pub fn test_open_menu(&mut self, tab_id: TabId) {
        self.menu_tab = Some(tab_id);
        self.menu_opened_frame = 0;
    }

    /// Close the menu; used by integration tests.
    pub fn test_close_menu(&mut self) {
        self.menu_tab = None;
    }

    /// Get the menu tab id; used by integration tests.
    pub fn test_menu_tab(&self) -> Option<TabId> {
        self.menu_tab
    }

    /// The tab owning the current edit session; used by integration tests.
    pub fn test_edit_session_tab(&self) -> Option<TabId> {
        self.edit_session.as_ref().map(|s| s.tab_id)
    }

    /// Seed last-frame scroll measurements; used by integration tests.
    pub fn test_set_scroll_metrics(&mut self, content_width: f32, container: egui::Rect) {
        self.last_content_width = content_width;
        self.last_container_rect = container;
    }

    /// Seed a cached tab rect; used by integration tests.
    pub fn test_push_tab_rect(&mut self, id: TabId, rect: egui::Rect) {
        self.tab_rects.push((id, rect));
        self.sortable_rects.push((id, rect));
    }

    /// Current scroll offset; used by integration tests.
    pub fn test_scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// In-flight smooth-scroll target; used by integration tests.
    pub fn test_scroll_target(&self) -> Option<f32> {
        self.scroll_target
    }
}
