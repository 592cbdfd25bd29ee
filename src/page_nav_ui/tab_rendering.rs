//! Individual tab rendering for the page strip.
//!
//! Contains the [`PageNavUI`] method for rendering a single committed tab:
//! fit-content sizing, state-dependent fill, the round icon badge, the ⋮
//! menu button on the active tab, and click/drag/secondary-click handling.

use crate::config::PageNavConfig;
use crate::tab::Tab;
use crate::ui_constants::{
    DRAGGED_TAB_ALPHA, TAB_CONTENT_PAD_X, TAB_DRAW_SHRINK_Y, TAB_ICON_BADGE_SIZE,
    TAB_ICON_LABEL_GAP, TAB_MENU_BTN_GAP, TAB_MENU_BTN_SIZE, TAB_ROUNDING,
};

use super::PageNavAction;
use super::PageNavUI;

impl PageNavUI {
    /// Render a single committed tab and return any action triggered plus
    /// the tab rect.
    pub(super) fn render_tab(
        &mut self,
        ui: &mut egui::Ui,
        tab: &Tab,
        _index: usize,
        is_active: bool,
        sortable_count: usize,
        config: &PageNavConfig,
    ) -> (PageNavAction, egui::Rect) {
        let mut action = PageNavAction::None;

        let is_hovered = self.hovered_tab == Some(tab.id);
        let is_being_dragged = self.dragging_tab == Some(tab.id) && self.drag_in_progress;
        // The dragged tab's menu button is suppressed; its ghost carries the
        // visuals while the original sits dimmed in place.
        let show_menu_btn = is_active && !is_being_dragged;

        let font_id = egui::TextStyle::Button.resolve(ui.style());
        let text_color = if is_active {
            let c = config.tab_active_text;
            egui::Color32::from_rgb(c[0], c[1], c[2])
        } else {
            let c = config.tab_inactive_text;
            egui::Color32::from_rgb(c[0], c[1], c[2])
        };
        let label_galley =
            ui.painter()
                .layout_no_wrap(tab.label.clone(), font_id.clone(), text_color);

        let mut tab_width = TAB_CONTENT_PAD_X * 2.0
            + TAB_ICON_BADGE_SIZE
            + TAB_ICON_LABEL_GAP
            + label_galley.size().x;
        if show_menu_btn {
            tab_width += TAB_MENU_BTN_GAP + TAB_MENU_BTN_SIZE;
        }

        let (tab_rect, _) = ui.allocate_exact_size(
            egui::vec2(tab_width, config.strip_height),
            egui::Sense::hover(),
        );

        let alpha = if is_being_dragged { DRAGGED_TAB_ALPHA } else { 255 };
        let bg = if is_active {
            config.tab_active_background
        } else if is_hovered {
            config.tab_hover_background
        } else {
            config.tab_inactive_background
        };
        let bg_color = egui::Color32::from_rgba_unmultiplied(bg[0], bg[1], bg[2], alpha);

        let tab_draw_rect = tab_rect.shrink2(egui::vec2(0.0, TAB_DRAW_SHRINK_Y));
        if ui.is_rect_visible(tab_rect) {
            ui.painter().rect_filled(tab_draw_rect, TAB_ROUNDING, bg_color);
            if is_active {
                let c = config.tab_active_border;
                ui.painter().rect_stroke(
                    tab_draw_rect,
                    TAB_ROUNDING,
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(c[0], c[1], c[2])),
                    egui::StrokeKind::Inside,
                );
            }

            // Icon badge: filled circle carrying the icon glyph, or a check
            // on completed inactive tabs
            let badge_center = egui::pos2(
                tab_rect.left() + TAB_CONTENT_PAD_X + TAB_ICON_BADGE_SIZE / 2.0,
                tab_rect.center().y,
            );
            let badge = if is_active {
                config.badge_active
            } else if tab.completed && config.show_completed_badge {
                config.badge_completed
            } else {
                config.badge_inactive
            };
            ui.painter().circle_filled(
                badge_center,
                TAB_ICON_BADGE_SIZE / 2.0,
                egui::Color32::from_rgba_unmultiplied(badge[0], badge[1], badge[2], alpha),
            );
            let glyph = if tab.completed && !is_active && config.show_completed_badge {
                "\u{2713}"
            } else {
                tab.icon.as_deref().unwrap_or("")
            };
            if !glyph.is_empty() {
                ui.painter().text(
                    badge_center,
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(10.0),
                    egui::Color32::WHITE,
                );
            }

            // Label
            let label_pos = egui::pos2(
                tab_rect.left() + TAB_CONTENT_PAD_X + TAB_ICON_BADGE_SIZE + TAB_ICON_LABEL_GAP,
                tab_rect.center().y - label_galley.size().y / 2.0,
            );
            ui.painter().galley(label_pos, label_galley, text_color);
        }

        // Menu button rect: manual containment hit-testing so the click
        // opens the menu instead of selecting the tab
        let menu_btn_rect = show_menu_btn.then(|| {
            egui::Rect::from_center_size(
                egui::pos2(
                    tab_rect.right() - TAB_CONTENT_PAD_X - TAB_MENU_BTN_SIZE / 2.0,
                    tab_rect.center().y,
                ),
                egui::vec2(TAB_MENU_BTN_SIZE, TAB_MENU_BTN_SIZE),
            )
        });
        let pointer_pos = ui.ctx().input(|i| i.pointer.hover_pos());
        let menu_btn_hovered = menu_btn_rect
            .zip(pointer_pos)
            .is_some_and(|(rect, pos)| rect.contains(pos));

        if let Some(rect) = menu_btn_rect {
            let c = if menu_btn_hovered {
                config.tab_active_text
            } else {
                config.tab_inactive_text
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "\u{22EE}",
                egui::FontId::proportional(12.0),
                egui::Color32::from_rgb(c[0], c[1], c[2]),
            );
        }

        // Click and drag handling. clicked_by(Primary) keeps keyboard
        // activation (Enter/Space with focus) from switching tabs.
        let tab_response = ui.interact(
            tab_rect,
            egui::Id::new(("page_tab", tab.id)),
            egui::Sense::click_and_drag(),
        );
        let pointer_in_tab = tab_response.hovered();
        let clicked = tab_response.clicked_by(egui::PointerButton::Primary);

        // Drag initiation: needs at least two sortable tabs; egui's drag
        // threshold suppresses accidental drags from simple clicks
        if sortable_count > 1
            && !self.drag_in_progress
            && !menu_btn_hovered
            && tab_response.drag_started_by(egui::PointerButton::Primary)
        {
            self.drag_in_progress = true;
            self.dragging_tab = Some(tab.id);
            self.dragging_label = tab.label.clone();
            self.dragging_icon = tab.icon.clone();
            self.dragging_tab_width = tab_width;
        }

        if clicked && menu_btn_hovered {
            self.open_menu(ui.ctx(), tab.id, menu_btn_rect.map(|r| r.left_bottom()));
        } else if clicked && !is_being_dragged {
            action = PageNavAction::Select(tab.id);
        }

        if tab_response.secondary_clicked() {
            let pos = ui.ctx().input(|i| i.pointer.interact_pos());
            self.open_menu(ui.ctx(), tab.id, pos);
        }

        if pointer_in_tab {
            self.hovered_tab = Some(tab.id);
        } else if self.hovered_tab == Some(tab.id) {
            self.hovered_tab = None;
        }

        (action, tab_rect)
    }

    /// Open the dropdown menu for a tab at the given position.
    pub(super) fn open_menu(
        &mut self,
        ctx: &egui::Context,
        tab_id: crate::tab::TabId,
        pos: Option<egui::Pos2>,
    ) {
        self.menu_tab = Some(tab_id);
        if let Some(pos) = pos {
            self.menu_pos = pos;
        }
        self.menu_opened_frame = ctx.cumulative_frame_nr();
    }
}
