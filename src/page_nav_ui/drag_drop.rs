//! Drag-and-drop state and rendering for the page strip.
//!
//! Contains [`PageNavUI`] methods for rendering the drop-position indicator,
//! the floating ghost tab that follows the cursor, and the drop/cancel
//! handling. Drop targeting uses the nearest-center rule over the sortable
//! (non-editing) tab rects: the dragged tab relocates to the target tab's
//! position and everything in between shifts by one.

use crate::config::PageNavConfig;
use crate::ui_constants::{
    DROP_INDICATOR_CAP_RADIUS, DROP_INDICATOR_WIDTH, GHOST_ALPHA, TAB_CONTENT_PAD_X,
    TAB_DRAW_SHRINK_Y, TAB_ICON_BADGE_SIZE, TAB_ICON_LABEL_GAP, TAB_ROUNDING,
};

use super::PageNavAction;
use super::PageNavUI;

impl PageNavUI {
    /// Render drag feedback and handle drop/cancel.
    pub(super) fn render_drag_feedback(
        &mut self,
        ui: &mut egui::Ui,
        config: &PageNavConfig,
    ) -> PageNavAction {
        let mut action = PageNavAction::None;

        let dragging_id = match self.dragging_tab {
            Some(id) => id,
            None => {
                self.drag_in_progress = false;
                return action;
            }
        };

        // Cancel on Escape: revert to idle with no mutation
        if ui.ctx().input(|i| i.key_pressed(egui::Key::Escape)) {
            self.drag_in_progress = false;
            self.dragging_tab = None;
            self.drop_target_index = None;
            return action;
        }

        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);

        let drag_source_index = self
            .sortable_rects
            .iter()
            .position(|(id, _)| *id == dragging_id);

        if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.hover_pos()) {
            self.drop_target_index =
                Self::calculate_drop_target(&self.sortable_rects, drag_source_index, pointer_pos.x);

            if let (Some(target), Some(src)) = (self.drop_target_index, drag_source_index) {
                // Indicator at the edge of the target slot the source will
                // occupy: left edge when moving left, right edge when moving
                // right
                let target_rect = self.sortable_rects[target].1;
                let indicator_x = if target < src {
                    target_rect.left() - 2.0
                } else {
                    target_rect.right() + 2.0
                };

                let c = config.drop_indicator_color;
                let indicator_color = egui::Color32::from_rgb(c[0], c[1], c[2]);
                let glow_color = egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], 50);
                let top = target_rect.top() + TAB_DRAW_SHRINK_Y;
                let bottom = target_rect.bottom() - TAB_DRAW_SHRINK_Y;

                // Glow behind the indicator (wider, semi-transparent)
                ui.painter().rect_filled(
                    egui::Rect::from_min_max(
                        egui::pos2(indicator_x - 4.0, top),
                        egui::pos2(indicator_x + 4.0, bottom),
                    ),
                    2.0,
                    glow_color,
                );

                // Main indicator line
                ui.painter().line_segment(
                    [
                        egui::pos2(indicator_x, top),
                        egui::pos2(indicator_x, bottom),
                    ],
                    egui::Stroke::new(DROP_INDICATOR_WIDTH, indicator_color),
                );

                for y in [top, bottom] {
                    ui.painter().circle_filled(
                        egui::pos2(indicator_x, y),
                        DROP_INDICATOR_CAP_RADIUS,
                        indicator_color,
                    );
                }
            }
        }

        // Handle drop (pointer released)
        if ui.ctx().input(|i| i.pointer.any_released()) {
            if let Some(target) = self.drop_target_index {
                action = PageNavAction::Reorder(dragging_id, target);
            }
            self.drag_in_progress = false;
            self.dragging_tab = None;
            self.drop_target_index = None;
        }

        action
    }

    /// Render a floating ghost tab that follows the cursor during drag.
    pub(super) fn render_ghost_tab(&self, ctx: &egui::Context, config: &PageNavConfig) {
        let Some(pointer_pos) = ctx.input(|i| i.pointer.hover_pos()) else {
            return;
        };

        let ghost_width = self.dragging_tab_width;
        let ghost_height = config.strip_height - TAB_DRAW_SHRINK_Y * 2.0;
        let ghost_pos = egui::pos2(
            pointer_pos.x - ghost_width / 2.0,
            pointer_pos.y - ghost_height / 2.0,
        );

        let bg = config.tab_active_background;
        let bg_color = egui::Color32::from_rgba_unmultiplied(bg[0], bg[1], bg[2], GHOST_ALPHA);
        let c = config.drop_indicator_color;
        let border_color = egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], GHOST_ALPHA);

        egui::Area::new(egui::Id::new("page_nav_drag_ghost"))
            .fixed_pos(ghost_pos)
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ghost_width, ghost_height),
                    egui::Sense::hover(),
                );

                // Shadow
                let shadow_rect = rect.translate(egui::vec2(2.0, 2.0));
                ui.painter().rect_filled(
                    shadow_rect,
                    TAB_ROUNDING,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 80),
                );

                ui.painter().rect_filled(rect, TAB_ROUNDING, bg_color);
                ui.painter().rect_stroke(
                    rect,
                    TAB_ROUNDING,
                    egui::Stroke::new(1.5, border_color),
                    egui::StrokeKind::Middle,
                );

                // Icon badge + label mirroring the lifted tab
                let badge_center = egui::pos2(
                    rect.left() + TAB_CONTENT_PAD_X + TAB_ICON_BADGE_SIZE / 2.0,
                    rect.center().y,
                );
                let badge = config.badge_active;
                ui.painter().circle_filled(
                    badge_center,
                    TAB_ICON_BADGE_SIZE / 2.0,
                    egui::Color32::from_rgba_unmultiplied(badge[0], badge[1], badge[2], GHOST_ALPHA),
                );
                if let Some(glyph) = self.dragging_icon.as_deref() {
                    ui.painter().text(
                        badge_center,
                        egui::Align2::CENTER_CENTER,
                        glyph,
                        egui::FontId::proportional(10.0),
                        egui::Color32::WHITE,
                    );
                }

                let t = config.tab_active_text;
                let text_color =
                    egui::Color32::from_rgba_unmultiplied(t[0], t[1], t[2], GHOST_ALPHA);
                let font_id = egui::FontId::proportional(13.0);
                let max_text_width = ghost_width
                    - TAB_CONTENT_PAD_X * 2.0
                    - TAB_ICON_BADGE_SIZE
                    - TAB_ICON_LABEL_GAP;
                let galley = ui.painter().layout(
                    self.dragging_label.clone(),
                    font_id,
                    text_color,
                    max_text_width.max(0.0),
                );
                let text_pos = egui::pos2(
                    rect.left() + TAB_CONTENT_PAD_X + TAB_ICON_BADGE_SIZE + TAB_ICON_LABEL_GAP,
                    rect.center().y - galley.size().y / 2.0,
                );
                ui.painter().galley(text_pos, galley, text_color);
            });
    }
}
