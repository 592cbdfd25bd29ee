//! Per-tab dropdown menu (set as first page, rename, duplicate, delete).
//!
//! Contains the [`PageNavUI`] method for rendering the menu opened from the
//! active tab's ⋮ button or a secondary click on any tab.

use crate::tab::TabId;
use crate::ui_constants::{MENU_ITEM_HEIGHT, MENU_MIN_WIDTH};

use super::PageNavAction;
use super::PageNavUI;

impl PageNavUI {
    /// Render the dropdown menu for a tab. `can_delete` is false when only
    /// one tab remains (the collection must never become empty).
    pub(super) fn render_menu(
        &mut self,
        ctx: &egui::Context,
        tab_id: TabId,
        can_delete: bool,
    ) -> PageNavAction {
        let mut action = PageNavAction::None;
        let mut close_menu = false;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            close_menu = true;
        }

        let area_response = egui::Area::new(egui::Id::new("page_nav_tab_menu"))
            .fixed_pos(self.menu_pos)
            .constrain(true)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(egui::Margin::symmetric(1, 4))
                    .show(ui, |ui| {
                        ui.set_min_width(MENU_MIN_WIDTH);
                        ui.style_mut().spacing.item_spacing = egui::vec2(0.0, 0.0);

                        let menu_item = |ui: &mut egui::Ui, label: &str, enabled: bool| -> bool {
                            let response = ui.add_enabled(
                                enabled,
                                egui::Button::new(label)
                                    .min_size(egui::vec2(ui.available_width(), MENU_ITEM_HEIGHT))
                                    .frame(false)
                                    .fill(egui::Color32::TRANSPARENT),
                            );
                            response.clicked()
                        };

                        ui.label(egui::RichText::new("Settings").small().strong());
                        ui.add_space(2.0);
                        ui.separator();
                        ui.add_space(2.0);

                        if menu_item(ui, "Set as first page", true) {
                            action = PageNavAction::SetFirst(tab_id);
                            close_menu = true;
                        }
                        if menu_item(ui, "Rename", true) {
                            action = PageNavAction::Rename(tab_id);
                            close_menu = true;
                        }
                        if menu_item(ui, "Duplicate", true) {
                            action = PageNavAction::Duplicate(tab_id);
                            close_menu = true;
                        }

                        ui.add_space(2.0);
                        ui.separator();
                        ui.add_space(2.0);

                        if menu_item(ui, "Delete", can_delete) {
                            action = PageNavAction::Delete(tab_id);
                            close_menu = true;
                        }
                    });
            });

        // Close on click outside, but not on the frame the menu was opened
        // (the opening click would immediately dismiss it)
        let current_frame = ctx.cumulative_frame_nr();
        if current_frame > self.menu_opened_frame
            && ctx.input(|i| i.pointer.any_click())
            && !area_response.response.hovered()
            && !close_menu
            && action == PageNavAction::None
        {
            close_menu = true;
        }

        if close_menu {
            self.menu_tab = None;
        }

        action
    }
}
