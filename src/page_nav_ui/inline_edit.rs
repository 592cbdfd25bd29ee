//! Inline edit tab rendering.
//!
//! A tab in edit mode renders as a framed text field with ✓/✗ buttons in
//! place of its pill. The draft text lives in the widget's
//! [`EditSession`](super::state::EditSession) buffer; nothing reaches the
//! collection until Enter/blur commits or Escape/blur-empty cancels.

use crate::config::PageNavConfig;
use crate::tab::{Tab, TabCollection};
use crate::ui_constants::{
    EDIT_BTN_SIZE, EDIT_FIELD_WIDTH, REVEAL_DELAY_SECS, TAB_CONTENT_PAD_X, TAB_DRAW_SHRINK_Y,
    TAB_ICON_BADGE_SIZE, TAB_ICON_LABEL_GAP, TAB_ROUNDING,
};

use super::PageNavAction;
use super::PageNavUI;
use super::state::{EditSession, PendingReveal};

impl PageNavUI {
    /// Keep the widget's edit session in step with the collection's editing
    /// tab. A newly editing tab seeds the buffer from its label, requests
    /// focus/select-all, and schedules the deferred scroll-to-reveal; a new
    /// session supersedes any pending reveal from a previous one.
    pub(super) fn sync_edit_session(&mut self, collection: &TabCollection, now: f64) {
        match collection.editing_tab() {
            Some(tab) => {
                let stale = self.edit_session.as_ref().is_none_or(|s| s.tab_id != tab.id);
                if stale {
                    self.edit_session = Some(EditSession {
                        tab_id: tab.id,
                        buffer: tab.label.clone(),
                        focus_requested: false,
                    });
                    self.pending_reveal = Some(PendingReveal {
                        tab_id: tab.id,
                        at: now + REVEAL_DELAY_SECS,
                    });
                }
            }
            None => {
                self.edit_session = None;
            }
        }
    }

    /// Render a tab in edit mode and return any action triggered plus the
    /// tab rect.
    pub(super) fn render_edit_tab(
        &mut self,
        ui: &mut egui::Ui,
        tab: &Tab,
        _is_last: bool,
        config: &PageNavConfig,
    ) -> (PageNavAction, egui::Rect) {
        let mut action = PageNavAction::None;
        let tab_id = tab.id;

        let tab_width = TAB_CONTENT_PAD_X * 2.0
            + TAB_ICON_BADGE_SIZE
            + TAB_ICON_LABEL_GAP
            + EDIT_FIELD_WIDTH
            + TAB_ICON_LABEL_GAP
            + EDIT_BTN_SIZE * 2.0;
        let (tab_rect, _) = ui.allocate_exact_size(
            egui::vec2(tab_width, config.strip_height),
            egui::Sense::hover(),
        );

        let draw_rect = tab_rect.shrink2(egui::vec2(0.0, TAB_DRAW_SHRINK_Y));
        let bg = config.tab_editing_background;
        let border = config.tab_editing_border;
        ui.painter().rect_filled(
            draw_rect,
            TAB_ROUNDING,
            egui::Color32::from_rgb(bg[0], bg[1], bg[2]),
        );
        ui.painter().rect_stroke(
            draw_rect,
            TAB_ROUNDING,
            egui::Stroke::new(1.0, egui::Color32::from_rgb(border[0], border[1], border[2])),
            egui::StrokeKind::Inside,
        );

        // Icon badge
        let badge_center = egui::pos2(
            tab_rect.left() + TAB_CONTENT_PAD_X + TAB_ICON_BADGE_SIZE / 2.0,
            tab_rect.center().y,
        );
        let badge = config.badge_active;
        ui.painter().circle_filled(
            badge_center,
            TAB_ICON_BADGE_SIZE / 2.0,
            egui::Color32::from_rgb(badge[0], badge[1], badge[2]),
        );
        if let Some(glyph) = tab.icon.as_deref() {
            ui.painter().text(
                badge_center,
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(10.0),
                egui::Color32::WHITE,
            );
        }

        let Some(session) = self.edit_session.as_mut().filter(|s| s.tab_id == tab_id) else {
            // Session sync happens at frame start; a mismatch here means the
            // collection changed under us this frame. Render inert.
            return (action, tab_rect);
        };

        // Text field
        let field_rect = egui::Rect::from_min_size(
            egui::pos2(
                tab_rect.left() + TAB_CONTENT_PAD_X + TAB_ICON_BADGE_SIZE + TAB_ICON_LABEL_GAP,
                tab_rect.center().y - 10.0,
            ),
            egui::vec2(EDIT_FIELD_WIDTH, 20.0),
        );
        let t = config.tab_editing_text;
        let text_color = egui::Color32::from_rgb(t[0], t[1], t[2]);
        let mut field_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(field_rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
        );
        let output = egui::TextEdit::singleline(&mut session.buffer)
            .desired_width(EDIT_FIELD_WIDTH)
            .font(egui::TextStyle::Button)
            .text_color(text_color)
            .frame(false)
            .hint_text("Tab name")
            .show(&mut field_ui);

        // Focus and select the full text on entry (best effort)
        if !session.focus_requested {
            session.focus_requested = true;
            output.response.request_focus();
            let mut state = output.state;
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::two(
                    egui::text::CCursor::new(0),
                    egui::text::CCursor::new(session.buffer.chars().count()),
                )));
            state.store(ui.ctx(), output.response.id);
        }

        let trimmed_empty = session.buffer.trim().is_empty();
        let buffer = session.buffer.clone();

        // Enter and Escape both surrender focus; losing focus any other way
        // is a blur. Blur with text commits, blur while empty cancels.
        if output.response.lost_focus() {
            let escape = ui.ctx().input(|i| i.key_pressed(egui::Key::Escape));
            if escape || trimmed_empty {
                action = PageNavAction::CancelEdit(tab_id);
            } else {
                action = PageNavAction::CommitEdit(tab_id, buffer.clone());
            }
        }

        // ✓ / ✗ buttons
        let btns_left = field_rect.right() + TAB_ICON_LABEL_GAP;
        let save_rect = egui::Rect::from_center_size(
            egui::pos2(btns_left + EDIT_BTN_SIZE / 2.0, tab_rect.center().y),
            egui::vec2(EDIT_BTN_SIZE, EDIT_BTN_SIZE),
        );
        let cancel_rect = egui::Rect::from_center_size(
            egui::pos2(
                btns_left + EDIT_BTN_SIZE + EDIT_BTN_SIZE / 2.0,
                tab_rect.center().y,
            ),
            egui::vec2(EDIT_BTN_SIZE, EDIT_BTN_SIZE),
        );

        let save_response = ui.interact(
            save_rect,
            egui::Id::new(("page_tab_save", tab_id)),
            egui::Sense::click(),
        );
        let cancel_response = ui.interact(
            cancel_rect,
            egui::Id::new(("page_tab_cancel", tab_id)),
            egui::Sense::click(),
        );

        let badge_completed = config.badge_completed;
        ui.painter().text(
            save_rect.center(),
            egui::Align2::CENTER_CENTER,
            "\u{2713}",
            egui::FontId::proportional(12.0),
            egui::Color32::from_rgb(
                badge_completed[0],
                badge_completed[1],
                badge_completed[2],
            ),
        );
        ui.painter().text(
            cancel_rect.center(),
            egui::Align2::CENTER_CENTER,
            "\u{2715}",
            egui::FontId::proportional(12.0),
            egui::Color32::from_rgb(220, 50, 50),
        );

        if save_response.clicked_by(egui::PointerButton::Primary) && !trimmed_empty {
            action = PageNavAction::CommitEdit(tab_id, buffer);
        } else if cancel_response.clicked_by(egui::PointerButton::Primary) {
            action = PageNavAction::CancelEdit(tab_id);
        }

        (action, tab_rect)
    }
}
