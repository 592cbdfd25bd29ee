//! Connectors between tabs and the add-page affordances.
//!
//! Adjacent committed tabs are joined by a dotted connector. Sustained
//! hover splits the connector and reveals a ⊕ button that inserts a draft
//! between the two tabs; the reveal timer is canceled the moment the
//! pointer leaves. Connectors are inert while a drag is in progress. The
//! strip ends with an inert connector and an "+ Add page" button.

use crate::config::PageNavConfig;
use crate::ui_constants::{
    CONNECTOR_BTN_RADIUS, CONNECTOR_DASH_LEN, CONNECTOR_GAP_LEN, CONNECTOR_HOVER_DELAY_SECS,
    CONNECTOR_SPLIT_WIDTH, CONNECTOR_WIDTH, TAB_DRAW_SHRINK_Y,
};

use super::PageNavAction;
use super::PageNavUI;
use super::state::ConnectorHover;

impl PageNavUI {
    /// Render the connector after tab `index`, with the delayed insert
    /// affordance.
    pub(super) fn render_connector(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        config: &PageNavConfig,
        now: f64,
    ) -> PageNavAction {
        let mut action = PageNavAction::None;

        // The armed timer only survives while this connector stays hovered
        let revealed = self
            .connector_hover
            .is_some_and(|h| h.index == index && now >= h.deadline);
        let width = if revealed {
            CONNECTOR_SPLIT_WIDTH
        } else {
            CONNECTOR_WIDTH
        };

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(width, config.strip_height),
            egui::Sense::hover(),
        );

        let hovered = !self.drag_in_progress && response.hovered();
        let line_color = if hovered {
            config.connector_hover_color
        } else {
            config.connector_color
        };
        let stroke = egui::Stroke::new(
            2.0,
            egui::Color32::from_rgb(line_color[0], line_color[1], line_color[2]),
        );

        if hovered {
            match self.connector_hover {
                Some(h) if h.index == index => {}
                _ => {
                    self.connector_hover = Some(ConnectorHover {
                        index,
                        deadline: now + CONNECTOR_HOVER_DELAY_SECS,
                    });
                    ui.ctx().request_repaint_after(std::time::Duration::from_secs_f64(
                        CONNECTOR_HOVER_DELAY_SECS,
                    ));
                }
            }
        } else if self.connector_hover.is_some_and(|h| h.index == index) {
            // Pointer left before (or after) the reveal fired: cancel
            self.connector_hover = None;
        }

        let y = rect.center().y;
        if revealed && hovered {
            // Split connector: two stubs with the ⊕ button in the gap
            let stub = (width - CONNECTOR_BTN_RADIUS * 2.0 - 8.0) / 2.0;
            Self::dotted_line(ui, egui::pos2(rect.left(), y), egui::pos2(rect.left() + stub, y), stroke);
            Self::dotted_line(
                ui,
                egui::pos2(rect.right() - stub, y),
                egui::pos2(rect.right(), y),
                stroke,
            );

            let btn_rect = egui::Rect::from_center_size(
                rect.center(),
                egui::vec2(CONNECTOR_BTN_RADIUS * 2.0, CONNECTOR_BTN_RADIUS * 2.0),
            );
            let btn_response = ui.interact(
                btn_rect,
                egui::Id::new(("page_nav_connector_add", index)),
                egui::Sense::click(),
            );
            let btn_hovered = btn_response.hovered();
            ui.painter().circle(
                btn_rect.center(),
                CONNECTOR_BTN_RADIUS,
                egui::Color32::WHITE,
                egui::Stroke::new(
                    1.0,
                    if btn_hovered {
                        egui::Color32::from_rgb(line_color[0], line_color[1], line_color[2])
                    } else {
                        egui::Color32::from_rgb(
                            config.connector_color[0],
                            config.connector_color[1],
                            config.connector_color[2],
                        )
                    },
                ),
            );
            ui.painter().text(
                btn_rect.center(),
                egui::Align2::CENTER_CENTER,
                "+",
                egui::FontId::proportional(10.0),
                egui::Color32::from_rgb(75, 85, 99),
            );
            if btn_response.clicked_by(egui::PointerButton::Primary) {
                action = PageNavAction::InsertDraftAfter(index);
            }
            if btn_hovered {
                btn_response.on_hover_text("Add page here");
            }
        } else {
            Self::dotted_line(ui, egui::pos2(rect.left(), y), egui::pos2(rect.right(), y), stroke);
        }

        action
    }

    /// Render the inert trailing connector before the add-page button.
    /// No hover effects, no insert affordance.
    pub(super) fn render_trailing_connector(&mut self, ui: &mut egui::Ui, config: &PageNavConfig) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(CONNECTOR_WIDTH, config.strip_height),
            egui::Sense::hover(),
        );
        let c = config.connector_color;
        let stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(c[0], c[1], c[2]));
        let y = rect.center().y;
        Self::dotted_line(ui, egui::pos2(rect.left(), y), egui::pos2(rect.right(), y), stroke);
    }

    /// Render the trailing "+ Add page" button.
    pub(super) fn render_add_page_button(
        &mut self,
        ui: &mut egui::Ui,
        config: &PageNavConfig,
    ) -> PageNavAction {
        let mut action = PageNavAction::None;

        let t = config.tab_inactive_text;
        let btn = ui.add(
            egui::Button::new(
                egui::RichText::new("+ Add page")
                    .color(egui::Color32::from_rgb(t[0], t[1], t[2])),
            )
            .min_size(egui::vec2(0.0, config.strip_height - TAB_DRAW_SHRINK_Y * 2.0))
            .fill(egui::Color32::from_rgb(
                config.tab_inactive_background[0],
                config.tab_inactive_background[1],
                config.tab_inactive_background[2],
            )),
        );
        if btn.clicked_by(egui::PointerButton::Primary) {
            action = PageNavAction::AppendDraft;
        }
        if btn.hovered() {
            btn.on_hover_text("Add page");
        }

        action
    }

    fn dotted_line(ui: &egui::Ui, from: egui::Pos2, to: egui::Pos2, stroke: egui::Stroke) {
        ui.painter().extend(egui::Shape::dashed_line(
            &[from, to],
            stroke,
            CONNECTOR_DASH_LEN,
            CONNECTOR_GAP_LEN,
        ));
    }
}
