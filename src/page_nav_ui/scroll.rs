//! Scroll viewport management for the tab area.
//!
//! Overflow state is a pure function of (content width, container width,
//! offset), recomputed every frame rather than stored, so the scroll
//! affordances can never drift from actual scrollability. Smooth scrolling
//! approaches a target offset exponentially with repaint requests, and the
//! post-edit scroll-to-reveal runs on a short deadline so the edit-mode
//! layout change settles first.

use crate::tab::TabId;
use crate::ui_constants::{
    REVEAL_MARGIN, SCROLL_EPSILON, SMOOTH_SCROLL_FACTOR, SMOOTH_SCROLL_SNAP,
};

use super::PageNavUI;

/// Derived overflow state of the tab area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Content is wider than the container.
    pub needs_scrolling: bool,
    /// The offset is past the start.
    pub can_scroll_left: bool,
    /// The offset is short of the end (with epsilon slack for layout
    /// rounding).
    pub can_scroll_right: bool,
}

/// Derive the overflow state from layout measurements. Pure; never stored
/// authoritatively.
pub fn derive_scroll_state(content_width: f32, container_width: f32, offset: f32) -> ScrollState {
    let needs_scrolling = content_width > container_width;
    ScrollState {
        needs_scrolling,
        can_scroll_left: offset > 0.0,
        can_scroll_right: offset < content_width - container_width - SCROLL_EPSILON,
    }
}

impl PageNavUI {
    fn max_scroll(&self) -> f32 {
        (self.last_content_width - self.last_container_rect.width()).max(0.0)
    }

    /// Smooth-scroll the tab area to the start.
    pub fn scroll_to_start(&mut self) {
        self.scroll_target = Some(0.0);
    }

    /// Smooth-scroll the tab area to the end.
    pub fn scroll_to_end(&mut self) {
        self.scroll_target = Some(self.max_scroll());
    }

    /// Advance an in-flight smooth scroll by one frame.
    pub(super) fn step_scroll_animation(&mut self, ctx: &egui::Context) {
        if let Some(target) = self.scroll_target {
            let target = target.clamp(0.0, self.max_scroll());
            let delta = target - self.scroll_offset;
            if delta.abs() <= SMOOTH_SCROLL_SNAP {
                self.scroll_offset = target;
                self.scroll_target = None;
            } else {
                self.scroll_offset += delta * SMOOTH_SCROLL_FACTOR;
                ctx.request_repaint();
            }
        }
    }

    /// Scroll by the minimal delta (plus a fixed margin) to bring a tab
    /// fully into view. Uses the rects cached during the last layout pass;
    /// a tab already fully visible is left alone.
    pub fn scroll_to_reveal(&mut self, tab_id: TabId) {
        let Some((_, tab_rect)) = self.tab_rects.iter().find(|(id, _)| *id == tab_id) else {
            return;
        };
        let container = self.last_container_rect;
        if container.width() <= 0.0 {
            return;
        }

        let fully_visible =
            tab_rect.left() >= container.left() && tab_rect.right() <= container.right();
        if fully_visible {
            return;
        }

        let delta = if tab_rect.left() < container.left() {
            tab_rect.left() - container.left() - REVEAL_MARGIN
        } else {
            tab_rect.right() - container.right() + REVEAL_MARGIN
        };
        self.scroll_target = Some((self.scroll_offset + delta).clamp(0.0, self.max_scroll()));
    }

    /// Fire the deferred post-edit reveal once its deadline passes.
    pub(super) fn process_pending_reveal(&mut self, now: f64, ctx: &egui::Context) {
        if let Some(pending) = self.pending_reveal {
            if now >= pending.at {
                self.pending_reveal = None;
                self.scroll_to_reveal(pending.tab_id);
            } else {
                ctx.request_repaint_after(std::time::Duration::from_secs_f64(pending.at - now));
            }
        }
    }

    /// Redirect mouse-wheel input over the tab area to horizontal scroll.
    /// The strip has no vertical axis, so vertical wheel delta maps to
    /// horizontal offset. Manual wheel input cancels a smooth scroll.
    pub(super) fn handle_wheel(&mut self, ui: &egui::Ui, area: egui::Rect) {
        if !ui.rect_contains_pointer(area) {
            return;
        }
        let delta = ui.input(|i| i.raw_scroll_delta);
        let combined = delta.x + delta.y;
        if combined != 0.0 {
            self.scroll_target = None;
            self.scroll_offset = (self.scroll_offset - combined).clamp(0.0, self.max_scroll());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overflow_when_content_fits() {
        let state = derive_scroll_state(300.0, 400.0, 0.0);
        assert!(!state.needs_scrolling);
        assert!(!state.can_scroll_left);
        assert!(!state.can_scroll_right);
    }

    #[test]
    fn overflow_at_start_can_only_scroll_right() {
        let state = derive_scroll_state(800.0, 400.0, 0.0);
        assert!(state.needs_scrolling);
        assert!(!state.can_scroll_left);
        assert!(state.can_scroll_right);
    }

    #[test]
    fn overflow_in_middle_can_scroll_both_ways() {
        let state = derive_scroll_state(800.0, 400.0, 200.0);
        assert!(state.can_scroll_left);
        assert!(state.can_scroll_right);
    }

    #[test]
    fn overflow_at_end_can_only_scroll_left() {
        let state = derive_scroll_state(800.0, 400.0, 400.0);
        assert!(state.can_scroll_left);
        assert!(!state.can_scroll_right);
    }

    #[test]
    fn epsilon_guards_the_right_boundary() {
        // Half a point short of the end: inside the epsilon, treated as at
        // the end
        let state = derive_scroll_state(800.0, 400.0, 399.5);
        assert!(!state.can_scroll_right);
    }
}
