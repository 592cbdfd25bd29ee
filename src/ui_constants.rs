//! Named constants for UI layout dimensions and timer durations.
//!
//! Centralising these values makes future DPI scaling and theming easier.
//! Only layout constants and fixed behavior timings belong here; anything a
//! host may reasonably want to tune lives in [`crate::config::PageNavConfig`].

// ---------------------------------------------------------------------------
// Tab rendering  (src/page_nav_ui/tab_rendering.rs)
// ---------------------------------------------------------------------------

/// Horizontal padding inside a tab between the pill edge and its content.
pub const TAB_CONTENT_PAD_X: f32 = 12.0;
/// Vertical shrink applied to a tab's draw rect within the strip row.
pub const TAB_DRAW_SHRINK_Y: f32 = 2.0;
/// Corner radius of the tab pill.
pub const TAB_ROUNDING: f32 = 6.0;
/// Diameter of the round icon badge at the left edge of a tab.
pub const TAB_ICON_BADGE_SIZE: f32 = 20.0;
/// Gap between the icon badge and the tab label.
pub const TAB_ICON_LABEL_GAP: f32 = 8.0;
/// Square size of the ⋮ menu button on the active tab.
pub const TAB_MENU_BTN_SIZE: f32 = 16.0;
/// Gap between the tab label and the menu button.
pub const TAB_MENU_BTN_GAP: f32 = 4.0;

// ---------------------------------------------------------------------------
// Connectors and add affordances  (src/page_nav_ui/connector.rs)
// ---------------------------------------------------------------------------

/// Width of a connector between two tabs in its resting state.
pub const CONNECTOR_WIDTH: f32 = 32.0;
/// Width of a connector once the hover-reveal has split it open.
pub const CONNECTOR_SPLIT_WIDTH: f32 = 80.0;
/// Radius of the ⊕ insert button revealed inside a split connector.
pub const CONNECTOR_BTN_RADIUS: f32 = 8.0;
/// Dash length of the dotted connector line.
pub const CONNECTOR_DASH_LEN: f32 = 3.0;
/// Gap length of the dotted connector line.
pub const CONNECTOR_GAP_LEN: f32 = 3.0;
/// Sustained hover time before a connector reveals its insert button.
/// Canceled immediately when the pointer leaves before it fires.
pub const CONNECTOR_HOVER_DELAY_SECS: f64 = 0.5;

// ---------------------------------------------------------------------------
// Inline edit  (src/page_nav_ui/inline_edit.rs)
// ---------------------------------------------------------------------------

/// Width of the inline rename/create text field.
pub const EDIT_FIELD_WIDTH: f32 = 90.0;
/// Square size of the ✓ / ✗ buttons next to the edit field.
pub const EDIT_BTN_SIZE: f32 = 16.0;

// ---------------------------------------------------------------------------
// Drag and drop  (src/page_nav_ui/drag_drop.rs)
// ---------------------------------------------------------------------------

/// Width of the drop-position indicator line.
pub const DROP_INDICATOR_WIDTH: f32 = 3.0;
/// Radius of the dots capping the drop indicator.
pub const DROP_INDICATOR_CAP_RADIUS: f32 = 3.0;
/// Alpha of the dragged tab left in place while its ghost follows the cursor.
pub const DRAGGED_TAB_ALPHA: u8 = 100;
/// Alpha of the floating ghost tab.
pub const GHOST_ALPHA: u8 = 200;

// ---------------------------------------------------------------------------
// Scrolling  (src/page_nav_ui/scroll.rs)
// ---------------------------------------------------------------------------

/// Width of the ◀ / ▶ overflow scroll buttons.
pub const SCROLL_BTN_WIDTH: f32 = 24.0;
/// Slack at the right scroll boundary guarding float rounding in layout
/// measurements.
pub const SCROLL_EPSILON: f32 = 1.0;
/// Extra margin kept between a revealed tab and the container edge.
pub const REVEAL_MARGIN: f32 = 20.0;
/// Delay between a tab entering edit mode and the scroll-to-reveal, so the
/// edit-mode layout change settles first.
pub const REVEAL_DELAY_SECS: f64 = 0.1;
/// Per-frame fraction of the remaining distance covered by smooth scrolling.
pub const SMOOTH_SCROLL_FACTOR: f32 = 0.25;
/// Distance below which a smooth scroll snaps to its target.
pub const SMOOTH_SCROLL_SNAP: f32 = 0.5;

// ---------------------------------------------------------------------------
// Tab menu  (src/page_nav_ui/menu.rs)
// ---------------------------------------------------------------------------

/// Minimum width of the per-tab dropdown menu.
pub const MENU_MIN_WIDTH: f32 = 180.0;
/// Height of one menu item row.
pub const MENU_ITEM_HEIGHT: f32 = 24.0;
