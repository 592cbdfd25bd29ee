// Library exports for embedding and testing
//
// page-nav is an embeddable page-tab strip for egui hosts. The canonical tab
// order and active-tab id live in `tab::TabCollection`, which is the only
// component that mutates them; the widget layer in `page_nav_ui` turns input
// into `PageNavAction`s, the collection validates and applies them, and the
// host observes the results by draining `PageNavEvent`s each frame.
//
// All state is process-local and ephemeral. There is no persistence and no
// fatal error path: invalid operations are silent no-ops logged at debug
// level.

/// Crate version (for hosts that surface it in diagnostics).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod page_nav_ui;
pub mod tab;
pub mod ui_constants;
