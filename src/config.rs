//! Strip appearance and behavior configuration.
//!
//! Hosts construct a [`PageNavConfig`] once (or deserialize one from their
//! own settings file) and pass it to the widget every frame. All fields are
//! plain data; nothing here is interpreted by the collection itself.

use serde::{Deserialize, Serialize};

/// Visual and behavioral configuration for the page strip.
///
/// Colors are `[r, g, b]` byte triples. The defaults transcribe the
/// reference light palette: near-white strip, white active tab, gray
/// inactive tabs, amber editing accents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageNavConfig {
    /// Height of the strip row in points.
    pub strip_height: f32,
    /// Strip background color.
    pub strip_background: [u8; 3],
    /// Background of the active tab.
    pub tab_active_background: [u8; 3],
    /// Background of inactive tabs.
    pub tab_inactive_background: [u8; 3],
    /// Background of a hovered inactive tab.
    pub tab_hover_background: [u8; 3],
    /// Border color of the active tab.
    pub tab_active_border: [u8; 3],
    /// Label color on the active tab.
    pub tab_active_text: [u8; 3],
    /// Label color on inactive tabs.
    pub tab_inactive_text: [u8; 3],
    /// Background of a tab in edit mode.
    pub tab_editing_background: [u8; 3],
    /// Border color of a tab in edit mode.
    pub tab_editing_border: [u8; 3],
    /// Text color inside the edit field.
    pub tab_editing_text: [u8; 3],
    /// Icon badge fill on the active tab.
    pub badge_active: [u8; 3],
    /// Icon badge fill on completed inactive tabs.
    pub badge_completed: [u8; 3],
    /// Icon badge fill on ordinary inactive tabs.
    pub badge_inactive: [u8; 3],
    /// Connector line color.
    pub connector_color: [u8; 3],
    /// Connector line color while hovered.
    pub connector_hover_color: [u8; 3],
    /// Drop-position indicator color during a drag.
    pub drop_indicator_color: [u8; 3],
    /// Whether inactive completed tabs show a check in place of their icon.
    pub show_completed_badge: bool,
    /// Icon glyph assigned to newly created draft tabs, if any.
    pub default_tab_icon: Option<String>,
}

impl Default for PageNavConfig {
    fn default() -> Self {
        Self {
            strip_height: 48.0,
            strip_background: [249, 250, 251],
            tab_active_background: [255, 255, 255],
            tab_inactive_background: [243, 244, 246],
            tab_hover_background: [229, 231, 235],
            tab_active_border: [229, 231, 235],
            tab_active_text: [17, 24, 39],
            tab_inactive_text: [75, 85, 99],
            tab_editing_background: [255, 251, 235],
            tab_editing_border: [253, 230, 138],
            tab_editing_text: [146, 64, 14],
            badge_active: [245, 158, 11],
            badge_completed: [34, 197, 94],
            badge_inactive: [156, 163, 175],
            connector_color: [209, 213, 219],
            connector_hover_color: [156, 163, 175],
            drop_indicator_color: [80, 160, 255],
            show_completed_badge: true,
            default_tab_icon: Some("\u{1F5CE}".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = PageNavConfig::default();
        assert!(config.strip_height > 0.0);
        assert!(config.show_completed_badge);
        assert!(config.default_tab_icon.is_some());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let mut config = PageNavConfig::default();
        config.strip_height = 56.0;
        config.default_tab_icon = None;

        let json = serde_json::to_string(&config).unwrap();
        let back: PageNavConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: PageNavConfig = serde_json::from_str("{\"strip_height\": 40.0}").unwrap();
        assert_eq!(back.strip_height, 40.0);
        assert_eq!(
            back.tab_active_background,
            PageNavConfig::default().tab_active_background
        );
    }
}
