//! Widget Configuration
//!
//! Selectors and event names the widgets bind to. Every field has a
//! default, so a page only overrides what its markup does differently.

use serde::Deserialize;

pub const DEFAULT_COUNTER_SELECTOR: &str = "[data-counter-js-rsjs]";
pub const DEFAULT_MENU_SELECTOR: &str = "[data-overflow-menu]";
/// Fired by htmx on every newly swapped-in element
pub const DEFAULT_RESCAN_EVENT: &str = "htmx:load";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Counter roots
    pub counter_selector: String,
    /// Overflow menu roots
    pub menu_selector: String,
    /// Event whose target is a freshly inserted subtree to enhance
    pub rescan_event: String,
    /// `tracing` level name for the console logger
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            counter_selector: DEFAULT_COUNTER_SELECTOR.to_string(),
            menu_selector: DEFAULT_MENU_SELECTOR.to_string(),
            rescan_event: DEFAULT_RESCAN_EVENT.to_string(),
            log_level: "info".to_string(),
        }
    }
}
