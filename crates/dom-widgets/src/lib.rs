//! DOM Widgets
//!
//! Progressive enhancement for server-rendered pages: an incrementing
//! counter and an accessible overflow menu. Widgets attach to existing
//! markup by attributes and re-attach to content inserted later.
//!
//! ```no_run
//! use dom_widgets::{enhance_document, listen_for_content, WidgetConfig};
//!
//! let config = WidgetConfig::default();
//! enhance_document(&config).ok();
//! listen_for_content(&config).ok();
//! ```

pub mod click_away;
pub mod config;
pub mod counter;
pub mod error;
pub mod listener;
pub mod menu;
mod dom;
mod rescan;

pub use config::WidgetConfig;
pub use counter::{bind_counters, counter_count, next_value, CountError};
pub use dom::document_scope;
pub use error::{Result, WidgetError};
pub use menu::overflow_menu;
pub use rescan::{enhance, enhance_document, listen_for_content, stop_listening, Enhanced};
