//! Page Configuration
//!
//! Pages may define `window.widgetsConfig` before the wasm bundle loads
//! to override selectors, the re-scan event or the log level.

use dom_widgets::WidgetConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "widgetsConfig";

/// Read the page's widget config. Missing config means defaults.
pub fn load() -> Result<WidgetConfig, String> {
    let Some(win) = web_sys::window() else {
        return Ok(WidgetConfig::default());
    };
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{e:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(WidgetConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
