//! Widget Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// A widget root lacks an element its markup contract requires
    #[error("{widget} root is missing its {part}")]
    MissingPart {
        widget: &'static str,
        part: &'static str,
    },
    #[error("no window or document available")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
