//! Content Re-scan
//!
//! Enhances newly inserted markup. The configured content event (htmx's
//! `htmx:load` by default) carries the inserted subtree as its target.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config::WidgetConfig;
use crate::counter::bind_counters;
use crate::dom;
use crate::error::{Result, WidgetError};
use crate::listener::EventListener;
use crate::menu::overflow_menu;

/// Widgets wired by one [`enhance`] pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Enhanced {
    pub counters: usize,
    pub menus: usize,
}

thread_local! {
    static CONTENT_LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

/// Wire every widget under `scope`
pub fn enhance(scope: &Element, config: &WidgetConfig) -> Enhanced {
    Enhanced {
        counters: bind_counters(scope, config),
        menus: overflow_menu(scope, config),
    }
}

/// Wire every widget in the document
pub fn enhance_document(config: &WidgetConfig) -> Result<Enhanced> {
    let scope = dom::document_scope()?;
    Ok(enhance(&scope, config))
}

/// Re-run [`enhance`] on the target of every content event.
///
/// Returns `Ok(false)` if a content listener is already installed.
pub fn listen_for_content(config: &WidgetConfig) -> Result<bool> {
    if CONTENT_LISTENER.with(|slot| slot.borrow().is_some()) {
        return Ok(false);
    }
    let window = web_sys::window().ok_or(WidgetError::NoDocument)?;
    let event = config.rescan_event.clone();
    let config = config.clone();
    let listener = EventListener::new(&window, &event, move |ev| {
        let Some(scope) = event_scope(&ev) else {
            tracing::debug!(event = %config.rescan_event, "content event without an element target");
            return;
        };
        let enhanced = enhance(&scope, &config);
        tracing::debug!(?enhanced, "content re-scanned");
    })?;
    tracing::info!(event = %listener.event(), "listening for inserted content");
    CONTENT_LISTENER.with(|slot| *slot.borrow_mut() = Some(listener));
    Ok(true)
}

/// Stop re-scanning on content events
pub fn stop_listening() {
    CONTENT_LISTENER.with(|slot| slot.borrow_mut().take());
}

fn event_scope(ev: &Event) -> Option<Element> {
    let target = ev.target()?;
    if let Some(doc) = target.dyn_ref::<Document>() {
        return doc.document_element();
    }
    target.dyn_into::<Element>().ok()
}
