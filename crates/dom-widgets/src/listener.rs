//! Event Listener Guard
//!
//! Owns a closure registered on an `EventTarget` and unregisters it on drop,
//! so a widget's listeners live exactly as long as the widget.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::Result;

pub struct EventListener {
    target: EventTarget,
    event: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `handler` for `event` on `target`
    pub fn new<F>(target: &EventTarget, event: &str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event: event.to_string(),
            callback,
        })
    }

    pub fn event(&self) -> &str {
        &self.event
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event, self.callback.as_ref().unchecked_ref());
    }
}
