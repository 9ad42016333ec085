//! DOM Helpers

use js_sys::{Object, WeakSet};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList};

use crate::error::{Result, WidgetError};

/// Root element of the current document
pub fn document_scope() -> Result<Element> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .ok_or(WidgetError::NoDocument)
}

/// Elements matching `selector` under `scope`, including `scope` itself
pub(crate) fn matching(scope: &Element, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if scope.matches(selector).unwrap_or(false) {
        found.push(scope.clone());
    }
    match scope.query_selector_all(selector) {
        Ok(list) => found.extend(elements(&list)),
        Err(err) => tracing::warn!(selector, ?err, "invalid selector"),
    }
    found
}

/// First descendant of `scope` matching `selector`
pub(crate) fn first_html(scope: &Element, selector: &str) -> Option<HtmlElement> {
    scope
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All descendants of `scope` matching `selector`, in document order
pub(crate) fn all_html(scope: &Element, selector: &str) -> Vec<HtmlElement> {
    scope
        .query_selector_all(selector)
        .map(|list| {
            elements(&list)
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect()
        })
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

/// "Already initialised" marker per widget root.
///
/// Backed by a JS `WeakSet`, so it neither keeps removed roots alive nor
/// travels with cloned markup the way a data attribute would.
pub(crate) struct WiredSet(WeakSet);

impl WiredSet {
    pub fn new() -> Self {
        Self(WeakSet::new())
    }

    pub fn contains(&self, root: &Element) -> bool {
        self.0.has(as_object(root))
    }

    /// Mark `root`. Returns false if it was already marked.
    pub fn insert(&self, root: &Element) -> bool {
        if self.contains(root) {
            return false;
        }
        self.0.add(as_object(root));
        true
    }

    pub fn remove(&self, root: &Element) {
        self.0.delete(as_object(root));
    }
}

fn as_object(root: &Element) -> &Object {
    root.unchecked_ref()
}
