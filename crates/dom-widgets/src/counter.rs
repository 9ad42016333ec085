//! Counter Widget
//!
//! A click on the increment control adds one to the number shown by the
//! output element. Markup:
//!
//! ```html
//! <div data-counter-js-rsjs>
//!   <output data-counter-output>0</output>
//!   <button data-counter-increment>Increment</button>
//! </div>
//! ```
//!
//! Values are plain decimal text with no upper bound. Numbers outside the
//! `i64` range are incremented digit by digit.

use std::cell::RefCell;

use thiserror::Error;
use web_sys::Element;

use crate::config::WidgetConfig;
use crate::dom::{self, WiredSet};
use crate::error::{Result, WidgetError};
use crate::listener::EventListener;

const OUTPUT_SELECTOR: &str = "[data-counter-output]";
const INCREMENT_SELECTOR: &str = "[data-counter-increment]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("counter text {0:?} is not an integer")]
    NotANumber(String),
}

/// Text to display after one increment of `text`.
///
/// Surrounding whitespace is ignored and empty text counts as zero.
pub fn next_value(text: &str) -> std::result::Result<String, CountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok("1".to_string());
    }
    if let Some(next) = trimmed.parse::<i64>().ok().and_then(|n| n.checked_add(1)) {
        return Ok(next.to_string());
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CountError::NotANumber(trimmed.to_string()));
    }
    // Only magnitudes beyond i64 get here, so neither side reaches zero.
    let digits = digits.trim_start_matches('0');
    Ok(if negative {
        format!("-{}", decrement_digits(digits))
    } else {
        increment_digits(digits)
    })
}

fn increment_digits(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&out))
}

/// `digits` must be greater than zero
fn decrement_digits(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'0' {
            *b = b'9';
        } else {
            *b -= 1;
            break;
        }
    }
    let text = String::from_utf8_lossy(&out);
    let trimmed = text.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

struct Counter {
    root: Element,
    _click: EventListener,
}

struct Counters {
    wired: WiredSet,
    counters: Vec<Counter>,
}

impl Counters {
    fn new() -> Self {
        Self {
            wired: WiredSet::new(),
            counters: Vec::new(),
        }
    }

    /// Drop counters whose root left the page, removing their listeners
    fn release_detached(&mut self) {
        let wired = &self.wired;
        self.counters.retain(|counter| {
            let attached = counter.root.is_connected();
            if !attached {
                wired.remove(&counter.root);
            }
            attached
        });
    }
}

thread_local! {
    static COUNTERS: RefCell<Counters> = RefCell::new(Counters::new());
}

/// Wire every counter under `scope` that is not wired yet.
///
/// Malformed roots are logged and skipped. Returns how many were wired.
pub fn bind_counters(scope: &Element, config: &WidgetConfig) -> usize {
    COUNTERS.with(|counters| {
        let mut counters = counters.borrow_mut();
        counters.release_detached();

        let mut bound = 0;
        for root in dom::matching(scope, &config.counter_selector) {
            if counters.wired.contains(&root) {
                continue;
            }
            match bind(&root) {
                Ok(counter) => {
                    counters.wired.insert(&root);
                    counters.counters.push(counter);
                    bound += 1;
                }
                Err(err) => tracing::warn!(%err, id = %root.id(), "skipping counter"),
            }
        }
        if bound > 0 {
            tracing::debug!(bound, "counters wired");
        }
        bound
    })
}

/// Number of wired counters whose root is still in the page
pub fn counter_count() -> usize {
    COUNTERS.with(|counters| {
        let mut counters = counters.borrow_mut();
        counters.release_detached();
        counters.counters.len()
    })
}

fn bind(root: &Element) -> Result<Counter> {
    let missing = |part| WidgetError::MissingPart {
        widget: "counter",
        part,
    };
    let output = dom::first_html(root, OUTPUT_SELECTOR).ok_or_else(|| missing("output"))?;
    let increment = dom::first_html(root, INCREMENT_SELECTOR).ok_or_else(|| missing("increment control"))?;

    let click = EventListener::new(&increment, "click", move |_| {
        let text = output.text_content().unwrap_or_default();
        match next_value(&text) {
            Ok(next) => output.set_text_content(Some(&next)),
            Err(err) => tracing::warn!(%err, "counter not incremented"),
        }
    })?;

    Ok(Counter {
        root: root.clone(),
        _click: click,
    })
}
