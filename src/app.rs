//! Widgets Demo App
//!
//! A contact list in the style of a hypermedia app. "Load more" swaps in
//! HTML fragments and announces them with the re-scan event, the way htmx
//! fires `htmx:load` after a swap.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Element};

use crate::components::{ContactRow, CounterCard};
use crate::fragment::contact_fragment;
use crate::models::contacts_page;

/// Pages available through "Load more"
const MAX_PAGES: u32 = 3;

#[component]
pub fn App(#[prop(into)] rescan_event: String) -> impl IntoView {
    let (page, set_page) = signal(0u32);
    let loaded_ref = NodeRef::<leptos::html::Div>::new();

    // Append the next page as raw HTML and announce it
    let load_more = move |_: web_sys::MouseEvent| {
        let next = page.get_untracked() + 1;
        let Some(container) = loaded_ref.get_untracked() else { return };
        let html: String = contacts_page(next).iter().map(contact_fragment).collect();
        match insert_fragment(&container, &html, &rescan_event) {
            Ok(()) => {
                set_page.set(next);
                tracing::info!(page = next, "contacts loaded");
            }
            Err(err) => tracing::warn!(?err, "could not insert contacts"),
        }
    };

    // Delegated so it also covers rows inserted as fragments
    let on_list_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else { return };
        if !matches!(target.closest("[data-action=delete]"), Ok(Some(_))) {
            return;
        }
        if let Ok(Some(row)) = target.closest("[data-contact-row]") {
            tracing::info!(contact = ?row.get_attribute("data-contact-row"), "contact removed");
            row.remove();
        }
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Contacts"</h1>

                <CounterCard />

                <div class="contact-list" on:click=on_list_click>
                    {contacts_page(0)
                        .into_iter()
                        .map(|contact| view! { <ContactRow contact=contact /> })
                        .collect_view()}
                    <div class="contact-pages" node_ref=loaded_ref></div>
                </div>

                <button
                    type="button"
                    class="load-more"
                    disabled=move || page.get() >= MAX_PAGES
                    on:click=load_more
                >
                    "Load more"
                </button>
            </main>
        </div>
    }
}

/// Append `html` under `container` and fire `event` on the new subtree
fn insert_fragment(container: &Element, html: &str, event: &str) -> Result<(), wasm_bindgen::JsValue> {
    let doc = container
        .owner_document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("container has no document"))?;
    let page = doc.create_element("div")?;
    page.set_class_name("contact-page");
    page.set_inner_html(html);
    container.append_child(&page)?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    let ev = CustomEvent::new_with_event_init_dict(event, &init)?;
    page.dispatch_event(&ev)?;
    Ok(())
}
