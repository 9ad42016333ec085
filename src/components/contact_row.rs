//! Contact Row Component
//!
//! One contact with its overflow menu (View, Edit, Delete).

use leptos::prelude::*;

use crate::models::Contact;

#[component]
pub fn ContactRow(contact: Contact) -> impl IntoView {
    let id = contact.id;
    let menu_id = format!("contact-menu-{}", id);

    view! {
        <div class="contact-row" data-contact-row=id.to_string()>
            <span class="contact-name">{contact.full_name()}</span>
            <span class="contact-email">{contact.email.clone()}</span>
            <span class="contact-phone">{contact.phone.clone()}</span>
            <div class="overflow-menu" data-overflow-menu="">
                <button type="button" aria-haspopup="menu" aria-controls=menu_id.clone()>
                    "Options"
                </button>
                <div role="menu" id=menu_id hidden=true>
                    <a role="menuitem" href=format!("/contacts/{}", id)>"View"</a>
                    <a role="menuitem" href=format!("/contacts/{}/edit", id)>"Edit"</a>
                    <button type="button" role="menuitem" data-action="delete">"Delete"</button>
                </div>
            </div>
        </div>
    }
}
