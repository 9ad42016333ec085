//! Server-Style Fragments
//!
//! Contact rows as HTML strings, the shape a hypermedia backend would swap
//! into the page. The markup matches [`crate::components::ContactRow`].

use crate::models::Contact;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One contact row with its overflow menu
pub fn contact_fragment(contact: &Contact) -> String {
    let id = contact.id;
    let name = escape_html(&contact.full_name());
    let email = escape_html(&contact.email);
    let phone = escape_html(&contact.phone);
    format!(
        r#"<div class="contact-row" data-contact-row="{id}">
    <span class="contact-name">{name}</span>
    <span class="contact-email">{email}</span>
    <span class="contact-phone">{phone}</span>
    <div class="overflow-menu" data-overflow-menu>
        <button type="button" aria-haspopup="menu" aria-controls="contact-menu-{id}">Options</button>
        <div role="menu" id="contact-menu-{id}" hidden>
            <a role="menuitem" href="/contacts/{id}">View</a>
            <a role="menuitem" href="/contacts/{id}/edit">Edit</a>
            <button type="button" role="menuitem" data-action="delete">Delete</button>
        </div>
    </div>
</div>"#
    )
}
