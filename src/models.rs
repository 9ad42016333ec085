//! Demo Models

use serde::{Deserialize, Serialize};

/// Contact shown as one row of the demo list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub first: String,
    pub last: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    fn new(id: u32, first: &str, last: &str) -> Self {
        Self {
            id,
            first: first.to_string(),
            last: last.to_string(),
            phone: format!("555-01{:02}", id % 100),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

const NAMES: [(&str, &str); 6] = [
    ("Ada", "Lovelace"),
    ("Grace", "Hopper"),
    ("Alan", "Turing"),
    ("Edsger", "Dijkstra"),
    ("Barbara", "Liskov"),
    ("Ken", "Thompson"),
];

pub const PAGE_SIZE: u32 = 3;

/// Contacts for one page of the list, page 0 being the initial render
pub fn contacts_page(page: u32) -> Vec<Contact> {
    (0..PAGE_SIZE)
        .map(|offset| {
            let id = page * PAGE_SIZE + offset + 1;
            let (first, last) = NAMES[(id as usize - 1) % NAMES.len()];
            Contact::new(id, first, last)
        })
        .collect()
}
