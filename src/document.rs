//! The client-side cookie store seam.

use crate::parse::split_pair;
use std::{cell::RefCell, rc::Rc};

/// Narrow read/write capability over the platform's live cookie string.
///
/// In a browser-like host this maps onto the document's cookie property:
/// reading yields the current `"; "`-joined cookie string, and writing a
/// single formatted cookie-set string merges that one cookie into the store.
/// The platform owns the store; implementations only read and append, never
/// clear unrelated entries.
pub trait DocumentStore {
    /// Current cookie string, `name1=value1; name2=value2` form.
    fn read(&self) -> String;

    /// Commit a single formatted cookie-set string.
    fn write(&mut self, formatted: &str);
}

/// In-memory [`DocumentStore`] reproducing the platform's cookie-merge
/// behavior, for tests and non-browser embeddings.
///
/// Cheap-clone shared handle: clones observe the same store, so a test can
/// keep one handle and hand another to the accessor.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pairs: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from an existing cookie string.
    pub fn from_raw(raw: &str) -> Self {
        let doc = Self::new();
        if !raw.is_empty() {
            let mut pairs = doc.pairs.borrow_mut();
            for segment in raw.split(';') {
                let (name, value) = split_pair(segment);
                pairs.push((name.trim_start_matches(' ').to_owned(), value.to_owned()));
            }
        }
        doc
    }
}

impl DocumentStore for MemoryDocument {
    fn read(&self) -> String {
        self.pairs
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&mut self, formatted: &str) {
        // Platform merge: only the name=value head of the set string lands in
        // the store, attributes are metadata for the store itself.
        let head = formatted.split(';').next().unwrap_or_default();
        let (name, value) = split_pair(head);
        let mut pairs = self.pairs.borrow_mut();
        match pairs.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing_value)) => *existing_value = value.to_owned(),
            None => pairs.push((name.to_owned(), value.to_owned())),
        }
    }
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn seeded_store_reads_back() {
        let doc = MemoryDocument::from_raw("id=abc; theme=dark");
        assert_eq!(doc.read(), "id=abc; theme=dark");
    }

    #[test]
    fn write_touches_only_the_named_cookie() {
        let mut doc = MemoryDocument::from_raw("id=abc; theme=dark");
        doc.write("theme=light;path=/;sameSite=Lax;");
        assert_eq!(doc.read(), "id=abc; theme=light");
    }

    #[test]
    fn write_appends_new_cookies() {
        let mut doc = MemoryDocument::from_raw("id=abc");
        doc.write("lang=fr;sameSite=Lax;");
        assert_eq!(doc.read(), "id=abc; lang=fr");
    }

    #[test]
    fn clones_share_the_store() {
        let doc = MemoryDocument::new();
        let mut handle = doc.clone();
        handle.write("a=1;");
        assert_eq!(doc.read(), "a=1");
    }
}
