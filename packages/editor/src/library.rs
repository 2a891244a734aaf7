//! # Library
//!
//! Ordered collection of documents with a single active selection.
//!
//! ## Active index rules
//!
//! | Operation     | Effect on `active_index`                                  |
//! |---------------|-----------------------------------------------------------|
//! | `add`         | set to the new last index                                 |
//! | `remove(i)`   | `== i`: `None` if now empty, else `min(i, len - 1)`       |
//! |               | `> i`: decrement (same logical document)                  |
//! |               | `< i` or `None`: unchanged                                |
//! | `select(i)`   | set to `i`                                                |
//! | `clear_all`   | `None`                                                    |
//!
//! Invalid indices fail with [`LibraryError::IndexOutOfRange`] and leave the
//! library untouched.

use crate::collaborators::{HapticPlayer, PatternFetcher};
use crate::errors::{FetchError, LibraryError};
use crate::mutations::Mutation;
use crate::Document;
use ahap_parser::DocumentId;
use tracing::info;

/// Change notification delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    Added { index: usize, id: DocumentId },
    Removed { index: usize, id: DocumentId, active: Option<usize> },
    Selected { index: usize },
    Updated { index: usize, id: DocumentId },
    Cleared,
}

type Listener = Box<dyn Fn(&LibraryEvent) + Send>;

/// Collection of pattern documents
#[derive(Default)]
pub struct Library {
    documents: Vec<Document>,
    active_index: Option<usize>,
    listeners: Vec<Listener>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every successful state change
    ///
    /// Listeners run synchronously inside the operation. Behind a
    /// [`crate::SharedLibrary`] that means the lock is held, so use
    /// [`crate::SharedLibrary::subscribe`] for listeners that call back into it.
    pub fn subscribe(&mut self, listener: impl Fn(&LibraryEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append a document and make it active
    pub fn add(&mut self, document: Document) -> usize {
        let id = document.id();
        self.documents.push(document);

        let index = self.documents.len() - 1;
        self.active_index = Some(index);

        info!(index, document = %id, len = self.documents.len(), "Document added");
        self.emit(LibraryEvent::Added { index, id });
        index
    }

    /// Remove the document at `index`
    pub fn remove(&mut self, index: usize) -> Result<Document, LibraryError> {
        self.check_index(index)?;

        let removed = self.documents.remove(index);
        let len = self.documents.len();

        self.active_index = match self.active_index {
            Some(active) if active == index => {
                if len == 0 {
                    None
                } else {
                    Some(index.min(len - 1))
                }
            }
            Some(active) if active > index => Some(active - 1),
            other => other,
        };

        info!(index, document = %removed.id(), len, active = ?self.active_index, "Document removed");
        self.emit(LibraryEvent::Removed {
            index,
            id: removed.id(),
            active: self.active_index,
        });
        Ok(removed)
    }

    /// Make the document at `index` active
    pub fn select(&mut self, index: usize) -> Result<(), LibraryError> {
        self.check_index(index)?;

        self.active_index = Some(index);

        info!(index, "Document selected");
        self.emit(LibraryEvent::Selected { index });
        Ok(())
    }

    /// Remove every document
    pub fn clear_all(&mut self) {
        let len = self.documents.len();
        self.documents.clear();
        self.active_index = None;

        info!(removed = len, "Library cleared");
        self.emit(LibraryEvent::Cleared);
    }

    /// Replace the content of the document at `index`
    pub fn update(&mut self, index: usize, content: impl Into<String>) -> Result<(), LibraryError> {
        self.check_index(index)?;

        self.documents[index].update_content(content);
        self.notify_updated(index);
        Ok(())
    }

    /// Replace the content of the active document
    ///
    /// Returns `false` when nothing is active.
    pub fn update_active_content(&mut self, content: impl Into<String>) -> bool {
        match self.active_index {
            Some(index) => {
                self.documents[index].update_content(content);
                self.notify_updated(index);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<(), LibraryError> {
        self.check_index(index)?;

        self.documents[index].rename(name);
        self.notify_updated(index);
        Ok(())
    }

    /// Apply an event mutation to the document at `index`
    pub fn apply(&mut self, index: usize, mutation: &Mutation) -> Result<(), LibraryError> {
        self.check_index(index)?;

        self.documents[index].apply(mutation)?;
        self.notify_updated(index);
        Ok(())
    }

    /// Fetch AHAP text from `url` and add it as a new active document
    pub fn import(
        &mut self,
        fetcher: &dyn PatternFetcher,
        url: &str,
    ) -> Result<usize, LibraryError> {
        let document = fetch_document(fetcher, url)?;
        Ok(self.add(document))
    }

    /// Play the active document's canonical content
    pub fn play_active(&self, player: &mut dyn HapticPlayer) -> Result<(), LibraryError> {
        let document = self.active().ok_or(LibraryError::NoActiveDocument)?;
        document.play(player)?;
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active(&self) -> Option<&Document> {
        self.active_index.and_then(|i| self.documents.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Index of the document with `id`
    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id() == id)
    }

    /// Remove a document by identity rather than position
    pub fn remove_by_id(&mut self, id: DocumentId) -> Result<Document, LibraryError> {
        let index = self.position(id).ok_or(LibraryError::DocumentNotFound(id))?;
        self.remove(index)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), LibraryError> {
        if index < self.documents.len() {
            Ok(())
        } else {
            Err(LibraryError::IndexOutOfRange {
                index,
                len: self.documents.len(),
            })
        }
    }

    fn notify_updated(&self, index: usize) {
        let id = self.documents[index].id();
        self.emit(LibraryEvent::Updated { index, id });
    }

    fn emit(&self, event: LibraryEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

/// Fetch `url` and wrap the content in a document named after it
///
/// Does not touch any library, so callers can fetch without holding a lock.
pub(crate) fn fetch_document(
    fetcher: &dyn PatternFetcher,
    url: &str,
) -> Result<Document, LibraryError> {
    if url.trim().is_empty() {
        return Err(FetchError::InvalidUrl(url.to_string()).into());
    }

    let content = fetcher.fetch(url)?;
    Ok(Document::from_download(url, content))
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("documents", &self.documents)
            .field("active_index", &self.active_index)
            .field("listeners", &format!("{} listeners", self.listeners.len()))
            .finish()
    }
}
