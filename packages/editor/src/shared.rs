//! Thread-safe handle to a [`Library`].
//!
//! Every operation holds the lock for the whole state transition, so
//! concurrent imports append one at a time and the active index always
//! refers to a fully added document. Listeners registered through
//! [`SharedLibrary::subscribe`] are called only after the lock is released.

use crate::collaborators::PatternFetcher;
use crate::errors::LibraryError;
use crate::library::{fetch_document, LibraryEvent};
use crate::{Document, Library};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedListener = Arc<dyn Fn(&LibraryEvent) + Send + Sync>;

#[derive(Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<Library>>,
    /// Events recorded under the library lock, delivered after it is released
    pending: Arc<Mutex<Vec<LibraryEvent>>>,
    listeners: Arc<Mutex<Vec<SharedListener>>>,
}

impl SharedLibrary {
    pub fn new() -> Self {
        Self::from_library(Library::new())
    }

    pub fn from_library(mut library: Library) -> Self {
        let pending = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::clone(&pending);
        library.subscribe(move |event| lock(&queue).push(event.clone()));

        Self {
            inner: Arc::new(Mutex::new(library)),
            pending,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a listener that runs once the library lock is released
    ///
    /// The listener may call back into this handle.
    pub fn subscribe(&self, listener: impl Fn(&LibraryEvent) + Send + Sync + 'static) {
        lock(&self.listeners).push(Arc::new(listener));
    }

    pub fn add(&self, document: Document) -> usize {
        let index = self.lock().add(document);
        self.flush();
        index
    }

    pub fn remove(&self, index: usize) -> Result<Document, LibraryError> {
        let removed = self.lock().remove(index);
        self.flush();
        removed
    }

    pub fn select(&self, index: usize) -> Result<(), LibraryError> {
        let selected = self.lock().select(index);
        self.flush();
        selected
    }

    pub fn clear_all(&self) {
        self.lock().clear_all();
        self.flush();
    }

    /// Fetch outside the lock, then append atomically
    pub fn import(&self, fetcher: &dyn PatternFetcher, url: &str) -> Result<usize, LibraryError> {
        let document = fetch_document(fetcher, url)?;
        Ok(self.add(document))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.lock().active_index()
    }

    /// Snapshot of the active document
    pub fn active(&self) -> Option<Document> {
        self.lock().active().cloned()
    }

    /// Run `f` with exclusive access to the library
    pub fn with<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R {
        let result = f(&mut self.lock());
        self.flush();
        result
    }

    fn lock(&self) -> MutexGuard<'_, Library> {
        lock(&self.inner)
    }

    /// Deliver queued events with no lock held
    fn flush(&self) {
        let events = std::mem::take(&mut *lock(&self.pending));
        if events.is_empty() {
            return;
        }

        let listeners: Vec<SharedListener> = lock(&self.listeners).clone();
        for event in &events {
            for listener in &listeners {
                listener(event);
            }
        }
    }
}

// A panicking listener must not wedge the library
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for SharedLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLibrary")
            .field("len", &self.len())
            .field("active_index", &self.active_index())
            .field("listeners", &format!("{} listeners", lock(&self.listeners).len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_adds_are_atomic() {
        let shared = SharedLibrary::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let index = shared.add(Document::new(format!("{}-{}", t, i), "{}"));
                        // The index handed back always names a real document
                        assert!(shared.with(|lib| lib.get(index).is_some()));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 200);
        assert_eq!(shared.active_index(), Some(199));
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedLibrary::new();
        shared.add(Document::new("A", "{}"));
        shared.add(Document::new("B", "{}"));

        let name = shared.with(|lib| {
            lib.select(0).unwrap();
            lib.active().map(|d| d.name().to_string())
        });

        assert_eq!(name.as_deref(), Some("A"));
        assert_eq!(shared.active().unwrap().name(), "A");
    }

    #[test]
    fn test_listener_can_call_back_into_library() {
        let shared = SharedLibrary::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = shared.clone();
        let sink = Arc::clone(&seen);
        shared.subscribe(move |event| {
            // Reads through the same handle while the event is delivered
            sink.lock().unwrap().push((event.clone(), handle.len(), handle.active_index()));
        });

        shared.add(Document::new("A", "{}"));
        shared.add(Document::new("B", "{}"));
        shared.select(0).unwrap();
        shared.remove(1).unwrap();
        shared.with(|lib| lib.clear_all());

        let seen = seen.lock().unwrap();
        let summary: Vec<(usize, Option<usize>)> =
            seen.iter().map(|(_, len, active)| (*len, *active)).collect();
        assert_eq!(
            summary,
            vec![(1, Some(0)), (2, Some(1)), (2, Some(0)), (1, Some(0)), (0, None)]
        );
        assert!(matches!(seen[4].0, LibraryEvent::Cleared));
    }

    #[test]
    fn test_failed_operation_emits_nothing() {
        let shared = SharedLibrary::new();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        shared.subscribe(move |_| *sink.lock().unwrap() += 1);

        assert!(shared.select(3).is_err());
        assert_eq!(*count.lock().unwrap(), 0);
    }
}
