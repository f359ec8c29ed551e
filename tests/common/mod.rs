//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;

use lightbrarian::api::{Catalog, SearchFilters};
use lightbrarian::book::BookRecord;
use lightbrarian::store::ReadingListStore;
use lightbrarian::ui::LineInput;

// =============================================================================
// FakeCatalog — answers searches from a fixed list, no network
// =============================================================================

pub struct FakeCatalog {
    books: Vec<BookRecord>,
    pub calls: RefCell<Vec<(SearchFilters, u32)>>,
}

impl FakeCatalog {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self {
            books,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Catalog for FakeCatalog {
    /// Returns the books whose title contains the title filter, capped at
    /// `max_results`, in the order they were given.
    fn search(&self, filters: &SearchFilters, max_results: u32) -> anyhow::Result<Vec<BookRecord>> {
        self.calls
            .borrow_mut()
            .push((filters.clone(), max_results));
        Ok(self
            .books
            .iter()
            .filter(|b| match &filters.title {
                Some(t) => b.display_title().contains(t.as_str()),
                None => true,
            })
            .take(max_results as usize)
            .cloned()
            .collect())
    }
}

/// Catalog that always fails, for the error path.
pub struct BrokenCatalog;

impl Catalog for BrokenCatalog {
    fn search(&self, _: &SearchFilters, _: u32) -> anyhow::Result<Vec<BookRecord>> {
        anyhow::bail!("Search failed: 403 Forbidden - API key not valid")
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn sample_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new(
            Some("The Left Hand of Darkness"),
            Some(vec!["Ursula K. Le Guin"]),
            Some("Ace"),
        ),
        BookRecord::new(Some("The Hobbit"), Some(vec!["J. R. R. Tolkien"]), None),
        BookRecord::new(
            Some("The Name of the Rose"),
            Some(vec!["Umberto Eco"]),
            Some("Harcourt"),
        ),
        BookRecord::new(Some("Dune"), Some(vec!["Frank Herbert"]), Some("Chilton")),
        BookRecord::new(Some("The Dispossessed"), None, Some("Harper & Row")),
        BookRecord::new(Some("The Road"), Some(vec!["Cormac McCarthy"]), Some("Knopf")),
        BookRecord::new(Some("The Trial"), Some(vec!["Franz Kafka"]), None),
    ]
}

pub fn numbered_books(n: usize) -> Vec<BookRecord> {
    (1..=n)
        .map(|i| BookRecord::new(Some(format!("Volume {i}").as_str()), None, None))
        .collect()
}

pub fn title_filter(title: &str) -> SearchFilters {
    SearchFilters {
        title: Some(title.to_string()),
        ..SearchFilters::default()
    }
}

/// Initialized store in a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_store() -> (tempfile::TempDir, ReadingListStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ReadingListStore::new(dir.path().join(".lightbrarian/default_reading_list.json"));
    store.ensure_initialized().unwrap();
    (dir, store)
}

/// Input source that replays `answers`, one per line.
pub fn scripted(answers: &[&str]) -> LineInput<Cursor<String>, Vec<u8>> {
    let mut script = answers.join("\n");
    script.push('\n');
    LineInput::new(Cursor::new(script), Vec::<u8>::new())
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// Assert that `result` is an error whose message contains `expected`.
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
