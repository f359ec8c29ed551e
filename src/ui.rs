// UI layer: prints books, asks which search result to keep and drives the
// three commands. Output goes to any `Write` and answers come from an
// `InputSource`, so every flow here runs the same way in tests as it does
// on a terminal.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{Catalog, SearchFilters};
use crate::book::BookRecord;
use crate::selection::{Choice, Selection, SelectionState};
use crate::store::{ReadingListStore, StoreError};

/// Where answers to prompts come from.
pub trait InputSource {
    /// Show `prompt` and return the line the user typed, without the newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive terminal prompt backed by `dialoguer`. Empty input is allowed
/// and is handed back as an empty string.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }
}

/// Line-oriented prompt over any reader, used for piped stdin and in tests.
/// Prompts are written to `out` followed by `": "`.
pub struct LineInput<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a Book ID was entered",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Print each book as a numbered four line block followed by `---`.
pub fn print_books<W: Write>(out: &mut W, books: &[BookRecord]) -> io::Result<()> {
    for (i, book) in books.iter().enumerate() {
        writeln!(out, "Book ID: [{}]", i + 1)?;
        writeln!(out, "Title: {}", book.display_title())?;
        writeln!(out, "Author(s): {}", book.display_authors())?;
        writeln!(out, "Publisher: {}", book.display_publisher())?;
        writeln!(out, "---")?;
    }
    Ok(())
}

fn print_search_header<W: Write>(out: &mut W, total: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "---SEARCH RESULTS---")?;
    writeln!(out)?;
    writeln!(out, "Total search results: {total}")?;
    writeln!(out)
}

/// Show `results`, ask for a Book ID until a valid one is given and append
/// the chosen book to `store`. Returns `None` on skip or when there is
/// nothing to choose from; in both cases the store is not touched.
pub fn select_and_save<I, W>(
    results: &[BookRecord],
    store: &ReadingListStore,
    input: &mut I,
    out: &mut W,
) -> Result<Option<BookRecord>>
where
    I: InputSource,
    W: Write,
{
    if results.is_empty() {
        return Ok(None);
    }

    print_books(out, results)?;

    let mut selection = Selection::new(results.len());
    while !selection.is_done() {
        let line = input.read_line(&selection.prompt())?;
        if let Err(rejection) = selection.submit(&line) {
            log::debug!("rejected selection input {line:?}");
            writeln!(out, "{rejection}")?;
        }
    }

    match selection.state() {
        SelectionState::Done(Choice::Book(id)) => {
            let book = results[id - 1].clone();
            store.append(&book)?;
            Ok(Some(book))
        }
        _ => Ok(None),
    }
}

/// `search` command: query the catalog, print the results and offer to save
/// one of them. Returns the results as displayed.
pub fn run_search<C, I, W>(
    catalog: &C,
    filters: &SearchFilters,
    max_results: u32,
    store: &ReadingListStore,
    input: &mut I,
    out: &mut W,
) -> Result<Vec<BookRecord>>
where
    C: Catalog,
    I: InputSource,
    W: Write,
{
    // spinner draws on stderr and stays hidden when it is not a terminal
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Searching...");
    spinner.tick();
    let results = catalog.search(filters, max_results);
    spinner.finish_and_clear();
    let books = results?;

    print_search_header(out, books.len())?;

    if let Some(saved) = select_and_save(&books, store, input, out)? {
        writeln!(out, "Saved \"{}\" to reading list.", saved.display_title())?;
    }
    Ok(books)
}

/// `list` command: print every saved book. A missing reading list is an
/// error, never an empty listing.
pub fn run_list<W: Write>(store: &ReadingListStore, out: &mut W) -> Result<Vec<BookRecord>> {
    let books = store.load()?;
    if books.is_empty() {
        writeln!(out, "Your reading list is empty.")?;
    } else {
        print_books(out, &books)?;
    }
    Ok(books)
}

/// `remove` command: drop the book with the given 1-based Book ID.
pub fn run_remove<W: Write>(
    store: &ReadingListStore,
    book_id: usize,
    out: &mut W,
) -> Result<BookRecord> {
    let removed = match book_id.checked_sub(1).map(|index| store.remove_at(index)) {
        Some(Ok(book)) => book,
        Some(Err(StoreError::IndexOutOfRange { len, .. })) => {
            return Err(missing_book_id(book_id, len))
        }
        Some(Err(e)) => return Err(e.into()),
        None => return Err(missing_book_id(book_id, store.load()?.len())),
    };
    writeln!(out, "Removed: {}", removed.display_title())?;
    Ok(removed)
}

fn missing_book_id(book_id: usize, len: usize) -> anyhow::Error {
    anyhow::anyhow!("Book ID {book_id} does not exist, the reading list has {len} book(s)")
}
