// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper; everything it does lives here so
// it can be exercised from tests.
//
// Module responsibilities:
// - `book`: the `BookRecord` data model and its display placeholders.
// - `api`: the `Catalog` seam and the Google Books HTTP client.
// - `store`: the JSON reading list file (initialize, load, append, remove).
// - `selection`: the two-state machine validating a typed Book ID.
// - `ui`: printing, input sources and the search/list/remove flows.
// - `config`: credential and path settings read from the environment.
// - `cli`: clap definitions for the subcommands.
pub mod api;
pub mod book;
pub mod cli;
pub mod config;
pub mod selection;
pub mod store;
pub mod ui;
