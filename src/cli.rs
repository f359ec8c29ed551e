//! Command line definitions.

use clap::{Args, Parser, Subcommand};

use crate::api::SearchFilters;

/// A command line application to search for books and construct a reading list.
#[derive(Parser, Debug)]
#[command(name = "lightbrarian")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for available books
    Search(SearchArgs),

    /// List books from reading list
    List,

    /// Remove a book from the reading list by the Book ID shown by `list`
    Remove {
        /// Book ID as printed by `list`
        book_id: usize,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// The maximum number of search results to return
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=40))]
    pub max_results: u32,
}

/// At least one of these must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = true)]
pub struct FilterArgs {
    /// A book title to search for
    #[arg(long)]
    pub book_title: Option<String>,

    /// A book author to search for
    #[arg(long)]
    pub book_author: Option<String>,

    /// A book publisher to search for
    #[arg(long)]
    pub book_publisher: Option<String>,
}

impl SearchArgs {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            title: self.filters.book_title.clone(),
            author: self.filters.book_author.clone(),
            publisher: self.filters.book_publisher.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_requires_a_filter() {
        let err = Cli::try_parse_from(["lightbrarian", "search"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn search_accepts_any_combination_of_filters() {
        let cli = Cli::try_parse_from([
            "lightbrarian",
            "search",
            "--book-author",
            "Ursula K. Le Guin",
            "--book-publisher",
            "Ace",
        ])
        .unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.max_results, 5);
        let filters = args.filters();
        assert_eq!(filters.title, None);
        assert_eq!(filters.author.as_deref(), Some("Ursula K. Le Guin"));
        assert_eq!(filters.publisher.as_deref(), Some("Ace"));
    }

    #[test]
    fn max_results_is_bounded() {
        assert!(Cli::try_parse_from([
            "lightbrarian",
            "search",
            "--book-title",
            "The",
            "--max-results",
            "41"
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "lightbrarian",
            "search",
            "--book-title",
            "The",
            "--max-results",
            "0"
        ])
        .is_err());
    }

    #[test]
    fn list_and_remove_parse() {
        let cli = Cli::try_parse_from(["lightbrarian", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));

        let cli = Cli::try_parse_from(["lightbrarian", "remove", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Remove { book_id: 2 }));
    }
}
