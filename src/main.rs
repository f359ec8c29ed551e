// Entrypoint for the CLI application.
// - Parse arguments, then read configuration; a missing credential stops
//   the process before the reading list is touched.
// - Make sure the reading list exists, then hand off to the command flow.

use std::io::{self, IsTerminal};

use clap::Parser;
use lightbrarian::api::GoogleBooksClient;
use lightbrarian::cli::{Cli, Command};
use lightbrarian::config::Config;
use lightbrarian::store::ReadingListStore;
use lightbrarian::ui::{self, LineInput, TerminalInput};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let store = ReadingListStore::new(config.reading_list_path());
    store.ensure_initialized()?;
    log::debug!("using reading list {}", store.path().display());

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Search(args) => {
            let api = GoogleBooksClient::new(&config)?;
            let filters = args.filters();
            if io::stdin().is_terminal() {
                ui::run_search(
                    &api,
                    &filters,
                    args.max_results,
                    &store,
                    &mut TerminalInput,
                    &mut out,
                )?;
            } else {
                // prompts go to stderr, as dialoguer does on a terminal
                let mut input = LineInput::new(io::stdin().lock(), io::stderr());
                ui::run_search(&api, &filters, args.max_results, &store, &mut input, &mut out)?;
            }
        }
        Command::List => {
            ui::run_list(&store, &mut out)?;
        }
        Command::Remove { book_id } => {
            ui::run_remove(&store, book_id, &mut out)?;
        }
    }
    Ok(())
}
