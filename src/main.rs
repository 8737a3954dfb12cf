//! Address Book entry point
//!
//! Loads the book, runs the interactive session on the terminal, and saves
//! on exit.

use std::io;
use std::process;

use address_book::{CliError, Config, Session, load};

fn run() -> Result<(), CliError> {
    let config = Config::default();
    let book = load(config.path())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let book = Session::new(book, config, stdin.lock(), stdout.lock()).run()?;

    log::info!("Session ended with {} contacts", book.len());
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Address Book starting...");

    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
