//! Interactive command loop
//!
//! Reads one command per line (`add`, `get`, `exit`) and dispatches it
//! against the session's [`AddressBook`]. Generic over the console so the
//! binary can hand it stdin/stdout and tests can hand it in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::book::AddressBook;
use crate::config::Config;
use crate::persistence::{self, PersistError};

pub const BANNER: &str = "Address book.\n\
    - You can add new contacts, look up the address of an existing contact \
    and keep your data between sessions.";
pub const COMMAND_PROMPT: &str = "Enter command (add, get, exit): ";
pub const NAME_PROMPT: &str = "Enter name: ";
pub const ADDRESS_PROMPT: &str = "Enter address: ";
pub const SAVED_MESSAGE: &str = "Address book saved. Exiting program.";
pub const HELP_MESSAGE: &str = "Available commands: add, get, exit";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("console error: {0}")]
    Console(#[from] io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// A command typed at the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Get,
    Exit,
    Unknown,
}

impl Command {
    /// Parse a command line, ignoring surrounding whitespace and case
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "add" => Command::Add,
            "get" => Command::Get,
            "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Get => "get",
            Command::Exit => "exit",
            Command::Unknown => "unknown",
        }
    }
}

/// One interactive session over a loaded address book
pub struct Session<R, W> {
    book: AddressBook,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: AddressBook, config: Config, input: R, output: W) -> Self {
        Self {
            book,
            config,
            input,
            output,
        }
    }

    /// Run until `exit` or end of input, saving the book on the way out
    ///
    /// Returns the final book.
    pub fn run(mut self) -> Result<AddressBook, CliError> {
        writeln!(self.output, "{BANNER}")?;

        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                // EOF behaves like `exit`
                writeln!(self.output)?;
                break;
            };

            let command = Command::parse(&line);
            log::debug!("Dispatching command: {}", command.as_str());

            match command {
                Command::Add => {
                    if !self.add()? {
                        writeln!(self.output)?;
                        break;
                    }
                }
                Command::Get => {
                    if !self.get()? {
                        writeln!(self.output)?;
                        break;
                    }
                }
                Command::Exit => break,
                Command::Unknown => writeln!(self.output, "{HELP_MESSAGE}")?,
            }
        }

        self.exit()?;
        Ok(self.book)
    }

    /// Prompt for a name and an address and store them. `false` on EOF.
    fn add(&mut self) -> Result<bool, CliError> {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(false);
        };
        let Some(address) = self.prompt(ADDRESS_PROMPT)? else {
            return Ok(false);
        };

        self.book.add_contact(name, address);
        Ok(true)
    }

    /// Prompt for a name and print its address. `false` on EOF.
    fn get(&mut self) -> Result<bool, CliError> {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(false);
        };

        let address = self.book.get_contact(&name);
        writeln!(self.output, "{address}")?;
        Ok(true)
    }

    fn exit(&mut self) -> Result<(), CliError> {
        persistence::save(&self.book, self.config.path())?;
        writeln!(self.output, "{SAVED_MESSAGE}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `text` and read one line, without its line terminator
    ///
    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CONTACT_NOT_FOUND;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(dir: &TempDir, book: AddressBook, script: &str) -> (AddressBook, String) {
        let config = Config::with_path(dir.path().join("addressbook.pkl"));
        let mut output = Vec::new();
        let book = Session::new(book, config, Cursor::new(script.to_owned()), &mut output)
            .run()
            .unwrap();
        (book, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("add"), Command::Add);
        assert_eq!(Command::parse("  GET \r\n"), Command::Get);
        assert_eq!(Command::parse("Exit"), Command::Exit);
        assert_eq!(Command::parse("list"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("add bob"), Command::Unknown);
    }

    #[test]
    fn test_add_get_exit_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let script = "add\nAlice\n123 Main St\n\
                      add\nBob\n456 Oak Ave\n\
                      get\nAlice\n\
                      get\nCarol\n\
                      exit\n";
        let (book, output) = run_session(&dir, AddressBook::new(), script);

        assert_eq!(book.len(), 2);
        assert!(output.starts_with(BANNER));
        assert!(output.contains(&format!("{NAME_PROMPT}123 Main St\n")));
        assert!(output.contains(&format!("{NAME_PROMPT}{CONTACT_NOT_FOUND}\n")));
        assert!(output.ends_with(&format!("{SAVED_MESSAGE}\n")));

        let saved = persistence::load(dir.path().join("addressbook.pkl")).unwrap();
        assert_eq!(saved.get_contact("Alice"), "123 Main St");
        assert_eq!(saved.get_contact("Bob"), "456 Oak Ave");
    }

    #[test]
    fn test_unknown_command_prints_help_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let script = "list\nadd\nAlice\nHome\nexit\n";
        let (book, output) = run_session(&dir, AddressBook::new(), script);

        assert_eq!(output.matches(HELP_MESSAGE).count(), 1);
        assert_eq!(book.get_contact("Alice"), "Home");
    }

    #[test]
    fn test_commands_are_case_insensitive_but_values_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let script = " ADD \n Alice \r\n 1 Elm St\r\nEXIT\n";
        let (book, _) = run_session(&dir, AddressBook::new(), script);

        assert_eq!(book.get_contact(" Alice "), " 1 Elm St");
        assert_eq!(book.get_contact("Alice"), CONTACT_NOT_FOUND);
    }

    #[test]
    fn test_eof_saves() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run_session(&dir, AddressBook::new(), "add\nAlice\n123 Main St\n");

        assert!(output.ends_with(&format!("{SAVED_MESSAGE}\n")));
        let saved = persistence::load(dir.path().join("addressbook.pkl")).unwrap();
        assert_eq!(saved.get_contact("Alice"), "123 Main St");
    }

    #[test]
    fn test_eof_mid_add_discards_partial_contact() {
        let dir = tempfile::tempdir().unwrap();
        let (book, _) = run_session(&dir, AddressBook::new(), "add\nAlice");

        // "Alice" without a newline is still a full line; the address never arrives
        assert!(book.is_empty());
        assert!(dir.path().join("addressbook.pkl").exists());
    }

    #[test]
    fn test_existing_contacts_survive_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut book = AddressBook::new();
        book.add_contact("Alice", "123 Main St");

        let script = "add\nAlice\n789 Pine Rd\nget\nAlice\nexit\n";
        let (book, output) = run_session(&dir, book, script);
        assert_eq!(book.get_contact("Alice"), "789 Pine Rd");
        assert!(output.contains("789 Pine Rd\n"));
    }

    #[test]
    fn test_save_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_path(dir.path().join("missing").join("addressbook.pkl"));
        let mut output = Vec::new();

        let err = Session::new(AddressBook::new(), config, Cursor::new("exit\n"), &mut output)
            .run()
            .unwrap_err();
        assert!(matches!(err, CliError::Persist(PersistError::Io { .. })));
    }
}
