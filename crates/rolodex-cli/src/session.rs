use crate::commands::{execute, Command, Context};
use crate::error::user_message;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use rolodex_core::AddressBook;
use rolodex_store::Store;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const BANNER: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Reads the stored book. A store that was never written, or one that cannot
/// be decoded, yields an empty book; the latter is moved aside first.
pub fn load_book(store: &Store) -> Result<AddressBook> {
    match store.load() {
        Ok(Some(book)) => {
            debug!(path = %store.path().display(), records = book.len(), "address book loaded");
            Ok(book)
        }
        Ok(None) => {
            debug!(path = %store.path().display(), "store absent, starting with an empty book");
            Ok(AddressBook::new())
        }
        Err(err) if err.is_corrupt() => {
            let moved = store
                .quarantine()
                .with_context(|| format!("move aside corrupt store {}", store.path().display()))?;
            warn!(
                error = %err,
                quarantine = %moved.display(),
                "store corrupt, starting with an empty book"
            );
            Ok(AddressBook::new())
        }
        Err(err) => {
            Err(err).with_context(|| format!("read address book {}", store.path().display()))
        }
    }
}

pub struct Session<'a> {
    store: &'a Store,
    book: AddressBook,
    today: NaiveDate,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a Store, book: AddressBook, today: NaiveDate) -> Self {
        Self { store, book, today }
    }

    /// Runs until `close`/`exit` or end of input, then saves the book.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{BANNER}")?;
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                debug!("end of input");
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "{}", user_message(&err))?;
                    continue;
                }
            };
            if command.is_exit() {
                break;
            }

            let mut ctx = Context {
                book: &mut self.book,
                today: self.today,
            };
            for reply in execute(&mut ctx, command) {
                writeln!(output, "{reply}")?;
            }
        }

        self.store
            .save(&self.book)
            .with_context(|| format!("save address book {}", self.store.path().display()))?;
        info!(path = %self.store.path().display(), records = self.book.len(), "address book saved");
        writeln!(output, "{FAREWELL}")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}
