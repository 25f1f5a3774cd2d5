//! Command parsing and handlers.
//!
//! A line of user input is tokenized into a command head (one or two
//! words, matched case-insensitively) plus arguments, then dispatched
//! against the address book. Handlers return the reply string to print;
//! every failure is a [`CommandError`] that the REPL converts to a
//! user-facing message at the dispatch boundary.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone> [birthday]`
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    /// `change <name> <old> <new>`
    Change {
        name: String,
        old: String,
        new: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `birthday <name> <date>`
    Birthday { name: String, date: String },
    /// `search <query>`
    Search { query: String },
    /// `show all`
    ShowAll,
    /// `exit`, `close` or `good bye`
    Exit,
}

impl Command {
    /// Whether this command ends the session.
    pub fn is_farewell(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Parse a raw input line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidFormat` for an unrecognized head
    /// or a wrong argument count.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Err(CommandError::InvalidFormat);
        }

        let head = words[0].to_lowercase();

        // Two-word heads take priority over a one-word interpretation.
        if words.len() >= 2 {
            let two_word_head = format!("{} {}", head, words[1].to_lowercase());
            match two_word_head.as_str() {
                "show all" if words.len() == 2 => return Ok(Command::ShowAll),
                // Farewells ignore anything typed after them.
                "good bye" => return Ok(Command::Exit),
                _ => {}
            }
        }

        let args = &words[1..];
        match head.as_str() {
            "hello" if args.is_empty() => Ok(Command::Hello),
            "exit" | "close" => Ok(Command::Exit),
            "add" if args.len() == 2 || args.len() == 3 => Ok(Command::Add {
                name: args[0].to_string(),
                phone: args[1].to_string(),
                birthday: args.get(2).map(|s| s.to_string()),
            }),
            "change" if args.len() == 3 => Ok(Command::Change {
                name: args[0].to_string(),
                old: args[1].to_string(),
                new: args[2].to_string(),
            }),
            "phone" if args.len() == 1 => Ok(Command::Phone {
                name: args[0].to_string(),
            }),
            "birthday" if args.len() == 2 => Ok(Command::Birthday {
                name: args[0].to_string(),
                date: args[1].to_string(),
            }),
            "search" if args.len() == 1 => Ok(Command::Search {
                query: args[0].to_string(),
            }),
            _ => Err(CommandError::InvalidFormat),
        }
    }

    /// Execute the command against `book` and produce the reply string.
    pub fn execute(&self, book: &mut AddressBook, page_size: usize) -> CommandResult {
        debug!(command = ?self, "dispatching command");
        match self {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Exit => Ok("Good bye!".to_string()),
            Command::Add {
                name,
                phone,
                birthday,
            } => add_contact(book, name, phone, birthday.as_deref()),
            Command::Change { name, old, new } => change_phone(book, name, old, new),
            Command::Phone { name } => show_contact(book, name),
            Command::Birthday { name, date } => set_birthday(book, name, date),
            Command::Search { query } => search_contacts(book, query),
            Command::ShowAll => show_all(book, page_size),
        }
    }
}

fn add_contact(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> CommandResult {
    let mut record = match birthday {
        Some(date) => Record::new_with_birthday(name, date)?,
        None => Record::new(name)?,
    };
    record.add_phone(phone)?;
    book.add_record(record)?;

    Ok(match birthday {
        Some(date) => format!(
            "Contact {} added with phone number: {} and birthday: {}",
            name, phone, date
        ),
        None => format!("Contact {} added with phone number: {}", name, phone),
    })
}

fn change_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> CommandResult {
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;

    Ok(format!(
        "Contact {}. Phone number {} changed to {}",
        name, old, new
    ))
}

fn show_contact(book: &AddressBook, name: &str) -> CommandResult {
    match book.find(name) {
        Some(record) => Ok(record.to_string()),
        None => Err(CommandError::ContactNotFound(name.to_string())),
    }
}

fn set_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult {
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;

    Ok(format!("Birthday {} added for contact {}", date, name))
}

fn search_contacts(book: &AddressBook, query: &str) -> CommandResult {
    let records = book.search_full(query);
    if records.is_empty() {
        return Ok(format!("No contacts found for the request \"{}\"", query));
    }

    let listing = records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(format!("Found contacts:\n{}", listing))
}

fn show_all(book: &AddressBook, page_size: usize) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts found".to_string());
    }

    let pages = book
        .pages(page_size)
        .map(|page| {
            page.iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>();
    Ok(pages.join("\n"))
}
