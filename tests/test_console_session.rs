//! End-to-end console session tests.
//!
//! Each test drives the REPL with a scripted input stream, the way a
//! user would type at the prompt, and checks both the printed replies
//! and the state the session leaves behind, including what survives a
//! simulated restart through storage.

use address_book::{repl, AddressBook, FileStorage};
use std::io::Cursor;

fn run_session(book: &mut AddressBook, script: &str) -> String {
    let mut output = Vec::new();
    repl::run(Cursor::new(script), &mut output, book, 2).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_contact_lifecycle() {
    let mut book = AddressBook::new();
    let output = run_session(
        &mut book,
        "hello\n\
         add John 1234567890 19.10.2004\n\
         add Jane 9876543210\n\
         change John 1234567890 1112223333\n\
         birthday Jane 28.12.1994\n\
         phone John\n\
         exit\n",
    );

    assert!(output.contains("How can I help you?"));
    assert!(output.contains("Contact John added with phone number: 1234567890 and birthday: 19.10.2004"));
    assert!(output.contains("Contact Jane added with phone number: 9876543210"));
    assert!(output.contains("Contact John. Phone number 1234567890 changed to 1112223333"));
    assert!(output.contains("Birthday 28.12.1994 added for contact Jane"));
    assert!(output.contains("John; phones: 1112223333; days to birth: "));
    assert!(output.ends_with("Good bye!\n"));

    assert_eq!(book.len(), 2);
    assert!(book.find("John").unwrap().find_phone("1112223333").is_some());
    assert_eq!(*book.find("Jane").unwrap().birthday().unwrap(), "28.12.1994");
}

#[test]
fn test_search_and_show_all() {
    let mut book = AddressBook::new();
    let output = run_session(
        &mut book,
        "add John 1234567890\n\
         add Johanna 5556667777\n\
         add Ben 2222222222\n\
         search john\n\
         search 222\n\
         show all\n\
         close\n",
    );

    let search_block = output
        .split("Found contacts:\n")
        .nth(1)
        .expect("name search should find contacts");
    assert!(search_block.contains("John"));
    assert!(search_block.contains("Johanna"));

    // Digit query matches the concatenated phone digits.
    assert!(output.matches("Found contacts:").count() >= 2);
    assert!(output.contains("Ben; phones: 2222222222"));
}

#[test]
fn test_every_error_is_a_reply_not_a_crash() {
    let mut book = AddressBook::new();
    let output = run_session(
        &mut book,
        "add John 123\n\
         add John99 1234567890\n\
         add John 1234567890\n\
         add John 1234567890\n\
         change John 9999999999 1112223333\n\
         birthday John 19-10-2004\n\
         phone Ghost\n\
         delete everything now\n\
         good bye\n",
    );

    assert!(output.contains("Invalid phone number"));
    assert!(output.contains("Invalid name"));
    assert!(output.contains("Contact John already exists"));
    assert!(output.contains("Phone number 9999999999 not found"));
    assert!(output.contains("Invalid birthday format"));
    assert!(output.contains("Contact Ghost not found"));
    assert!(output.contains("Invalid command format"));
    assert!(output.ends_with("Good bye!\n"));

    // The one valid add went through, nothing else did.
    assert_eq!(book.len(), 1);
}

#[test]
fn test_state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("book.bin"));

    // First session: create some state, then "shut down".
    let mut book = storage.load().unwrap();
    run_session(
        &mut book,
        "add John 1234567890 19.10.2004\nadd Jane 9876543210\nexit\n",
    );
    storage.save(&book).unwrap();

    // Second session: the book comes back as it was left.
    let mut book = storage.load().unwrap();
    assert_eq!(book.len(), 2);
    let output = run_session(&mut book, "phone John\nshow all\nexit\n");
    assert!(output.contains("John; phones: 1234567890; days to birth: "));
    assert!(output.contains("Jane; phones: 9876543210"));
}
