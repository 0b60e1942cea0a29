//! Integration tests driving the bot through input lines.

mod common;

use common::{fixtures::*, setup_service};
use contact_book::{dispatch, Config, ContactServiceImpl};

/// Feed lines to the bot and collect the replies.
fn session(service: &mut ContactServiceImpl, lines: &[&str]) -> Vec<String> {
    let config = Config::default();
    lines
        .iter()
        .filter_map(|line| dispatch(service, &config, line))
        .map(|reply| reply.text)
        .collect()
}

#[test]
fn test_greeting_and_unknown_command() {
    let mut service = setup_service();
    let replies = session(&mut service, &["hello", "fly away"]);
    assert_eq!(replies, vec!["How can I help you?", "Invalid command."]);
}

#[test]
fn test_add_change_and_show_phone() {
    let mut service = setup_service();
    let replies = session(
        &mut service,
        &[
            "add Alice 0501234567",
            "phone Alice",
            "change Alice 0509999999",
            "phone Alice",
            "change Bob 0509999999",
        ],
    );
    assert_eq!(
        replies,
        vec![
            "Contact Alice added.",
            "0501234567",
            "Phone for Alice changed.",
            "0509999999",
            "Contact not found.",
        ]
    );
}

#[test]
fn test_change_updates_the_phone_shown_first() {
    let mut service = setup_service();
    let replies = session(
        &mut service,
        &[
            "add Alice 0501111111",
            "add-phone Alice 0502222222",
            "change Alice 0509999999",
            "phone Alice",
            "all",
        ],
    );
    assert_eq!(replies[2], "Phone for Alice changed.");
    assert_eq!(replies[3], "0509999999");
    assert_eq!(replies[4], "Contact name: Alice, phones: 0509999999; 0502222222");
}

#[test]
fn test_validation_errors_become_replies() {
    let mut service = setup_service();
    let replies = session(
        &mut service,
        &[
            "add Alice 12345",
            "all",
            "add Carol",
            "add-birthday Carol 15.13.2024",
            "show-birthday Carol",
        ],
    );
    assert_eq!(replies[0], "Invalid phone number: 12345 (expected 10 digits)");
    assert_eq!(replies[1], "No contacts saved.");
    assert_eq!(replies[2], "Contact Carol added.");
    assert_eq!(replies[3], "Invalid date format: 15.13.2024 (use DD.MM.YYYY)");
    assert_eq!(replies[4], "Birthday not found");
}

#[test]
fn test_birthdays_command() {
    let mut service = setup_service();
    let soon = birthday_offset(2, 1990);
    let later = birthday_offset(20, 1990);
    let add_soon = format!("add Ann 0501234567 {}", soon);
    let add_later = format!("add Ben 0501234568 {}", later);

    let replies = session(
        &mut service,
        &[
            add_soon.as_str(),
            add_later.as_str(),
            "birthdays",
            "birthdays 30",
            "birthdays 1",
            "birthdays x",
        ],
    );
    assert_eq!(replies[2], format!("Ann: {}", soon));
    assert_eq!(replies[3], format!("Ann: {}\nBen: {}", soon, later));
    assert_eq!(replies[4], "No birthdays within the next 1 days.");
    assert!(replies[5].starts_with("Invalid argument x"));
}

#[test]
fn test_all_delete_and_search() {
    let mut service = setup_service();
    let replies = session(
        &mut service,
        &[
            "add John 1234567890",
            "add-phone John 5555555555",
            "add Jane 9876543210",
            "all",
            "search jane",
            "search nobody-like-this",
            "delete Jane",
            "delete Jane",
            "all",
        ],
    );
    assert_eq!(replies[1], "Phone added to John.");
    assert_eq!(
        replies[3],
        "Contact name: John, phones: 1234567890; 5555555555\nContact name: Jane, phones: 9876543210"
    );
    assert_eq!(replies[4], "Contact name: Jane, phones: 9876543210");
    assert_eq!(replies[5], "No matching contacts.");
    assert_eq!(replies[6], "Contact Jane deleted.");
    assert_eq!(replies[7], "Contact not found.");
    assert_eq!(replies[8], "Contact name: John, phones: 1234567890; 5555555555");
}

#[test]
fn test_edit_and_remove_phone_commands() {
    let mut service = setup_service();
    let replies = session(
        &mut service,
        &[
            "add John 1234567890",
            "edit-phone John 1234567890 bad",
            "edit-phone John 0000000000 1112223333",
            "edit-phone John 1234567890 1112223333",
            "remove-phone John 1112223333",
            "phone John",
            "add-phone Ghost 1112223333",
        ],
    );
    assert_eq!(replies[1], "Invalid phone number: bad (expected 10 digits)");
    assert_eq!(replies[2], "Phone 0000000000 not found for contact John");
    assert_eq!(replies[3], "Phone for John changed.");
    assert_eq!(replies[4], "Phone removed from John.");
    assert_eq!(replies[5], "No phone");
    assert_eq!(replies[6], "Contact not found: Ghost");
}

#[test]
fn test_export_command_outputs_json() {
    let mut service = setup_service();
    let replies = session(&mut service, &["add Ann 0501234567 01.01.1990", "export"]);
    let value: serde_json::Value = serde_json::from_str(&replies[1]).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"name": "Ann", "phones": ["0501234567"], "birthday": "01.01.1990"}
        ])
    );
}

#[test]
fn test_exit_ends_session() {
    let mut service = setup_service();
    let reply = dispatch(&mut service, &Config::default(), "close").unwrap();
    assert!(reply.exit);
    assert_eq!(reply.text, "Good bye!");
}
