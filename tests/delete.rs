use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn deleting_contacts() {
    // Attempt to delete non existing contact
    Command::cargo_bin("rusty-phonebook")
        .unwrap()
        .write_stdin("3\nAlice\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Contact not found."));

    // Add, delete, search, delete again
    Command::cargo_bin("rusty-phonebook")
        .unwrap()
        .write_stdin(
            "1\nAlice\n1234567890\n\n\n\
            3\nAlice\n\
            4\nAlice\n\
            3\nAlice\n\
            6\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully."))
        .stdout(predicate::str::contains("No contacts found for the given query."))
        .stdout(predicate::str::contains("Error: Contact not found."));
}

#[test]
fn end_of_input_exits_cleanly() {
    Command::cargo_bin("rusty-phonebook")
        .unwrap()
        .write_stdin("1\nAlice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye").not());
}
