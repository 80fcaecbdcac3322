use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("turfbook_cli").unwrap();
    cmd.env("TURFBOOK_CLI_SCRIPT", "1")
        .env("TURFBOOK_HOME", home.path());
    cmd
}

#[test]
fn script_mode_filters_and_books_a_slot() {
    let home = TempDir::new().unwrap();
    let input = "filter Surat\n\
                 list\n\
                 book 4\n\
                 set name Rahul Patel\n\
                 set phone +91 98765 43210\n\
                 set date 2026-09-01\n\
                 set slot 07:00 PM\n\
                 submit\n\
                 intents\n\
                 exit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Best Turfs in Surat"))
        .stdout(contains("Booking Request Sent!"))
        .stdout(contains("Slot: 07:00 PM on 2026-09-01"))
        .stdout(contains("Vesu Cricket Hub"));
}

#[test]
fn script_mode_reports_validation_errors_inline() {
    let home = TempDir::new().unwrap();
    let input = "book 1\n\
                 set phone 123\n\
                 submit\n\
                 cancel\n\
                 exit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Name is required"))
        .stdout(contains("Enter a valid phone number"))
        .stdout(contains("Please select a date"))
        .stdout(contains("Please select a time slot"))
        .stdout(contains("Booking cancelled."));
}

#[test]
fn set_without_a_value_keeps_the_field_untouched() {
    let home = TempDir::new().unwrap();
    let input = "book 2\n\
                 set name\n\
                 submit\n\
                 cancel\n\
                 exit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Usage: set <name|phone|date|slot> <value>"))
        .stdout(contains("Name is required"));
}

#[test]
fn script_mode_suggests_commands_and_survives_unknown_input() {
    let home = TempDir::new().unwrap();
    let input = "lsit\nfilter Vadodara\nexit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Did you mean `list`?"))
        .stdout(contains("not a covered city"));
}
