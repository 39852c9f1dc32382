use address_book::{open_address_book, AddressBookError, Gender, ReaderOptions};
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("address-book").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_end_to_end_queries_over_sample_book() {
    let book = open_address_book(
        "AddressBook.csv",
        Some(fixtures_dir().as_path()),
        ReaderOptions::default(),
    )
    .unwrap_or_else(|e| panic!("sample book should load: {e}"));

    assert_eq!(book.count_number_of_males(), 3);
    assert_eq!(book.count_by_gender(Gender::Female), 2);

    let oldest: Vec<String> = book
        .find_oldest_people()
        .iter()
        .map(|c| c.full_name().to_string())
        .collect();
    assert_eq!(oldest, vec!["Wes Jackson"]);

    assert_eq!(book.age_difference_in_days("Bill McKnight", "Paul Robinson").unwrap(), 2862);
}

#[test]
fn test_two_contact_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("two.csv");
    std::fs::write(&path, "Bill McKnight,Male,16/03/77\nSarah Stone,Female,20/09/80\n").unwrap();

    let book = open_address_book(path.to_str().unwrap(), None, ReaderOptions::default())
        .unwrap_or_else(|e| panic!("two-contact book should load: {e}"));

    assert_eq!(book.count_by_gender(Gender::Male), 1);
    assert_eq!(book.find_oldest_person().unwrap().full_name(), "Bill McKnight");
    assert_eq!(book.age_difference_in_days("Bill McKnight", "Sarah Stone").unwrap(), 1284);
}

#[test]
fn test_empty_book_answers_nothing() {
    let book = open_address_book(
        "EmptyAddressBook.csv",
        Some(fixtures_dir().as_path()),
        ReaderOptions::default(),
    )
    .unwrap_or_else(|e| panic!("empty book should load: {e}"));

    assert!(book.find_all().is_empty());
    assert!(book.find_oldest_people().is_empty());
    assert!(book.find_oldest_person().is_none());
}

#[test]
fn test_missing_book_is_source_not_found() {
    let result = open_address_book("does not exist", Some(Path::new("/nowhere")), ReaderOptions::default());
    assert!(matches!(result, Err(AddressBookError::SourceNotFound { .. })));
}

#[test]
fn test_cli_counts_males() {
    cli()
        .args(["--data-dir"])
        .arg(fixtures_dir())
        .args(["count-gender", "male"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Male"));
}

#[test]
fn test_cli_oldest_as_json() {
    cli()
        .arg("--data-dir")
        .arg(fixtures_dir())
        .args(["--address-book", "AddressBookWithTwoOldest.csv", "--json", "oldest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Tom Ford\""))
        .stdout(predicate::str::contains("\"Sara Stone\""))
        .stdout(predicate::str::contains("Bill McKnight").not());
}

#[test]
fn test_cli_age_diff_unknown_person_exits_with_lookup_code() {
    cli()
        .arg("--data-dir")
        .arg(fixtures_dir())
        .args(["age-diff", "Nobody", "Bill McKnight"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nobody"));
}

#[test]
fn test_cli_reports_parse_failure_line() {
    cli()
        .arg("--data-dir")
        .arg(fixtures_dir())
        .args(["--address-book", "AddressBookWithOneRecordWithInvalidGender.csv", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Line 2 is invalid"));
}

#[test]
fn test_cli_reads_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("address-book.toml");
    std::fs::write(
        &config_path,
        format!(
            "[source]\npath = \"AddressBookWithMultipleContacts.csv\"\ndata_dir = {:?}\n",
            fixtures_dir().display().to_string()
        ),
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paul Robinson (Male, born 1985-01-15)"))
        .stdout(predicate::str::contains("Gemma Lane"))
        .stdout(predicate::str::contains("Wes Jackson"));
}
