use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_session(temp: &TempDir, book_path: &Path, extra: &[&str], script: &str) -> String {
    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .args(["--book-path", book_path.to_str().expect("book path")])
        .args(extra)
        .write_stdin(script)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn cli_add_birthday_and_lookup_flow() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let stdout = run_session(
        &temp,
        &book_path,
        &[],
        "add Alice 0991234567\nadd-birthday Alice 15.06.1990\nshow-birthday Alice\nphone Alice\nexit\n",
    );

    let lines: Vec<&str> = stdout
        .lines()
        .map(|line| line.trim_start_matches("Enter a command: "))
        .collect();
    assert_eq!(lines[0], "Welcome to the assistant bot!");
    assert_eq!(lines[1], "Contact added sucessfully.");
    assert_eq!(lines[2], "Birthday added sucessfully.");
    assert_eq!(lines[3], "15.06.1990");
    assert_eq!(lines[4], "Contact name: Alice, phones: 0991234567");
    assert_eq!(lines[5], "Good bye!");

    let stored: Value =
        serde_json::from_slice(&fs::read(&book_path).expect("read store")).expect("parse json");
    assert_eq!(stored["version"], 1);
    assert_eq!(stored["records"][0]["name"], "Alice");
    assert_eq!(stored["records"][0]["birthday"], "15.06.1990");
}

#[test]
fn cli_book_survives_restart() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    run_session(&temp, &book_path, &[], "add Alice 0991234567\nclose\n");
    let stdout = run_session(&temp, &book_path, &[], "all\n");
    assert!(stdout.contains("Contact name: Alice, phones: 0991234567"));
    assert!(stdout.ends_with("Good bye!\n"));
}

#[test]
fn cli_birthdays_report_uses_today_flag() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let stdout = run_session(
        &temp,
        &book_path,
        &["--today", "2024-12-30"],
        "add Eve 1111111111\nadd-birthday Eve 31.12.1990\nadd Jan 2222222222\nadd-birthday Jan 02.01.1991\nbirthdays\nexit\n",
    );
    assert!(stdout.contains("Tuesday   : Eve\n"));
    assert!(stdout.contains("Thursday  : Jan\n"));
}

#[test]
fn cli_recovers_from_corrupt_store() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");
    fs::write(&book_path, "garbage").expect("write");

    let stdout = run_session(&temp, &book_path, &[], "all\nexit\n");
    assert!(stdout.contains("Address book is empty."));
    assert!(temp.path().join("addressbook.json.corrupt").exists());
}

#[test]
fn cli_rejects_bad_today_flag() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .args([
            "--book-path",
            temp.path().join("book.json").to_str().expect("path"),
            "--today",
            "30.12.2024",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_rejects_today_beyond_four_digit_years() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .args([
            "--book-path",
            temp.path().join("book.json").to_str().expect("path"),
            "--today",
            "+262142-12-31",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_birthdays_report_near_last_supported_year_keeps_edits() {
    let temp = TempDir::new().expect("temp dir");
    let book_path = temp.path().join("addressbook.json");

    let stdout = run_session(
        &temp,
        &book_path,
        &["--today", "9999-12-30"],
        "add Eve 1111111111\nadd-birthday Eve 31.12.1990\nbirthdays\nexit\n",
    );
    assert!(stdout.contains("Friday    : Eve\n"));
    assert!(stdout.ends_with("Good bye!\n"));
    assert!(book_path.exists());
}

#[cfg(unix)]
#[test]
fn cli_reads_relative_book_path_from_config_file() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("config").join("rolodex");
    fs::create_dir_all(&config_dir).expect("config dir");
    let config_path = config_dir.join("config.toml");
    fs::write(&config_path, "book_path = \"family.json\"\n").expect("write config");
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600)).expect("chmod");

    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .write_stdin("add Alice 0991234567\nexit\n")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    assert!(config_dir.join("family.json").exists());
}

#[test]
fn cli_rejects_book_path_without_file_name() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .args(["--book-path", ".."])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}
