use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

fn contact_book(file: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env_remove("CONTACTS_FILE").arg("--file").arg(file);
    Ok(cmd)
}

#[test]
fn listing_missing_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    contact_book(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No contacts found."));

    assert!(!file.exists());
    Ok(())
}

#[test]
fn listing_keeps_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    for (name, phone) in [("Wayne", "08062866694"), ("Diane", "08064879199"), ("John", "08046516806")] {
        contact_book(&file)?
            .args(["add", "--name", name, "--phone", phone])
            .assert()
            .success();
    }

    let output = contact_book(&file)?.arg("list").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let rows: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        rows,
        vec![
            "  1. Wayne                08062866694",
            "  2. Diane                08064879199",
            "  3. John                 08046516806",
        ]
    );
    Ok(())
}

#[test]
fn listing_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");
    fs::write(&file, "Wayne,1\n")?;

    let output = contact_book(&file)?.args(["list", "--json"]).output()?;
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(listed, serde_json::json!([{ "name": "Wayne", "phone": "1" }]));
    Ok(())
}

#[test]
fn malformed_file_aborts_startup() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");
    fs::write(&file, "Wayne,1\nDiane,2,3\n")?;

    contact_book(&file)?
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Malformed contact on line 2: 'Diane,2,3'"));

    // Nothing was rewritten
    assert_eq!(fs::read_to_string(&file)?, "Wayne,1\nDiane,2,3\n");
    Ok(())
}

#[test]
fn file_path_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("from_env.txt");
    fs::write(&file, "Wayne,1\n")?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_FILE", &file)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("  1. Wayne"));
    Ok(())
}

#[test]
fn unreadable_contact_file_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // the contact "file" is a directory
    contact_book(dir.path())?
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Error: I/O error"));
    Ok(())
}
