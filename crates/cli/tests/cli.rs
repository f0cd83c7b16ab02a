use assert_cmd::Command;

fn bookshelf(config_dir: &std::path::Path, db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf-cli").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", config_dir)
        .env("BOOKSHELF_DATABASE__PATH", db_path)
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let output = Command::cargo_bin("bookshelf-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let help = String::from_utf8(output).unwrap();
    assert!(help.contains("serve"));
    assert!(help.contains("bootstrap"));
    assert!(help.contains("books"));
}

#[test]
fn bootstrap_then_list_seeded_books() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cli.db");

    let output = bookshelf(dir.path(), &db_path)
        .arg("bootstrap")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(output).unwrap().contains("with 3 books"));

    let output = bookshelf(dir.path(), &db_path)
        .arg("books")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2]["title"], "War and Peace");
    assert_eq!(lines[2]["author"]["last_name"], "Tolstoy");
}

#[test]
fn bootstrap_without_seed_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("empty.db");

    bookshelf(dir.path(), &db_path)
        .args(["bootstrap", "--no-seed"])
        .assert()
        .success();
    let output = bookshelf(dir.path(), &db_path)
        .arg("bootstrap")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(String::from_utf8(output)
        .unwrap()
        .contains("already bootstrapped"));
    bookshelf(dir.path(), &db_path)
        .arg("books")
        .assert()
        .success()
        .stdout("");
}
