use bookshelf_db::{default_seed, Author, Book, BootstrapOutcome, Store};
use rusqlite::Connection;

fn temp_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("books.db"));
    (dir, store)
}

fn assert_table_exists(store: &Store, table: &str) {
    let conn = Connection::open(store.path()).unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1, "expected table `{table}` to exist");
}

#[test]
fn bootstrap_creates_both_tables() {
    let (_dir, store) = temp_store();

    let outcome = store.bootstrap(&[]).unwrap();

    assert_eq!(outcome, BootstrapOutcome::Created { seeded: 0 });
    assert_table_exists(&store, "books");
    assert_table_exists(&store, "author");
    assert!(store.list_books().unwrap().is_empty());
}

#[test]
fn bootstrap_seeds_books_and_their_authors() {
    let (_dir, store) = temp_store();

    let outcome = store.bootstrap(&default_seed()).unwrap();
    assert_eq!(outcome, BootstrapOutcome::Created { seeded: 3 });

    let books = store.list_books().unwrap();
    let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(
        titles,
        ["A Byte of Python", "Moby-Dick; or, The Whale", "War and Peace"]
    );
    assert_eq!(books[0].id, Some(1));

    let tolstoy = store.get_author_by_id(3).unwrap();
    assert_eq!(tolstoy.last_name, "Tolstoy");
}

#[test]
fn bootstrap_is_idempotent() {
    let (_dir, store) = temp_store();
    store.bootstrap(&default_seed()).unwrap();
    store
        .insert_author(&Author::new(9, "Frank", "Herbert"))
        .unwrap();
    store
        .insert_book(&Book::new("Dune", Author::new(9, "Frank", "Herbert")))
        .unwrap();

    let outcome = store.bootstrap(&default_seed()).unwrap();

    assert_eq!(outcome, BootstrapOutcome::AlreadyPresent);
    assert_eq!(store.list_books().unwrap().len(), 4);
}

#[test]
fn bootstrap_adds_missing_author_table_to_existing_books_table() {
    let (_dir, store) = temp_store();
    let conn = Connection::open(store.path()).unwrap();
    conn.execute_batch(
        "CREATE TABLE books (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT, author INTEGER);",
    )
    .unwrap();
    drop(conn);

    let outcome = store.bootstrap(&default_seed()).unwrap();

    assert_eq!(outcome, BootstrapOutcome::AlreadyPresent);
    assert_table_exists(&store, "author");
}
