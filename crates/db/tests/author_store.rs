use bookshelf_db::{Author, Book, DbError, Store};

fn empty_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("books.db"));
    store.bootstrap(&[]).unwrap();
    (dir, store)
}

#[test]
fn insert_author_keeps_explicit_id() {
    let (_dir, store) = empty_store();

    store
        .insert_author(&Author::new(42, "Ursula", "Le Guin"))
        .unwrap();

    let loaded = store.get_author_by_id(42).unwrap();
    assert_eq!(loaded, Author::new(42, "Ursula", "Le Guin"));
}

#[test]
fn insert_author_twice_overwrites_names() {
    let (_dir, store) = empty_store();
    store.insert_author(&Author::new(7, "Iain", "Banks")).unwrap();

    store
        .insert_author(&Author::new(7, "Iain M.", "Banks"))
        .unwrap();

    assert_eq!(store.get_author_by_id(7).unwrap().first_name, "Iain M.");
}

#[test]
fn get_missing_author_is_not_found() {
    let (_dir, store) = empty_store();

    let err = store.get_author_by_id(1).unwrap_err();

    assert!(matches!(
        err,
        DbError::NotFound {
            entity: "author",
            id: 1
        }
    ));
}

#[test]
fn delete_author_removes_author_and_all_books() {
    let (_dir, store) = empty_store();
    let herbert = Author::new(1, "Frank", "Herbert");
    let tolstoy = Author::new(3, "Leo", "Tolstoy");
    store.insert_author(&herbert).unwrap();
    store.insert_author(&tolstoy).unwrap();
    store.insert_book(&Book::new("Dune", herbert.clone())).unwrap();
    store
        .insert_book(&Book::new("Dune Messiah", herbert.clone()))
        .unwrap();
    store
        .insert_book(&Book::new("War and Peace", tolstoy.clone()))
        .unwrap();

    let removed = store.delete_author_with_books(1).unwrap();

    assert_eq!(removed, herbert);
    assert!(store.get_author_by_id(1).unwrap_err().is_not_found());
    assert!(store.get_books_by_author(1).unwrap().is_empty());
    let remaining = store.list_books().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].author, tolstoy);
}

#[test]
fn delete_missing_author_is_not_found_and_keeps_books() {
    let (_dir, store) = empty_store();
    let herbert = Author::new(1, "Frank", "Herbert");
    store.insert_author(&herbert).unwrap();
    store.insert_book(&Book::new("Dune", herbert)).unwrap();

    let err = store.delete_author_with_books(2).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.list_books().unwrap().len(), 1);
}
