//! Resolver logic for the books schema.
//!
//! Every function takes the store explicitly and returns typed output; the
//! GraphQL layer only handles locking and error conversion.
//!
//! `updateBook` and `deleteBook` treat the id as a position in the store, the
//! same way ids are handed out by `createBook`. After a deletion, ids and
//! positions of later books diverge, and these mutations address whichever
//! book currently sits at that position.

use std::num::ParseIntError;

use async_graphql::ErrorExtensions;
use thiserror::Error;

use super::models::{Book, BookInput, BookRecord};
use super::store::BookStore;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book with ID {id} not found")]
    NotFound { id: String },

    #[error("invalid book id '{id}': {source}")]
    InvalidId {
        id: String,
        #[source]
        source: ParseIntError,
    },
}

impl BookError {
    fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidId { .. } => "BAD_USER_INPUT",
        }
    }
}

impl ErrorExtensions for BookError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

fn parse_position(id: &str) -> Result<usize, BookError> {
    id.trim().parse().map_err(|source| BookError::InvalidId {
        id: id.to_string(),
        source,
    })
}

/// Returns full information about a book using its id
pub fn get_book_by_id(store: &BookStore, id: &str) -> Result<Book, BookError> {
    store
        .find(|record| record.id == id)
        .map(Book::from)
        .ok_or_else(|| BookError::not_found(id))
}

/// Returns every book in insertion order
pub fn get_all_books(store: &BookStore) -> Vec<Book> {
    store.iter().map(Book::from).collect()
}

/// Creates a new book whose id is the store size before insertion
pub fn create_book(store: &mut BookStore, input: BookInput) -> Book {
    let id = store.len().to_string();
    let record = BookRecord::from_input(id, input);
    let book = Book::from(&record);
    store.append(record);

    tracing::debug!(book_id = %book.id.as_str(), "book created");
    book
}

/// Updates the book at position `id`, applying only non-empty input fields
pub fn update_book(store: &mut BookStore, id: &str, input: BookInput) -> Result<Book, BookError> {
    let position = parse_position(id)?;
    let mut record = store
        .get_by_position(position)
        .map_err(|_| BookError::not_found(id))?
        .clone();

    record.merge(input);
    let book = Book::from(&record);
    store
        .replace_at(position, record)
        .map_err(|_| BookError::not_found(id))?;

    tracing::debug!(book_id = %id, position, "book updated");
    Ok(book)
}

/// Deletes the book at position `id` and returns it
pub fn delete_book(store: &mut BookStore, id: &str) -> Result<Book, BookError> {
    let position = parse_position(id)?;
    let removed = store
        .remove_by_position(position)
        .map_err(|_| BookError::not_found(id))?;

    tracing::debug!(book_id = %removed.id, position, "book deleted");
    Ok(Book::from(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::models::{AuthorInput, BookStatus};

    fn input(title: &str) -> BookInput {
        BookInput {
            title: title.to_string(),
            status: BookStatus::Available,
            author: Some(AuthorInput {
                first_name: "Octavia".to_string(),
                last_name: "Butler".to_string(),
            }),
            description: Some(format!("About {title}")),
        }
    }

    fn titles(store: &BookStore) -> Vec<String> {
        get_all_books(store).into_iter().map(|b| b.title).collect()
    }

    #[test]
    fn create_assigns_store_length_as_id() {
        let mut store = BookStore::new();

        let first = create_book(&mut store, input("Kindred"));
        let second = create_book(&mut store, input("Dawn"));

        assert_eq!(first.id.as_str(), "0");
        assert_eq!(first.author.id.as_str(), "0");
        assert_eq!(second.id.as_str(), "1");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_by_id_returns_requested_book() {
        let mut store = BookStore::new();
        create_book(&mut store, input("Kindred"));
        create_book(&mut store, input("Dawn"));

        let book = get_book_by_id(&store, "1").unwrap();
        assert_eq!(book.id.as_str(), "1");
        assert_eq!(book.title, "Dawn");
    }

    #[test]
    fn get_by_id_missing_is_not_found() {
        let store = BookStore::new();
        let err = get_book_by_id(&store, "99").unwrap_err();
        assert_eq!(err.to_string(), "Book with ID 99 not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn update_with_only_title_keeps_other_fields() {
        let mut store = BookStore::new();
        let created = create_book(&mut store, input("Kindred"));

        let updated = update_book(
            &mut store,
            "0",
            BookInput {
                title: "Kindred (Anniversary Edition)".to_string(),
                status: created.status,
                author: Some(AuthorInput::default()),
                description: Some(String::new()),
            },
        )
        .unwrap();

        assert_eq!(updated.title, "Kindred (Anniversary Edition)");
        assert_eq!(updated.status, created.status);
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.description, created.description);
        assert_eq!(get_book_by_id(&store, "0").unwrap(), updated);
    }

    #[test]
    fn update_without_author_keeps_author() {
        let mut store = BookStore::new();
        let created = create_book(&mut store, input("Kindred"));

        let updated = update_book(
            &mut store,
            "0",
            BookInput {
                author: None,
                status: BookStatus::Shipping,
                ..input("")
            },
        )
        .unwrap();

        assert_eq!(updated.author, created.author);
        assert_eq!(updated.status, BookStatus::Shipping);
        assert_eq!(updated.title, "Kindred");
    }

    #[test]
    fn update_out_of_range_is_not_found() {
        let mut store = BookStore::new();
        let err = update_book(&mut store, "3", input("x")).unwrap_err();
        assert!(matches!(err, BookError::NotFound { ref id } if id == "3"));
    }

    #[test]
    fn non_numeric_id_is_invalid() {
        let mut store = BookStore::new();
        create_book(&mut store, input("Kindred"));

        let err = delete_book(&mut store, "abc").unwrap_err();
        assert!(matches!(err, BookError::InvalidId { .. }));
        assert_eq!(err.code(), "BAD_USER_INPUT");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_returns_removed_book() {
        let mut store = BookStore::new();
        let created = create_book(&mut store, input("Kindred"));

        let deleted = delete_book(&mut store, "0").unwrap();
        assert_eq!(deleted, created);
        assert!(get_all_books(&store).is_empty());
    }

    #[test]
    fn delete_out_of_range_is_not_found() {
        let mut store = BookStore::new();
        let err = delete_book(&mut store, "0").unwrap_err();
        assert_eq!(err.to_string(), "Book with ID 0 not found");
    }

    #[test]
    fn ids_drift_after_deletion() {
        let mut store = BookStore::new();
        for title in ["a", "b", "c"] {
            create_book(&mut store, input(title));
        }

        delete_book(&mut store, "0").unwrap();
        assert_eq!(titles(&store), ["b", "c"]);

        // "c" still carries id "2" but now sits at position 1, so the next
        // create reuses id "2".
        let created = create_book(&mut store, input("d"));
        assert_eq!(created.id.as_str(), "2");
        assert_eq!(get_book_by_id(&store, "2").unwrap().title, "c");

        // Position 1 is "c", not the book whose id is "1".
        let deleted = delete_book(&mut store, "1").unwrap();
        assert_eq!(deleted.title, "c");
        assert_eq!(titles(&store), ["b", "d"]);
    }

    #[test]
    fn graphql_error_carries_code_extension() {
        let err = BookError::not_found("5").extend();
        assert_eq!(err.message, "Book with ID 5 not found");
        let extensions = err.extensions.unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }
}
