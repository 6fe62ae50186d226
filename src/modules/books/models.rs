//! GraphQL object, input, and enum types for the books module, plus the raw
//! records the store holds.

use async_graphql::{Enum, InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// Availability label of a book. Any value may be set by any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[graphql(name = "BookStatusEnum")]
pub enum BookStatus {
    Available,
    Unavailable,
    Instock,
    Shipping,
}

/// Author of a book
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Author {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
}

/// Book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub status: BookStatus,
    pub author: Author,
    pub description: Option<String>,
}

/// Author fields accepted by `createBook` and `updateBook`
#[derive(Debug, Clone, Default, InputObject)]
pub struct AuthorInput {
    #[graphql(default)]
    pub first_name: String,
    #[graphql(default)]
    pub last_name: String,
}

/// Book fields accepted by `createBook` and `updateBook`
#[derive(Debug, Clone, InputObject)]
pub struct BookInput {
    pub title: String,
    pub status: BookStatus,
    pub author: Option<AuthorInput>,
    pub description: Option<String>,
}

/// Author as held by the store. Its id always equals the owning book's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Book as held by the store; also the shape of seed file entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub status: BookStatus,
    pub author: AuthorRecord,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookRecord {
    /// Build the record for a newly created book with the given id.
    pub fn from_input(id: String, input: BookInput) -> Self {
        let author = input.author.unwrap_or_default();
        Self {
            author: AuthorRecord {
                id: id.clone(),
                first_name: author.first_name,
                last_name: author.last_name,
            },
            id,
            title: input.title,
            status: input.status,
            description: input.description,
        }
    }

    /// Shallow-merge `input` over this record.
    ///
    /// Only non-empty values are applied: an empty title, description, or
    /// author name counts as "not supplied" and leaves the stored value as is,
    /// so none of those fields can be cleared through this path. `status` is
    /// non-nullable and is always applied.
    pub fn merge(&mut self, input: BookInput) {
        if !input.title.is_empty() {
            self.title = input.title;
        }
        self.status = input.status;
        if let Some(description) = input.description.filter(|d| !d.is_empty()) {
            self.description = Some(description);
        }
        if let Some(author) = input.author {
            if !author.first_name.is_empty() {
                self.author.first_name = author.first_name;
            }
            if !author.last_name.is_empty() {
                self.author.last_name = author.last_name;
            }
        }
    }
}

impl From<&AuthorRecord> for Author {
    fn from(record: &AuthorRecord) -> Self {
        Self {
            id: ID(record.id.clone()),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
        }
    }
}

impl From<&BookRecord> for Book {
    fn from(record: &BookRecord) -> Self {
        Self {
            id: ID(record.id.clone()),
            title: record.title.clone(),
            status: record.status,
            author: Author::from(&record.author),
            description: record.description.clone(),
        }
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: ID(record.id),
            title: record.title,
            status: record.status,
            author: Author {
                id: ID(record.author.id),
                first_name: record.author.first_name,
                last_name: record.author.last_name,
            },
            description: record.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BookRecord {
        BookRecord {
            id: "3".to_string(),
            title: "Dune".to_string(),
            status: BookStatus::Instock,
            author: AuthorRecord {
                id: "3".to_string(),
                first_name: "Frank".to_string(),
                last_name: "Herbert".to_string(),
            },
            description: Some("Spice".to_string()),
        }
    }

    fn input(title: &str, status: BookStatus) -> BookInput {
        BookInput {
            title: title.to_string(),
            status,
            author: None,
            description: None,
        }
    }

    #[test]
    fn from_input_copies_id_into_author() {
        let created = BookRecord::from_input(
            "7".to_string(),
            BookInput {
                author: Some(AuthorInput {
                    first_name: "Ursula".to_string(),
                    last_name: "Le Guin".to_string(),
                }),
                ..input("Earthsea", BookStatus::Available)
            },
        );

        assert_eq!(created.id, "7");
        assert_eq!(created.author.id, "7");
        assert_eq!(created.author.last_name, "Le Guin");
        assert_eq!(created.description, None);
    }

    #[test]
    fn from_input_without_author_uses_empty_names() {
        let created = BookRecord::from_input("0".to_string(), input("Anon", BookStatus::Shipping));
        assert_eq!(created.author.first_name, "");
        assert_eq!(created.author.last_name, "");
    }

    #[test]
    fn merge_skips_empty_values() {
        let mut book = record();
        book.merge(BookInput {
            author: Some(AuthorInput {
                first_name: String::new(),
                last_name: "Herbert Jr.".to_string(),
            }),
            description: Some(String::new()),
            ..input("", BookStatus::Instock)
        });

        assert_eq!(book.title, "Dune");
        assert_eq!(book.description.as_deref(), Some("Spice"));
        assert_eq!(book.author.first_name, "Frank");
        assert_eq!(book.author.last_name, "Herbert Jr.");
    }

    #[test]
    fn merge_always_applies_status() {
        let mut book = record();
        book.merge(input("", BookStatus::Unavailable));
        assert_eq!(book.status, BookStatus::Unavailable);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn normalization_keeps_every_field() {
        let book = Book::from(&record());
        assert_eq!(book.id, ID::from("3"));
        assert_eq!(book.author.id, ID::from("3"));
        assert_eq!(book.author.first_name, "Frank");
        assert_eq!(book.status, BookStatus::Instock);
        assert_eq!(book, Book::from(record()));
    }

    #[test]
    fn seed_entries_use_camel_case_and_status_labels() {
        let json = r#"{
            "id": "0",
            "title": "Dune",
            "status": "Instock",
            "author": { "id": "0", "firstName": "Frank", "lastName": "Herbert" }
        }"#;

        let parsed: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, BookStatus::Instock);
        assert_eq!(parsed.author.first_name, "Frank");
        assert_eq!(parsed.description, None);
    }
}
