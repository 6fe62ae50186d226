//! Books catalog: an in-memory record store served through a GraphQL schema.
//!
//! - Queries: `book(id)`, `books`
//! - Mutations: `createBook`, `updateBook`, `deleteBook`

pub mod models;
pub mod resolvers;
pub mod routes;
pub mod schema;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookstore_kernel::settings::{GraphqlSettings, Settings};
use bookstore_kernel::{InitCtx, Module};

pub use models::{Author, AuthorInput, Book, BookInput, BookStatus};
pub use schema::{build_schema, BookstoreSchema};
pub use store::{BookStore, SharedBookStore};

/// Books module: owns the record store for the lifetime of the process
pub struct BooksModule {
    store: SharedBookStore,
    schema: BookstoreSchema,
    graphql: GraphqlSettings,
}

impl BooksModule {
    pub fn new(store: SharedBookStore, graphql: GraphqlSettings) -> Self {
        let schema = build_schema(Arc::clone(&store));
        Self {
            store,
            schema,
            graphql,
        }
    }

    pub fn store(&self) -> &SharedBookStore {
        &self.store
    }

    pub fn schema(&self) -> &BookstoreSchema {
        &self.schema
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn base_path(&self) -> String {
        "/".to_string()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if let Some(seed_path) = &ctx.settings.store.seed_path {
            let seed = store::load_seed(seed_path)?;
            let mut store = self.store.write().await;
            store.extend(seed);
            tracing::info!(
                module = self.name(),
                seed = %seed_path.display(),
                books = store.len(),
                "book store seeded"
            );
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.schema.clone(), &self.graphql)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let path = &self.graphql.path;
        let mut paths = serde_json::Map::new();

        paths.insert(
            path.clone(),
            serde_json::json!({
                "post": {
                    "summary": "Execute a GraphQL query or mutation",
                    "tags": ["Books"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/GraphQLRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "GraphQL response; resolver errors are reported in `errors`",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/GraphQLResponse" }
                                }
                            }
                        }
                    }
                }
            }),
        );

        paths.insert(
            format!("{}/schema.graphql", path),
            serde_json::json!({
                "get": {
                    "summary": "GraphQL schema definition",
                    "tags": ["Books"],
                    "responses": {
                        "200": {
                            "description": "SDL",
                            "content": {
                                "text/plain": { "schema": { "type": "string" } }
                            }
                        }
                    }
                }
            }),
        );

        Some(serde_json::json!({
            "paths": paths,
            "components": {
                "schemas": {
                    "GraphQLRequest": {
                        "type": "object",
                        "properties": {
                            "query": { "type": "string" },
                            "operationName": { "type": "string" },
                            "variables": { "type": "object" }
                        },
                        "required": ["query"]
                    },
                    "GraphQLResponse": {
                        "type": "object",
                        "properties": {
                            "data": { "type": "object" },
                            "errors": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "message": { "type": "string" },
                                        "extensions": { "type": "object" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let books = self.store.read().await.len();
        tracing::info!(module = self.name(), books, "books module stopped");
        Ok(())
    }
}

/// Create the books module with an empty store
pub fn create_module(settings: &Settings) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(
        BookStore::new().into_shared(),
        settings.graphql.clone(),
    ))
}
