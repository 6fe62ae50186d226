use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema, ID};

use super::models::{Book, BookInput};
use super::resolvers;
use super::store::SharedBookStore;

pub type BookstoreSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `store`; resolvers reach it through the context data.
pub fn build_schema(store: SharedBookStore) -> BookstoreSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Information about specific book by its id
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Book> {
        let store = ctx.data::<SharedBookStore>()?.read().await;
        resolvers::get_book_by_id(&store, &id).map_err(|e| e.extend())
    }

    /// Information about all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = ctx.data::<SharedBookStore>()?.read().await;
        Ok(resolvers::get_all_books(&store))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a new book
    async fn create_book(&self, ctx: &Context<'_>, input: BookInput) -> async_graphql::Result<Book> {
        let mut store = ctx.data::<SharedBookStore>()?.write().await;
        Ok(resolvers::create_book(&mut store, input))
    }

    /// Updates full or partial information about book with the specified book id
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: String,
        input: BookInput,
    ) -> async_graphql::Result<Book> {
        let mut store = ctx.data::<SharedBookStore>()?.write().await;
        resolvers::update_book(&mut store, &id, input).map_err(|e| e.extend())
    }

    /// Deletes a book by the specified book id
    async fn delete_book(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Book> {
        let mut store = ctx.data::<SharedBookStore>()?.write().await;
        resolvers::delete_book(&mut store, &id).map_err(|e| e.extend())
    }
}
