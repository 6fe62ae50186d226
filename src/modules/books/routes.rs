use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use bookstore_kernel::settings::GraphqlSettings;

use super::schema::BookstoreSchema;

#[derive(Clone)]
struct GraphqlState {
    schema: BookstoreSchema,
    endpoint: String,
}

/// `POST {path}` executes requests, `GET {path}` serves the playground when
/// enabled, and `GET {path}/schema.graphql` returns the SDL.
pub fn router(schema: BookstoreSchema, settings: &GraphqlSettings) -> Router {
    let state = GraphqlState {
        schema,
        endpoint: settings.path.clone(),
    };

    let endpoint = if settings.playground {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(&settings.path, endpoint)
        .route(&format!("{}/schema.graphql", settings.path), get(sdl))
        .with_state(state)
}

async fn graphql_handler(State(state): State<GraphqlState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql(State(state): State<GraphqlState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&state.endpoint).finish())
}

async fn sdl(State(state): State<GraphqlState>) -> String {
    state.schema.sdl()
}
