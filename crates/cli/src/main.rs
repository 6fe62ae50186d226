use anyhow::Context;
use async_graphql::{Request, Variables};
use bookstore_app::books::{build_schema, store, BookStore};
use bookstore_kernel::settings::Settings;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookstore", version, about = "Bookstore catalog service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the GraphQL schema definition
    Schema,
    /// Execute a GraphQL document against an in-process store and print the response
    Query {
        document: String,
        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load().with_context(|| "failed to load bookstore settings")?;

    match cli.command {
        Command::Serve { host, port } => {
            bookstore_telemetry::init(&settings.telemetry)?;
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            tracing::info!(env = ?settings.environment, "bookstore-cli serve");
            bookstore_app::bootstrap::run(settings).await
        }
        Command::Schema => {
            let schema = build_schema(BookStore::new().into_shared());
            println!("{}", schema.sdl());
            Ok(())
        }
        Command::Query {
            document,
            variables,
        } => run_query(&settings, document, variables).await,
    }
}

async fn run_query(
    settings: &Settings,
    document: String,
    variables: Option<String>,
) -> anyhow::Result<()> {
    let seed = match &settings.store.seed_path {
        Some(path) => store::load_seed(path)?,
        None => Vec::new(),
    };
    let schema = build_schema(BookStore::from_records(seed).into_shared());

    let mut request = Request::new(document);
    if let Some(raw) = variables {
        let json: serde_json::Value =
            serde_json::from_str(&raw).with_context(|| "--variables must be a JSON object")?;
        request = request.variables(Variables::from_json(json));
    }

    let response = schema.execute(request).await;
    let failed = response.is_err();
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("failed to encode response")?
    );

    if failed {
        anyhow::bail!("query returned errors");
    }
    Ok(())
}
