use anyhow::Context;
use bookstore_kernel::settings::Settings;
use bookstore_kernel::{InitCtx, ModuleRegistry};

use crate::modules;

/// Build a registry holding every application module.
pub fn registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings);
    registry
}

/// Run the service: initialize and start modules, serve HTTP until shutdown,
/// then stop modules in reverse order.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_all(&ctx)
        .await
        .context("failed to initialize modules")?;
    registry
        .start_all(&ctx)
        .await
        .context("failed to start modules")?;

    let served = bookstore_http::start_server(&registry, &settings).await;

    registry
        .stop_all()
        .await
        .context("failed to stop modules")?;

    served
}
