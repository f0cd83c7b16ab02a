//! Bookshelf application library
//!
//! Books and authors over HTTP, stored in a single SQLite file.

pub mod modules;
pub mod utils;

use anyhow::Context;
use bookshelf_db::Store;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Registry holding the storage core module and the HTTP modules
pub fn build_registry(store: &Store) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store);
    registry
}

/// Bootstrap storage, serve HTTP until shutdown, then stop every module
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let store = Store::new(&settings.database.path);
    let registry = build_registry(&store);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_modules(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_modules(&ctx)
        .await
        .context("module start failed")?;

    let served = bookshelf_http::start_server(&registry, &settings).await;
    registry.stop_modules().await?;
    served
}
