use anyhow::Context;
use async_trait::async_trait;
use bookshelf_db::{default_seed, BootstrapOutcome, Store};
use bookshelf_kernel::{InitCtx, Module};

use crate::utils::blocking;

/// Core `db` module: bootstraps the schema before any handler runs.
pub struct StorageModule {
    store: Store,
}

impl StorageModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for StorageModule {
    fn name(&self) -> &'static str {
        "db"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let seed = if ctx.settings.database.seed {
            default_seed()
        } else {
            Vec::new()
        };

        let store = self.store.clone();
        let outcome = blocking(move || store.bootstrap(&seed))
            .await
            .context("database bootstrap failed")?;

        match outcome {
            BootstrapOutcome::Created { seeded } => tracing::info!(
                module = self.name(),
                path = %self.store.path().display(),
                seeded,
                "database created"
            ),
            BootstrapOutcome::AlreadyPresent => tracing::info!(
                module = self.name(),
                path = %self.store.path().display(),
                "using existing database"
            ),
        }
        Ok(())
    }
}

pub fn create_module(store: Store) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(StorageModule::new(store))
}
