pub mod models;
pub mod routes;
pub mod schema;
pub mod validation;

use async_trait::async_trait;
use axum::Router;
use bookshelf_db::Store;
use bookshelf_kernel::{InitCtx, Module};

/// Books module: CRUD over `/api/books`
pub struct BooksModule {
    store: Store,
}

impl BooksModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }
}

/// Create a new instance of the books module
pub fn create_module(store: Store) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(store))
}
