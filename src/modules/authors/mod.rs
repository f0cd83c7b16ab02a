pub mod routes;

use async_trait::async_trait;
use axum::Router;
use bookshelf_db::Store;
use bookshelf_kernel::Module;

/// Authors module: author creation, per-author book listing, and cascading
/// author deletion. Shares payload shapes with the books module.
pub struct AuthorsModule {
    store: Store,
}

impl AuthorsModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for AuthorsModule {
    fn name(&self) -> &'static str {
        "authors"
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }
}

pub fn create_module(store: Store) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorsModule::new(store))
}
