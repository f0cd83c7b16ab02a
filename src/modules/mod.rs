pub mod authors;
pub mod books;
pub mod storage;

use bookshelf_db::Store;
use bookshelf_kernel::ModuleRegistry;

/// Register the storage core module and the HTTP modules, all sharing `store`
pub fn register_all(registry: &mut ModuleRegistry, store: &Store) {
    registry.register_core(storage::create_module(store.clone()));
    registry.register_custom(books::create_module(store.clone()));
    registry.register_custom(authors::create_module(store.clone()));
}
