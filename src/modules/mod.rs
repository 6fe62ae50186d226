pub mod books;

use bookstore_kernel::settings::Settings;
use bookstore_kernel::ModuleRegistry;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings) {
    registry.register(books::create_module(settings));
}
