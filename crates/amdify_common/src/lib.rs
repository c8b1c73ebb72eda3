mod import_record;
pub use import_record::*;
mod loader;
pub use loader::*;
