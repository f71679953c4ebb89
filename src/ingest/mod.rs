pub mod walker;
pub mod loader;

pub use walker::collect_json_files;
pub use loader::load_json_file;
