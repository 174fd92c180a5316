pub mod files;
pub mod kv;

pub use files::{ensure_data_dir, get_data_dir, init_data_dir, init_local_data_dir};
pub use kv::{FileKv, KeyValueStore, THEME_KEY, TODOS_KEY};
#[cfg(test)]
pub use kv::MemoryKv;
