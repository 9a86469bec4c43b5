pub mod json_dir;
pub mod loader;
pub mod memory;

pub use json_dir::JsonDirLoader;
pub use loader::SourceLoader;
pub use memory::MemoryLoader;

#[cfg(test)]
mod json_dir_test;
#[cfg(test)]
mod memory_test;
