pub mod filesystem;
#[cfg(test)]
pub mod memory_project_store;

pub use filesystem::FilesystemProjectStore;
#[cfg(test)]
pub use memory_project_store::MemoryProjectStore;
