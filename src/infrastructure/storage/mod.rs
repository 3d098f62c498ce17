//! Storage writability probing.

mod fs_probe;
mod service;

pub use fs_probe::FsStorageProbe;
pub use service::StorageProbe;

#[cfg(test)]
pub use service::MockStorageProbe;
