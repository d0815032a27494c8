#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FsArtifactRepository;
pub use repository::{ArtifactBundle, ArtifactRepository, InMemoryArtifactRepository, StorageError};
