//! Outbound ports implemented by adapter crates.

pub mod storage;

pub use storage::TerrainImageRepository;
