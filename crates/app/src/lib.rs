//! # terrain-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TerrainImageRepository` — lookup used for route binding
//! - Define the **driving/inbound** use-case struct:
//!   - `TerrainImageController` — the seven resource actions plus route binding
//!
//! ## Dependency rule
//! Depends on `terrain-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
