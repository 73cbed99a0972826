//! # terrain-domain
//!
//! Pure domain model for the terrain image resource.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **`TerrainImage`** resource (identity + bookkeeping timestamps)
//! - Define **form requests**: the authorization hook and rule set that guard
//!   the `store` and `update` actions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod request;
pub mod terrain_image;
