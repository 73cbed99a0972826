//! # terrain-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Route the seven resource actions under `/terrain-images`:
//!
//!   | Verb        | Path                                   | Action  |
//!   |-------------|----------------------------------------|---------|
//!   | `GET`       | `/terrain-images`                      | index   |
//!   | `GET`       | `/terrain-images/create`               | create  |
//!   | `POST`      | `/terrain-images`                      | store   |
//!   | `GET`       | `/terrain-images/{terrain_image}`      | show    |
//!   | `GET`       | `/terrain-images/{terrain_image}/edit` | edit    |
//!   | `PUT/PATCH` | `/terrain-images/{terrain_image}`      | update  |
//!   | `DELETE`    | `/terrain-images/{terrain_image}`      | destroy |
//!
//! - Bind `{terrain_image}` to a stored entity before the handler runs
//! - Read JSON or form bodies and run them through the action's form request
//! - Map application errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `terrain-app` (for port traits and the controller) and
//! `terrain-domain` (for request and entity types). Never leaks axum types
//! into the domain.

pub mod binding;
pub mod error;
pub mod payload;
pub mod router;
pub mod state;
pub mod terrain_images;
