//! Application layer services.
//!
//! Services sit between the HTTP handlers and the link store: they build
//! entities, call the store and turn store failures into [`crate::AppError`].
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation and resolution

pub mod services;
