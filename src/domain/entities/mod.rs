//! Core domain entities.
//!
//! - [`Link`] - A hash-keyed short link

pub mod link;

pub use link::Link;
