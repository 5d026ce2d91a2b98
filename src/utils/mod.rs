//! Utility functions shared across layers.
//!
//! - [`hash`] - Short hash generation for original URLs

pub mod hash;
