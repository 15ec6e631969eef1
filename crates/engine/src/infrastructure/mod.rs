//! Infrastructure implementations.
//!
//! Contains port trait implementations for storage plus the built-in content
//! catalog and runtime configuration.

pub mod catalog;
pub mod config;
pub mod persistence;
pub mod ports;
