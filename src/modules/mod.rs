//! Modules layer - Cross-feature building blocks
//!
//! Contains the entity resolution and mutation core the catalog features share.

pub mod entity;
