// src/domain/mod.rs
pub mod errors;
pub mod language;
pub mod node;
