// src/infrastructure/mod.rs
pub mod database;
pub mod image_styles;
pub mod rendering;
pub mod repositories;
