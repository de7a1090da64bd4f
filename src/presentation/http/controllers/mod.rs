// src/presentation/http/controllers/mod.rs
pub mod campaigns;
