// src/presentation/http/mod.rs
pub mod cache;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
