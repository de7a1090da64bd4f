// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content_repos;
pub mod time;

pub use content_repos::{FailingContentRepo, InMemoryContent};
pub use time::fixed_now;
