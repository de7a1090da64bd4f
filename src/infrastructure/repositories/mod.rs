// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_content;

pub use error::map_sqlx;
pub use postgres_content::{PostgresArticleReadRepository, PostgresCampaignReadRepository};
