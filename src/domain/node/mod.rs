pub mod entity;
pub mod fields;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, Campaign, NodeMeta};
pub use fields::{ImageField, RichText, TextFormat};
pub use repository::{ArticleReadRepository, CampaignReadRepository};
pub use value_objects::{NodeId, NodeTitle, NodeType};
