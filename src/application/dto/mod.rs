pub mod articles;
pub mod cacheable;
pub mod campaigns;
pub mod common;
pub mod serde_time;

pub use articles::ArticleDto;
pub use cacheable::Cacheable;
pub use campaigns::{CampaignDetailDto, CampaignReferenceDto, CampaignSummaryDto};
pub use common::{FormattedTextDto, ImageDto, ImageSetDto, LanguagesDto, RenderedBodyDto};
